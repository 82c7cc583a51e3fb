use std::sync::Arc;

use anyhow::Context;
use brandmaska_templates_contracts::{RenderedTemplate, Template, TemplateService, TEMPLATES};
use tera::Tera;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        for &(name, text, html) in TEMPLATES {
            tera.add_raw_template(&format!("{name}.txt"), text)
                .with_context(|| format!("Failed to parse text template {name}"))?;
            tera.add_raw_template(&format!("{name}.html"), html)
                .with_context(|| format!("Failed to parse html template {name}"))?;
        }

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<RenderedTemplate> {
        let context = tera::Context::from_serialize(template)?;
        Ok(RenderedTemplate {
            text: self.tera.render(&T::text_name(), &context)?,
            html: self.tera.render(&T::html_name(), &context)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use brandmaska_templates_contracts::ContactNotificationTemplate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn notification(phone: Option<&str>) -> ContactNotificationTemplate {
        ContactNotificationTemplate {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: phone.map(Into::into),
            message: "Hello there, this is a test.".into(),
        }
    }

    #[test]
    fn contact_notification_text() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();

        // Act
        let result = sut.render(&notification(Some("+91 89541 24805")));

        // Assert
        assert_eq!(
            result.unwrap().text,
            "Name: Ada\nEmail: ada@example.com\nPhone: +91 89541 24805\n\nMessage:\nHello \
             there, this is a test."
        );
    }

    #[test]
    fn contact_notification_text_without_phone() {
        let sut = TemplateServiceImpl::new().unwrap();

        let result = sut.render(&notification(None)).unwrap();

        assert_eq!(
            result.text,
            "Name: Ada\nEmail: ada@example.com\nPhone: —\n\nMessage:\nHello there, this is a \
             test."
        );
        assert!(result
            .html
            .contains("<p><strong>Phone:</strong> —</p>"));
    }

    #[test]
    fn contact_notification_html() {
        let sut = TemplateServiceImpl::new().unwrap();

        let html = sut.render(&notification(Some("+91 89541 24805"))).unwrap().html;

        assert!(html.contains("<h2 style=\"margin:0 0 12px 0;\">New Contact Form Submission</h2>"));
        assert!(html.contains("<p><strong>Name:</strong> Ada</p>"));
        assert!(html.contains("<p><strong>Email:</strong> ada@example.com</p>"));
        assert!(html.contains("<p><strong>Phone:</strong> +91 89541 24805</p>"));
        assert!(html.contains(
            "<p style=\"white-space:pre-wrap; margin:0;\"><strong>Message:</strong><br/>Hello \
             there, this is a test.</p>"
        ));
    }

    #[test]
    fn contact_notification_html_escapes_values() {
        // Arrange
        let sut = TemplateServiceImpl::new().unwrap();
        let template = ContactNotificationTemplate {
            name: "<b>Mallory</b>".into(),
            email: "mallory@example.com".into(),
            phone: None,
            message: "<script>alert(1)</script> & more".into(),
        };

        // Act
        let result = sut.render(&template).unwrap();

        // Assert
        assert!(result.html.contains("&lt;b&gt;Mallory&lt;&#x2F;b&gt;"));
        assert!(result
            .html
            .contains("&lt;script&gt;alert(1)&lt;&#x2F;script&gt; &amp; more"));
        assert!(!result.html.contains("<script>"));
        assert!(result.text.contains("Name: <b>Mallory</b>"));
        assert!(result.text.ends_with("<script>alert(1)</script> & more"));
    }

    #[test]
    fn every_template_parses() {
        let sut = TemplateServiceImpl::new().unwrap();

        for &(name, _, _) in TEMPLATES {
            assert!(sut
                .tera
                .get_template_names()
                .any(|x| x == format!("{name}.html")));
            assert!(sut
                .tera
                .get_template_names()
                .any(|x| x == format!("{name}.txt")));
        }
    }
}
