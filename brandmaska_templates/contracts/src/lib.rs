use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render both the plain text and the html variant of the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<RenderedTemplate>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: RenderedTemplate,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

/// An email template that exists as a plain text and an html variant.
///
/// Values interpolated into the html variant are escaped, the plain text
/// variant is rendered verbatim.
pub trait Template: Serialize {
    const NAME: &'static str;
    const TEXT: &'static str;
    const HTML: &'static str;

    fn text_name() -> String {
        format!("{}.txt", Self::NAME)
    }

    fn html_name() -> String {
        format!("{}.html", Self::NAME)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub text: String,
    pub html: String,
}

macro_rules! templates {
    ($( $ident:ident ( $name:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $name;
                const TEXT: &'static str = include_str!(concat!("../templates/", $name, ".txt"));
                const HTML: &'static str = include_str!(concat!("../templates/", $name, ".html"));
            }
        )*

        /// `(name, text, html)` of every known template
        pub const TEMPLATES: &[(&str, &str, &str)] = &[
            $( ($ident::NAME, $ident::TEXT, $ident::HTML) ),*
        ];
    };
}

templates! {
    ContactNotificationTemplate("contact_notification"),
}

/// Notification sent to the agency's inbox for every contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactNotificationTemplate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}
