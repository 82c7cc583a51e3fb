use anyhow::bail;
use brandmaska_client::{
    Banner, ContactApiServiceImpl, ContactFormController, FormField, SubmitOutcome,
};
use clap::Args;
use url::Url;

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Base url of the site serving the contact endpoint
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    url: Url,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long)]
    message: String,
}

impl SubmitArgs {
    pub async fn invoke(self) -> anyhow::Result<()> {
        let api = ContactApiServiceImpl::new(&self.url)?;
        let mut form = ContactFormController::new(api);
        form.update_field(FormField::Name, self.name);
        form.update_field(FormField::Email, self.email);
        form.update_field(FormField::Phone, self.phone);
        form.update_field(FormField::Message, self.message);

        match form.submit().await {
            SubmitOutcome::Sent => {
                if let Some(Banner::Success(message)) = form.banner() {
                    println!("{message}");
                }
                Ok(())
            }
            SubmitOutcome::Invalid => {
                for (field, message) in form.errors().iter() {
                    eprintln!("{field}: {message}");
                }
                bail!("The form contains invalid fields")
            }
            SubmitOutcome::Failed | SubmitOutcome::Busy => match form.banner() {
                Some(Banner::Error(message)) => bail!("{message}"),
                _ => bail!("Failed to submit the contact form"),
            },
        }
    }
}
