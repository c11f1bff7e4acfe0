use crate::i18n::Translator;
use anyhow::{Context as _, Result};
use figment::Figment;
use headers::MessageBuilderExt;
use lettre::message::Mailbox;
use lettre::Message;
use serde::Deserialize;

mod headers;
mod render;
pub use render::*;

pub trait EmailMessage: EmailTemplate {
    fn subject(&self, translator: &dyn Translator) -> String;

    fn reply_to(&self) -> Option<Mailbox> {
        None
    }
}

/// Turns rendered emails into messages ready to be handed to a transport.
#[derive(Debug, Clone)]
pub struct MessageComposer {
    sender: Mailbox,
    reply_to: Option<Mailbox>,
}

impl MessageComposer {
    pub fn new(sender: Mailbox, reply_to: Option<Mailbox>) -> Self {
        Self { sender, reply_to }
    }

    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: MessageComposerConfig = figment
            .extract_inner("email")
            .context("failed to read email sender configuration")?;
        Ok(Self::new(config.sender, config.reply_to))
    }

    pub fn compose(
        &self,
        recipient: Mailbox,
        email: &dyn EmailMessage,
        renderer: &EmailRenderer,
        translator: &dyn Translator,
    ) -> Result<Message> {
        let body = renderer.render(email)?;
        let mut builder = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(email.subject(translator))
            .auto_generated();
        if let Some(reply_to) = email.reply_to().or_else(|| self.reply_to.clone()) {
            builder = builder.reply_to(reply_to);
        }
        builder
            .multipart(body.into())
            .context("failed to create email message")
    }
}

#[derive(Debug, Deserialize)]
struct MessageComposerConfig {
    sender: Mailbox,
    reply_to: Option<Mailbox>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emails::AccountImportedEmail;
    use crate::i18n::Untranslated;
    use figment::providers::{Format as _, Toml};
    use figment::Jail;
    use std::sync::Arc;

    fn compose(composer: &MessageComposer) -> String {
        let email = AccountImportedEmail::new("Example Co", "jdoe", "s3cr3t").unwrap();
        let renderer = EmailRenderer::new(Arc::new(Untranslated)).unwrap();
        let message = composer
            .compose(
                "J. Doe <jdoe@example.com>".parse().unwrap(),
                &email,
                &renderer,
                &Untranslated,
            )
            .unwrap();
        String::from_utf8(message.formatted()).unwrap()
    }

    #[test]
    fn composes_message_with_headers() {
        let composer =
            MessageComposer::new("Example Co <noreply@example.com>".parse().unwrap(), None);
        let formatted = compose(&composer);
        assert!(formatted.contains("<noreply@example.com>"));
        assert!(formatted.contains("<jdoe@example.com>"));
        assert!(formatted.contains("Subject: Example Co | Account imported"));
        assert!(formatted.contains("Auto-Submitted: auto-generated"));
        assert!(formatted.contains("multipart/alternative"));
        assert!(!formatted.contains("Reply-To:"));
    }

    #[test]
    fn uses_configured_reply_to() {
        let composer = MessageComposer::new(
            "noreply@example.com".parse().unwrap(),
            Some("support@example.com".parse().unwrap()),
        );
        assert!(compose(&composer).contains("Reply-To: support@example.com"));
    }

    #[test]
    fn reads_configuration() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "AccountImport.toml",
                r#"
                [email]
                sender = "Example Co <noreply@example.com>"
                reply_to = "support@example.com"
                "#,
            )?;
            let figment = Figment::from(Toml::file("AccountImport.toml"));
            let composer = MessageComposer::from_figment(&figment).map_err(|e| e.to_string())?;
            assert_eq!("noreply@example.com", composer.sender.email.to_string());
            assert_eq!(
                Some("support@example.com".to_owned()),
                composer.reply_to.map(|m| m.email.to_string())
            );
            Ok(())
        });
    }

    #[test]
    fn missing_sender_is_an_error() {
        assert!(MessageComposer::from_figment(&Figment::new()).is_err());
    }
}
