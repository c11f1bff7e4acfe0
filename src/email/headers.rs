use lettre::message::header::{Header, HeaderName, HeaderValue};
use lettre::message::MessageBuilder;
use std::error::Error;

pub(crate) trait MessageBuilderExt {
    /// Marks the message as sent by an automated process (RFC 3834).
    fn auto_generated(self) -> Self;
}

impl MessageBuilderExt for MessageBuilder {
    fn auto_generated(self) -> Self {
        self.header(AutoSubmitted::AutoGenerated)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum AutoSubmitted {
    No,
    AutoGenerated,
    AutoReplied,
}

impl AutoSubmitted {
    fn as_str(self) -> &'static str {
        match self {
            AutoSubmitted::No => "no",
            AutoSubmitted::AutoGenerated => "auto-generated",
            AutoSubmitted::AutoReplied => "auto-replied",
        }
    }
}

impl Header for AutoSubmitted {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_str("Auto-Submitted")
    }

    fn parse(s: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        match s.trim() {
            "no" => Ok(AutoSubmitted::No),
            "auto-generated" => Ok(AutoSubmitted::AutoGenerated),
            "auto-replied" => Ok(AutoSubmitted::AutoReplied),
            other => Err(format!("invalid Auto-Submitted value: {other}").into()),
        }
    }

    fn display(&self) -> HeaderValue {
        HeaderValue::new(Self::name(), self.as_str().to_owned())
    }
}
