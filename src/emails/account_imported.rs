use crate::email::{EmailMessage, EmailTemplate};
use crate::error::{RenderError, RenderResult};
use crate::i18n::{Args, Markup, Translator};
use serde::Deserialize;
use std::fmt;
use tera::Context;

/// Tells a user that their account was imported and what their credentials are.
///
/// Note that the password ends up in the email body in cleartext.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountImportedEmail {
    site_name: String,
    username: String,
    password: String,
}

/// Render context as handed over by the import job. Fields may be missing.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AccountImportedContext {
    pub site_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AccountImportedEmail {
    pub fn new(
        site_name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> RenderResult<Self> {
        Ok(Self {
            site_name: non_empty("site_name", site_name.into())?,
            username: non_empty("username", username.into())?,
            password: non_empty("password", password.into())?,
        })
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

fn non_empty(field: &'static str, value: String) -> RenderResult<String> {
    if value.is_empty() {
        Err(RenderError::EmptyField { field })
    } else {
        Ok(value)
    }
}

fn required(field: &'static str, value: Option<String>) -> RenderResult<String> {
    value.ok_or(RenderError::MissingField { field })
}

impl TryFrom<AccountImportedContext> for AccountImportedEmail {
    type Error = RenderError;

    fn try_from(context: AccountImportedContext) -> RenderResult<Self> {
        Self::new(
            required("site_name", context.site_name)?,
            required("username", context.username)?,
            required("password", context.password)?,
        )
    }
}

impl fmt::Debug for AccountImportedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountImportedEmail")
            .field("site_name", &self.site_name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl EmailTemplate for AccountImportedEmail {
    fn template_name(&self) -> &'static str {
        "account_imported"
    }

    fn template_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site_name", &self.site_name);
        context.insert("username", &self.username);
        context.insert("password", &self.password);
        context
    }
}

impl EmailMessage for AccountImportedEmail {
    fn subject(&self, translator: &dyn Translator) -> String {
        let title = translator.translate("Account imported", &Args::new(), Markup::Text);
        format!("{} | {title}", self.site_name)
    }
}
