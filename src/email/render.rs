use crate::error::RenderResult;
use crate::i18n::{register_translate_functions, Translator};
use lettre::message::MultiPart;
use std::sync::Arc;
use tera::{Context, Tera};
use tracing::debug;

const TEMPLATES: &[(&str, &str)] = &[
    (
        "account_imported.html.tera",
        include_str!("../../emails/account_imported.html.tera"),
    ),
    (
        "account_imported.txt.tera",
        include_str!("../../emails/account_imported.txt.tera"),
    ),
];

pub trait EmailTemplate {
    /// Base name of the template pair `{name}.html.tera` / `{name}.txt.tera`.
    fn template_name(&self) -> &'static str;

    fn template_context(&self) -> Context {
        Context::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailBody {
    pub plain: String,
    pub html: String,
}

impl From<EmailBody> for MultiPart {
    fn from(value: EmailBody) -> Self {
        MultiPart::alternative_plain_html(value.plain, value.html)
    }
}

/// Renders emails from the templates compiled into the crate.
#[derive(Debug, Clone)]
pub struct EmailRenderer {
    tera: Tera,
}

impl EmailRenderer {
    pub fn new(translator: Arc<dyn Translator>) -> RenderResult<Self> {
        Ok(Self {
            tera: create_tera(translator)?,
        })
    }

    pub fn render<T: EmailTemplate + ?Sized>(&self, email: &T) -> RenderResult<EmailBody> {
        let template_name = email.template_name();
        let context = email.template_context();
        debug!(template = template_name, "rendering email");
        Ok(EmailBody {
            plain: self.render_part(template_name, "txt", &context)?,
            html: self.render_part(template_name, "html", &context)?,
        })
    }

    pub fn render_html<T: EmailTemplate + ?Sized>(&self, email: &T) -> RenderResult<String> {
        self.render_part(email.template_name(), "html", &email.template_context())
    }

    fn render_part(
        &self,
        template_name: &str,
        kind: &str,
        context: &Context,
    ) -> RenderResult<String> {
        let name = format!("{template_name}.{kind}.tera");
        Ok(self.tera.render(&name, context)?)
    }
}

fn create_tera(translator: Arc<dyn Translator>) -> RenderResult<Tera> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html.tera"]);
    register_translate_functions(&mut tera, translator);
    tera.add_raw_templates(TEMPLATES.iter().copied())?;
    Ok(tera)
}
