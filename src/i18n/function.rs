use super::{Args, Markup, Translator};
use std::collections::HashMap;
use std::sync::Arc;
use tera::{Function, Tera, Value};

/// Registers `t` (for HTML templates) and `t_text` (for plain text templates).
///
/// Both take the English phrase as `source`; every other argument
/// is a placeholder value:
/// ```tera
/// {{ t(source="Your account was imported into the %site site.", site=site_name) }}
/// ```
pub(crate) fn register_translate_functions(tera: &mut Tera, translator: Arc<dyn Translator>) {
    tera.register_function(
        "t",
        Translate {
            name: "t",
            translator: translator.clone(),
            markup: Markup::Html,
        },
    );
    tera.register_function(
        "t_text",
        Translate {
            name: "t_text",
            translator,
            markup: Markup::Text,
        },
    );
}

struct Translate {
    name: &'static str,
    translator: Arc<dyn Translator>,
    markup: Markup,
}

impl Function for Translate {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let source = match args.get("source") {
            Some(Value::String(source)) => source,
            Some(value) => {
                return Err(tera::Error::msg(format!(
                    "Function `{}` received source={value}, expected a String",
                    self.name
                )))
            }
            None => {
                return Err(tera::Error::msg(format!(
                    "Function `{}` requires argument `source`",
                    self.name
                )))
            }
        };
        let placeholders = args
            .iter()
            .filter(|(name, _)| name.as_str() != "source")
            .map(|(name, value)| {
                self.placeholder_value(name, value)
                    .map(|value| (name.as_str(), value))
            })
            .collect::<tera::Result<Args>>()?;
        Ok(Value::String(self.translator.translate(
            source,
            &placeholders,
            self.markup,
        )))
    }
}

impl Translate {
    fn placeholder_value(&self, name: &str, value: &Value) -> tera::Result<String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            value => Err(tera::Error::msg(format!(
                "Function `{}` received {name}={value}, expected a String",
                self.name
            ))),
        }
    }
}
