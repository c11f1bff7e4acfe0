//! Localization of the static phrases used in emails.
//!
//! Phrases are keyed by their English source text. A [`Translator`] maps a
//! source phrase to its localized form; phrases without a translation are
//! rendered in English.

use std::fmt;
use tracing::trace;

mod catalog;
pub use catalog::*;
mod function;
pub(crate) use function::*;
mod placeholders;
pub use placeholders::*;

pub trait Translator: Send + Sync + fmt::Debug {
    /// Returns the localized form of `source`, or `None` if there is none.
    fn lookup(&self, source: &str) -> Option<&str>;

    /// Localizes `source` and substitutes its placeholders with `args`.
    fn translate(&self, source: &str, args: &Args, markup: Markup) -> String {
        let pattern = self.lookup(source).unwrap_or_else(|| {
            trace!(source, "no translation found");
            source
        });
        args.substitute(pattern, markup)
    }
}

/// Leaves every phrase in its English source form.
#[derive(Debug, Default, Copy, Clone)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn lookup(&self, _source: &str) -> Option<&str> {
        None
    }
}

/// The kind of document a translated phrase ends up in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Markup {
    Html,
    Text,
}
