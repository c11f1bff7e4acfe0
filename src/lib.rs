//! Renders the email that tells a user their account was imported into a site,
//! together with the credentials generated for them.
//!
//! ```no_run
//! use account_import_mail::email::EmailRenderer;
//! use account_import_mail::emails::AccountImportedEmail;
//! use account_import_mail::i18n::Untranslated;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), account_import_mail::RenderError> {
//! let renderer = EmailRenderer::new(Arc::new(Untranslated))?;
//! let email = AccountImportedEmail::new("Example Co", "jdoe", "s3cr3t")?;
//! let html = renderer.render_html(&email)?;
//! # Ok(())
//! # }
//! ```

pub mod email;
pub mod emails;
mod error;
pub use error::*;
pub mod i18n;
pub mod infra;
