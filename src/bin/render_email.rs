use account_import_mail::email::{EmailRenderer, MessageComposer};
use account_import_mail::emails::{AccountImportedContext, AccountImportedEmail};
use account_import_mail::infra::config;
use account_import_mail::infra::logging::init_logging;
use anyhow::{Context as _, Result};
use clap::Parser;
use lettre::message::Mailbox;
use lettre::{FileTransport, Transport as _};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing::info;

/// Renders the "account imported" email for one user.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Name of the site the account was imported into
    #[arg(long)]
    site_name: Option<String>,
    /// Username generated for the imported account
    #[arg(long)]
    username: Option<String>,
    /// Password generated for the imported account
    #[arg(long)]
    password: Option<String>,
    /// Configuration file (defaults to AccountImport.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the plain text part instead of the HTML
    #[arg(long)]
    plain: bool,
    /// Compose a complete message to this recipient and write it to `--out`
    #[arg(long)]
    to: Option<Mailbox>,
    /// Directory for composed messages
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse();
    let figment = config::figment(args.config.as_deref());
    let translator = config::translator(&figment)?;
    let renderer = EmailRenderer::new(translator.clone())?;
    let email = AccountImportedEmail::try_from(AccountImportedContext {
        site_name: args.site_name,
        username: args.username,
        password: args.password,
    })?;

    match args.to {
        Some(recipient) => {
            let composer = MessageComposer::from_figment(&figment)?;
            let message = composer.compose(recipient, &email, &renderer, translator.as_ref())?;
            let id = FileTransport::new(&args.out)
                .send(&message)
                .context("failed to write email")?;
            info!(id = %id, out = %args.out.display(), "wrote email");
        }
        None => {
            let body = renderer.render(&email)?;
            let part = if args.plain { body.plain } else { body.html };
            io::stdout()
                .write_all(part.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}
