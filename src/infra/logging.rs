use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Logs to stderr so rendered output on stdout stays clean.
/// The level defaults to `INFO` and can be changed through `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
