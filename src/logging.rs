//! Tracing subscriber setup shared by the server and the CLI.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Config;

/// Installs the global subscriber writing to stdout.
pub fn init(config: &Config) {
    init_with_writer(&config.log_level, &config.log_format, std::io::stdout);
}

/// Installs the global subscriber with an explicit writer.
///
/// `log_format` selects `json` output; anything else gives the text formatter.
/// An unparsable `log_level` falls back to `info`.
pub fn init_with_writer<W>(log_level: &str, log_format: &str, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let installed = if log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = installed {
        eprintln!("Tracing subscriber already installed: {e}");
    }
}
