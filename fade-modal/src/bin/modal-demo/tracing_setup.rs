//! Tracing subscriber for the modal-demo binary.
//!
//! Installed before Dioxus launches so dioxus-logger does not claim the
//! global subscriber.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::Result;
use fade_modal::config::LoggingConfig;
use tracing::Level;
use tracing_subscriber::filter::{filter_fn, ParseError};
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Targets of the webview stack underneath `dioxus-desktop`.
const WEBVIEW_TARGETS: [&str; 3] = ["wry", "tao", "dioxus_desktop"];

fn is_webview_noise(target: &str, level: Level) -> bool {
    level > Level::WARN && WEBVIEW_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

/// `RUST_LOG` wins outright. Otherwise the configured level plus one
/// directive per entry in `targets`.
fn build_filter(
    config: &LoggingConfig,
    rust_log: Option<&str>,
) -> Result<EnvFilter, ParseError> {
    if let Some(directives) = rust_log {
        return EnvFilter::try_new(directives);
    }
    let mut filter = EnvFilter::try_new(&config.level)?;
    for (target, level) in &config.targets {
        filter = filter.add_directive(format!("{target}={level}").parse()?);
    }
    Ok(filter)
}

fn open_log_file(config: &LoggingConfig) -> Option<File> {
    let path = config.log_file.as_ref()?;
    match File::create(path) {
        Ok(file) => {
            eprintln!("Logging to {}", path.display());
            Some(file)
        }
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {err}", path.display());
            None
        }
    }
}

/// Install the global subscriber described by `config`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(config, rust_log.as_deref())?;

    let (writer, ansi) = match open_log_file(config) {
        Some(file) => (BoxMakeWriter::new(Mutex::new(file)), false),
        None => (BoxMakeWriter::new(io::stderr), true),
    };

    let quiet_webview = config.quiet_webview;
    let fmt_layer = fmt::layer()
        .with_ansi(ansi)
        .with_writer(writer)
        .with_filter(filter_fn(move |meta| {
            !(quiet_webview && is_webview_noise(meta.target(), *meta.level()))
        }));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
