//! Entry point for the modal-demo binary.
//!
//! Usage: `modal-demo [config.toml]`

mod app;
mod tracing_setup;

use std::path::PathBuf;

use anyhow::Result;
use fade_modal::{ModalConfig, MODAL_STYLESHEET};

fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ModalConfig::load_or_default(config_path.as_deref()).unwrap_or_else(|err| {
        eprintln!("Warning: failed to load config: {:#}", anyhow::Error::from(err));
        eprintln!("Using default configuration");
        ModalConfig::default()
    });

    // Set up tracing subscriber BEFORE Dioxus to prevent dioxus-logger from setting its own.
    tracing_setup::init(&config.logging)?;

    log::info!("Starting modal-demo");

    // Fade timers sleep on Tokio
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let custom_head = format!("<style>{MODAL_STYLESHEET}\n{DEMO_STYLESHEET}</style>");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head),
        )
        .with_context(config.modal)
        .launch(app::DemoApp);

    Ok(())
}

/// Page styles for the demo host itself.
const DEMO_STYLESHEET: &str = r"
body { margin: 0; font-family: system-ui, sans-serif; }
.demo-page { padding: 24px; max-width: 720px; margin: 0 auto; }
.demo-toolbar { display: flex; gap: 12px; align-items: center; position: sticky; top: 0; background: #fff; padding: 12px 0; }
.demo-log { font-family: monospace; color: #57606a; }
";
