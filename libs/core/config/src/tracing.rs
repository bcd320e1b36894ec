use crate::Environment;
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install color-eyre hooks for the binary's error reports.
///
/// Call first thing in `main`. Repeated calls are no-ops.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info"
    } else {
        "debug,tower_http=debug"
    }
}

/// Install the global subscriber.
///
/// Production emits flattened JSON lines; development pretty-prints.
/// `ErrorLayer` is always registered so eyre reports carry span traces.
/// A second call leaves the first subscriber in place.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let output = if environment.is_production() {
        fmt::layer()
            .json()
            .with_target(false)
            .flatten_event(true)
            .boxed()
    } else {
        fmt::layer()
            .pretty()
            .with_file(false)
            .with_line_number(false)
            .boxed()
    };

    let installed = tracing_subscriber::registry()
        .with(output)
        .with(ErrorLayer::default())
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        info!(?environment, "Tracing initialized");
    } else {
        debug!("Tracing subscriber already set");
    }
}
