use std::{env, path::PathBuf};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".mise";
const HOME_ENV: &str = "MISE_HOME";
const DEFAULT_DIRECTIVE: &str = "mise=info";

/// Installs the global `fmt` subscriber. `RUST_LOG` replaces the default
/// `mise=info` filter when set.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    // Another subscriber may already be installed by the host.
    let _ = fmt().with_env_filter(filter).try_init();
}

/// Returns the application data directory, defaulting to `~/.mise`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
