//! Dev tracing setup.
//!
//! Installs a compact fmt subscriber only when SCORING_DEV_LOG=1 is set in a
//! dev environment (debug build, or APP_ENV one of local/development/dev).
//! No-op everywhere else, so library users keep their own subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_DEV_LOG: &str = "SCORING_DEV_LOG";
pub const ENV_APP_ENV: &str = "APP_ENV";

const DEFAULT_DEV_FILTER: &str = "values_alignment=debug,ranking=debug,warn";

/// Returns whether a subscriber was installed by this call; safe to call twice.
pub fn init_dev_tracing() -> bool {
    let flag = std::env::var(ENV_DEV_LOG).ok();
    let app_env = std::env::var(ENV_APP_ENV).unwrap_or_default();
    if !dev_gate(flag.as_deref(), &app_env, cfg!(debug_assertions)) {
        return false;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DEV_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init()
        .is_ok()
}

fn dev_gate(flag: Option<&str>, app_env: &str, debug_build: bool) -> bool {
    if flag.map(str::trim) != Some("1") {
        return false;
    }
    debug_build
        || matches!(
            app_env.to_ascii_lowercase().as_str(),
            "local" | "development" | "dev"
        )
}
