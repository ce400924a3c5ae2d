pub mod attachment;
pub mod catalog;
pub mod config;
pub mod editors;
pub mod error;
pub mod improver;
pub mod notify;
pub mod search;
pub mod session;
pub mod submission;
pub mod wizard;

pub use config::Config;
pub use error::{AppError, AppResult};

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init();
}
