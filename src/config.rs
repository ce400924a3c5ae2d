use clap::Parser;
use tracing::warn;

#[derive(Clone, Debug, Parser)]
#[command(name = "capstone")]
pub struct Config {
    #[arg(
        long,
        env = "CAPSTONE_IMPROVER_URL",
        default_value = "http://localhost:7500/v1/generate"
    )]
    pub improver_url: String,

    #[arg(long, env = "CAPSTONE_IMPROVER_TOKEN")]
    pub improver_token: Option<String>,

    #[arg(long, env = "CAPSTONE_IMPROVER_TIMEOUT_SECS", default_value_t = 30)]
    pub improver_timeout_secs: u64,

    #[arg(long, env = "CAPSTONE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            improver_url: "http://localhost:7500/v1/generate".to_string(),
            improver_token: None,
            improver_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let config = <Self as Parser>::parse();
        config.validate();
        config
    }

    pub fn auth_enabled(&self) -> bool {
        self.improver_token
            .as_ref()
            .is_some_and(|value| !value.trim().is_empty())
    }

    pub fn log_startup_warnings(&self) {
        if !self.auth_enabled() {
            warn!("CAPSTONE_IMPROVER_TOKEN is unset, generation requests are sent unauthenticated");
        }
    }

    fn validate(&self) {
        assert_non_zero_u64("CAPSTONE_IMPROVER_TIMEOUT_SECS", self.improver_timeout_secs);
    }
}

fn assert_non_zero_u64(key: &'static str, value: u64) {
    assert!(value > 0, "{key} must be greater than 0");
}
