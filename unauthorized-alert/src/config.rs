use std::env;


pub const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingVar(&'static str),
}

/// Settings read once at startup, before the runtime accepts any event.
#[derive(Debug, Clone)]
pub struct Config {
    pub topic_arn: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let topic_arn = lookup(TOPIC_ARN_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingVar(TOPIC_ARN_VAR))?;

        Ok(Config { topic_arn })
    }
}
