use core_config::{ConfigError, Environment, FromEnv, env_parse};
use database::common::RetryConfig;
use database::postgres::PostgresConfig;
use domain_greetings::GreetingPolicy;
use grpc_client::server::ServerConfig;

/// Application configuration
/// Composes the shared config components from the libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub database: PostgresConfig,
    pub retry: RetryConfig,
    pub server: ServerConfig,
    pub greeting_policy: GreetingPolicy,
    pub seed_greetings: bool,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            database: PostgresConfig::from_env()?, // Required - will fail if not set
            retry: RetryConfig::from_env()?,
            server: ServerConfig::from_env()?,
            greeting_policy: env_parse("GREETING_POLICY", "lookup")?,
            seed_greetings: env_parse("DB_SEED_GREETINGS", "true")?,
        })
    }
}
