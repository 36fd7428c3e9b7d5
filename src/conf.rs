use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    pub session_ttl_days: u32,
    // empty token leaves the admin subtree disabled
    pub admin_token: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "jobwishers")?
            .set_default("listen_port", "8000")?
            .set_default("database_url", "postgres://localhost/jobwishers")?
            .set_default("database_pool_max_connections", "5")?
            .set_default("session_ttl_days", "14")?
            .set_default("admin_token", "")?
            .add_source(Environment::default())
            .build()?;
        let s: Settings = conf.try_deserialize()?;
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
