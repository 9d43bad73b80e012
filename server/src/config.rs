use anyhow::Result;
use platform_db::DatabaseSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            database: DatabaseSettings::from_env(),
        })
    }
}
