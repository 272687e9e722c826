use anyhow::{Context, Result, anyhow};

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub run_migrations: bool,
    pub port: u16,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `init` passes the process
    /// environment.
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).with_context(|| format!("Missing environment variable: {key}"))
        };

        let user = required("DB_USER")?;
        let password = required("DB_PASSWORD")?;
        let host = required("DB_HOST")?;
        let db_port = required("DB_PORT")?
            .parse::<u16>()
            .context("DB_PORT must be a valid u16 integer")?;
        let name = required("DB_NAME")?;

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = match lookup("PORT") {
            Some(port_str) => port_str
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database: DatabaseConfig {
                user,
                password,
                host,
                port: db_port,
                name,
            },
            run_migrations,
            port,
        })
    }

    pub fn database_url(&self) -> String {
        let DatabaseConfig {
            user,
            password,
            host,
            port,
            name,
        } = &self.database;

        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}
