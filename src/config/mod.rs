use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub users_database: String,
    pub records_database: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_session_key_file")]
    pub session_key_file: String,
    #[serde(default)]
    pub cookie_secure: bool,
    #[serde(default)]
    pub enforce_delete_ownership: bool,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_session_key_file() -> String {
    Config::config_dir()
        .join("session.key")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            users_database: Self::users_database_file().to_string_lossy().to_string(),
            records_database: Self::records_database_file().to_string_lossy().to_string(),
            bind_address: default_bind_address(),
            port: default_port(),
            session_key_file: default_session_key_file(),
            cookie_secure: false,
            enforce_delete_ownership: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("worklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Return the full path of the credentials database
    pub fn users_database_file() -> PathBuf {
        Self::config_dir().join("users.sqlite")
    }

    /// Return the full path of the work-records database
    pub fn records_database_file() -> PathBuf {
        Self::config_dir().join("records.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    /// Initialize configuration file and directory.
    /// `is_test` skips the config file write so test runs never touch the
    /// user's real configuration.
    pub fn init_all(
        users_db: Option<&str>,
        records_db: Option<&str>,
        is_test: bool,
    ) -> io::Result<Self> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let mut config = Self::default();
        if let Some(p) = users_db {
            config.users_database = p.to_string();
        }
        if let Some(p) = records_db {
            config.records_database = p.to_string();
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }
}
