use crate::core::wages::WageTable;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_role")]
    pub default_role: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default)]
    pub wages: WageTable,
}

fn default_role() -> String {
    Role::Server.code().to_string()
}
fn default_currency_symbol() -> String {
    "$".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_role: default_role(),
            currency_symbol: default_currency_symbol(),
            separator_char: default_separator_char(),
            wages: WageTable::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.tiplog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tiplog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tiplog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("tiplog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        let bad = self.wages.invalid_roles();
        if !bad.is_empty() {
            let names: Vec<&str> = bad.iter().map(|r| r.code()).collect();
            return Err(AppError::Config(format!(
                "wage rate must be a positive number for: {}",
                names.join(", ")
            )));
        }

        if Role::from_code(&self.default_role).is_none() {
            return Err(AppError::Config(format!(
                "unknown default_role '{}'",
                self.default_role
            )));
        }

        Ok(())
    }

    /// Role used when `add` is called without `--role`.
    pub fn default_role(&self) -> Role {
        Role::from_code(&self.default_role).unwrap_or(Role::Server)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Resolve the database path for `init`: relative names land in the
    /// config directory.
    pub fn resolve_db_path(custom_name: Option<&str>) -> PathBuf {
        let dir = Self::config_dir();
        match custom_name {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("tiplog.sqlite"),
        }
    }

    /// Point the config file at `db_path`. Settings already in an existing
    /// file (wages, currency, default role) are kept.
    pub fn write_for_database(path: &Path, db_path: &Path) -> AppResult<()> {
        let mut config = Self::load_from(path)?;
        config.database = db_path.to_string_lossy().to_string();

        let yaml = config.to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let db_path = Self::resolve_db_path(custom_name);

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            Self::write_for_database(&Self::config_file(), &db_path)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("cannot create {}: {e}", db_path.display()),
                ))
            })?;
        }

        Ok(db_path)
    }
}
