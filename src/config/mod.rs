use crate::core::calculator::gaps;
use crate::core::calculator::travel::{self, TravelPolicy};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_urban_speed")]
    pub urban_speed_kmh: f64,
    #[serde(default = "default_buffer")]
    pub buffer_minutes: i64,
    #[serde(default = "default_travel")]
    pub default_travel_minutes: i64,
    #[serde(default = "default_rounding_step")]
    pub rounding_step_minutes: i64,
    #[serde(default = "default_ok_margin")]
    pub ok_margin_minutes: i64,
    #[serde(default = "default_max_scan_gap")]
    pub max_scan_gap_minutes: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_urban_speed() -> f64 {
    travel::URBAN_SPEED_KMH
}
fn default_buffer() -> i64 {
    travel::BUFFER_MINUTES
}
fn default_travel() -> i64 {
    travel::DEFAULT_TRAVEL_MINUTES
}
fn default_rounding_step() -> i64 {
    travel::ROUNDING_STEP_MINUTES
}
fn default_ok_margin() -> i64 {
    gaps::OK_MARGIN_MINUTES
}
fn default_max_scan_gap() -> i64 {
    travel::MAX_SCAN_GAP_MINUTES
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            urban_speed_kmh: default_urban_speed(),
            buffer_minutes: default_buffer(),
            default_travel_minutes: default_travel(),
            rounding_step_minutes: default_rounding_step(),
            ok_margin_minutes: default_ok_margin(),
            max_scan_gap_minutes: default_max_scan_gap(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rlessongap`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rlessongap")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rlessongap.conf")
    }

    /// Return the full path of the SQLite lesson book
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rlessongap.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.urban_speed_kmh.is_finite() || self.urban_speed_kmh <= 0.0 {
            return Err(AppError::Config(format!(
                "urban_speed_kmh must be a positive number (got {})",
                self.urban_speed_kmh
            )));
        }
        if self.buffer_minutes < 0 || self.default_travel_minutes < 0 {
            return Err(AppError::Config(
                "buffer_minutes and default_travel_minutes cannot be negative".into(),
            ));
        }
        // a negative cushion would call an unreachable transfer OK
        if self.ok_margin_minutes < 0 {
            return Err(AppError::Config(format!(
                "ok_margin_minutes cannot be negative (got {})",
                self.ok_margin_minutes
            )));
        }
        if self.max_scan_gap_minutes < 0 {
            return Err(AppError::Config(
                "max_scan_gap_minutes cannot be negative".into(),
            ));
        }
        Ok(())
    }

    /// Estimator and classifier constants taken from this configuration.
    pub fn policy(&self) -> TravelPolicy {
        TravelPolicy {
            urban_speed_kmh: self.urban_speed_kmh,
            buffer_minutes: self.buffer_minutes,
            default_travel_minutes: self.default_travel_minutes,
            rounding_step_minutes: self.rounding_step_minutes,
            ok_margin_minutes: self.ok_margin_minutes,
            max_scan_gap_minutes: self.max_scan_gap_minutes,
        }
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration directory, config file and database file.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            if let Some(parent) = db_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
