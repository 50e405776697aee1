use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::model::structs::educations::Educations;
use crate::model::structs::projects::Projects;
use crate::model::structs::skills::Skills;
use crate::model::structs::user_introductions::UserIntroductions;
use crate::model::structs::users::Users;
use crate::model::structs::workexperiences::Workexperiences;
use crate::model::traits::entity::Entity;

const IDENTIFIER_REGEX: &str = r"^[a-z_][a-z0-9_]{0,30}$";
const PREFIX_REGEX: &str = r"^[A-Za-z0-9_.:\-]{0,64}$";

impl Configuration {
    pub const DEFAULT_PATH: &'static str = "config.toml";
    pub const PATH_ENV: &'static str = "WEAVING_NET_CONFIG";
    /// Longest accepted cache ttl in seconds. Memcache reads anything larger
    /// as a unix timestamp.
    pub const MAX_TTL_SECONDS: u64 = 30 * 24 * 60 * 60;

    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            database: DatabaseConfig {
                engine: DatabaseDrivers::sqlite3,
                path: String::from("sqlite://data.db?mode=rwc"),
                max_connections: DatabaseConfig::default_max_connections(),
            },
            cache: CacheConfig {
                enabled: true,
                ..CacheConfig::default()
            },
            sentry: SentryConfig::default(),
        }
    }

    /// Tables an `entity_ttl` override may name.
    pub fn tables() -> [&'static str; 6] {
        [
            Users::TABLE,
            Educations::TABLE,
            Projects::TABLE,
            Skills::TABLE,
            Workexperiences::TABLE,
            UserIntroductions::TABLE,
        ]
    }

    pub fn path() -> String {
        std::env::var(Self::PATH_ENV)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PATH.to_string())
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => file.write_all(data.as_ref()).map_err(ConfigurationError::IOError),
            Err(e) => Err(ConfigurationError::IOError(e)),
        }
    }

    pub fn save_from_config(&self, path: &str) -> Result<(), ConfigurationError> {
        let data = toml::to_string(self).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, data)
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        let path = Self::path();
        let config = match Configuration::load_file(&path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt at {}.", path);
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::init().save_from_config(&path) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config
            .validate()
            .map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log_level \"{}\"", self.log_level)));
        }
        if !self.database.engine.accepts_url(&self.database.path) {
            return Err(ConfigurationError::ValidationError(format!(
                "database path \"{}\" does not match engine {}",
                self.database.path, self.database.engine
            )));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigurationError::ValidationError("database max_connections must be at least 1".to_string()));
        }
        Self::validate_cache(&self.cache)
    }

    fn validate_cache(cache: &CacheConfig) -> Result<(), ConfigurationError> {
        Self::validate_value("[CACHE] prefix", &cache.prefix, PREFIX_REGEX)?;
        if !cache.enabled {
            return Ok(());
        }
        if cache.engine.is_remote() && cache.address.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(format!("cache address is required for {}", cache.engine)));
        }
        Self::validate_ttl("ttl", cache.ttl)?;
        Self::validate_ttl("not_found_ttl", cache.not_found_ttl)?;
        for (table, ttl) in &cache.entity_ttl {
            Self::validate_value("[CACHE] entity_ttl table", table, IDENTIFIER_REGEX)?;
            if !Self::tables().contains(&table.as_str()) {
                return Err(ConfigurationError::ValidationError(format!("entity_ttl names unknown table \"{}\"", table)));
            }
            Self::validate_ttl(&format!("entity_ttl for \"{}\"", table), *ttl)?;
        }
        Ok(())
    }

    fn validate_ttl(name: &str, seconds: u64) -> Result<(), ConfigurationError> {
        if seconds == 0 || seconds > Self::MAX_TTL_SECONDS {
            return Err(ConfigurationError::ValidationError(format!(
                "cache {} must be between 1 and {} seconds, got {}",
                name,
                Self::MAX_TTL_SECONDS,
                seconds
            )));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("invalid pattern for {}: {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }
}
