use std::fmt;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::sqlite3 => write!(f, "sqlite3"),
            DatabaseDrivers::mysql => write!(f, "mysql"),
            DatabaseDrivers::pgsql => write!(f, "pgsql"),
        }
    }
}

impl DatabaseDrivers {
    /// URL schemes sqlx routes to this driver.
    pub fn url_schemes(&self) -> &'static [&'static str] {
        match self {
            DatabaseDrivers::sqlite3 => &["sqlite:"],
            DatabaseDrivers::mysql => &["mysql:", "mariadb:"],
            DatabaseDrivers::pgsql => &["postgres:", "postgresql:"],
        }
    }

    pub fn accepts_url(&self, url: &str) -> bool {
        self.url_schemes().iter().any(|scheme| url.starts_with(scheme))
    }
}
