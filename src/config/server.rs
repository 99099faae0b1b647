use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::validate_staff_name;

/// Database file name inside the data directory.
pub const DB_FILE: &str = "kpi.db";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// Staff inserted on first start, only while the staff table is empty.
    pub seed_staff: Vec<String>,
}

impl ServerConfig {
    /// Reads a TOML file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&raw).map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects seed names that could never be stored.
    pub fn validate(&self) -> Result<()> {
        for name in &self.seed_staff {
            validate_staff_name(name)?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid bind address: {e}")))
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            data_dir: PathBuf::from("./data"),
            seed_staff: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kpi.toml");
        std::fs::write(&path, "port = 9090\nseed_staff = [\"Harry\", \"Isis\"]\n").unwrap();

        let config = ServerConfig::load(&path).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.seed_staff, ["Harry", "Isis"]);
        assert_eq!(config.db_path(), PathBuf::from("./data/kpi.db"));
        assert_eq!(config.socket_addr().unwrap().port(), 9090);
    }

    #[test]
    fn test_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kpi.toml");
        std::fs::write(&path, "port = \"eighty\"\n").unwrap();

        assert!(matches!(ServerConfig::load(&path), Err(Error::Config(_))));
        assert!(matches!(
            ServerConfig::load(temp.path().join("missing.toml")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_blank_seed_name_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kpi.toml");
        std::fs::write(&path, "seed_staff = [\"Harry\", \"   \"]\n").unwrap();

        assert!(matches!(ServerConfig::load(&path), Err(Error::Validation(_))));

        let config = ServerConfig {
            seed_staff: vec!["Tab\tName".to_string()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_bad_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(config.socket_addr().is_err());
    }
}
