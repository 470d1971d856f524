//! Process configuration.
//!
//! Values come from command-line flags, then `ROSTER_*` environment variables
//! (a `.env` file is loaded by the binary before parsing), then defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

/// roster - student records and sticky notes over HTTP
#[derive(Debug, Clone, Parser)]
#[command(name = "roster")]
#[command(about = "Student record and sticky note backend")]
#[command(version)]
pub struct Config {
    /// Address to bind to
    #[arg(long, env = "ROSTER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "ROSTER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Database file path (default: {data_dir}/roster/roster.db)
    #[arg(long, env = "ROSTER_DB_PATH", value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Report store failures on list endpoints instead of serving canned data
    #[arg(long)]
    pub no_fallback: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long)]
    pub debug: bool,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn fallback_enabled(&self) -> bool {
        !self.no_fallback
    }

    /// The configured database path, or the platform default.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => default_database_path(),
        }
    }
}

/// Gets the cross-platform database path.
///
/// Returns the path as `{data_dir}/roster/roster.db` where `data_dir` is:
/// - Linux: `~/.local/share`
/// - macOS: `~/Library/Application Support`
/// - Windows: `C:\Users\<user>\AppData\Roaming`
pub fn default_database_path() -> Result<PathBuf> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine data directory"))?;

    Ok(data_dir.join("roster").join("roster.db"))
}

/// Ensures the parent directory of the database file exists.
///
/// Creates the directory structure if it doesn't exist using `create_dir_all`.
pub fn ensure_database_directory(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create database directory: {}", parent.display())
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    const ENV_KEYS: [&str; 3] = ["ROSTER_HOST", "ROSTER_PORT", "ROSTER_DB_PATH"];

    fn clear_env() {
        for key in ENV_KEYS {
            // SAFETY: tests touching the environment are serialized.
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_bind_all_interfaces_on_8000() {
        clear_env();
        let config = Config::try_parse_from(["roster"]).unwrap();

        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        assert!(config.fallback_enabled());
        assert!(!config.debug);
        assert_eq!(config.db_path, None);
    }

    #[test]
    #[serial]
    fn environment_overrides_defaults() {
        clear_env();
        // SAFETY: tests touching the environment are serialized.
        unsafe {
            std::env::set_var("ROSTER_PORT", "9100");
            std::env::set_var("ROSTER_DB_PATH", "/tmp/roster-env.db");
        }

        let config = Config::try_parse_from(["roster"]).unwrap();
        clear_env();

        assert_eq!(config.port, 9100);
        assert_eq!(
            config.database_path().unwrap(),
            PathBuf::from("/tmp/roster-env.db")
        );
    }

    #[test]
    #[serial]
    fn flags_override_environment() {
        clear_env();
        // SAFETY: tests touching the environment are serialized.
        unsafe { std::env::set_var("ROSTER_PORT", "9100") };

        let config =
            Config::try_parse_from(["roster", "--port", "9200", "--no-fallback"]).unwrap();
        clear_env();

        assert_eq!(config.port, 9200);
        assert!(!config.fallback_enabled());
    }

    #[test]
    fn default_database_path_is_under_roster_dir() {
        let path = default_database_path().unwrap();
        assert!(path.to_string_lossy().contains("roster"));
        assert!(path.ends_with("roster.db"));
    }

    #[test]
    fn ensure_database_directory_creates_parents() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("a").join("b").join("roster.db");

        ensure_database_directory(&db_path).unwrap();

        assert!(db_path.parent().unwrap().is_dir());
    }
}
