//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `INTERCALL_USERNAME`: API user name (required)
//! - `INTERCALL_PASSWORD`: API password (required)
//! - `INTERCALL_ACCOUNT_NUMBER`: Account number (required)
//! - `INTERCALL_ENDPOINT`: SOAP endpoint URL (required)
//! - `INTERCALL_DOCUMENT`: WSDL document URL or path
//! - `INTERCALL_DEFAULT_OWNER`: Owner used for dial-in lookups
//! - `INTERCALL_TIMEOUT_SECS`: HTTP timeout in seconds
//! - `INTERCALL_USER_AGENT`: User agent sent with every request
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./intercall.{json,toml}` then `./config.{json,toml}` (current working
//!    directory)
//! 2. The same names in the parent and grandparent directories
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};

use intercall_domain::{Credentials, IntercallConfig, IntercallError, Result, DEFAULT_TIMEOUT_SECS};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["intercall.json", "intercall.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `IntercallError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load() -> Result<IntercallConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `IntercallError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<IntercallConfig> {
    let credentials = Credentials::new(
        env_var("INTERCALL_USERNAME")?,
        env_var("INTERCALL_PASSWORD")?,
        env_var("INTERCALL_ACCOUNT_NUMBER")?,
    );
    let endpoint = env_var("INTERCALL_ENDPOINT")?;

    let timeout_secs = match env_optional("INTERCALL_TIMEOUT_SECS") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| IntercallError::Config(format!("Invalid timeout: {}", e)))?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    let config = IntercallConfig {
        credentials,
        endpoint,
        document: env_optional("INTERCALL_DOCUMENT"),
        default_owner_number: env_optional("INTERCALL_DEFAULT_OWNER"),
        timeout_secs,
        user_agent: env_optional("INTERCALL_USER_AGENT"),
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `IntercallError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<IntercallConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(IntercallError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            IntercallError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| IntercallError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<IntercallConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| IntercallError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| IntercallError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(IntercallError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `IntercallError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        IntercallError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Optional environment variable; blank values count as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ENV_KEYS: [&str; 8] = [
        "INTERCALL_USERNAME",
        "INTERCALL_PASSWORD",
        "INTERCALL_ACCOUNT_NUMBER",
        "INTERCALL_ENDPOINT",
        "INTERCALL_DOCUMENT",
        "INTERCALL_DEFAULT_OWNER",
        "INTERCALL_TIMEOUT_SECS",
        "INTERCALL_USER_AGENT",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    fn set_required_env() {
        std::env::set_var("INTERCALL_USERNAME", "synapse");
        std::env::set_var("INTERCALL_PASSWORD", "secret");
        std::env::set_var("INTERCALL_ACCOUNT_NUMBER", "889797");
        std::env::set_var("INTERCALL_ENDPOINT", "https://soap.intercall.example/ownerAPI");
    }

    fn write_temp(contents: &str, extension: &str) -> PathBuf {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        path
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::set_var("INTERCALL_DOCUMENT", "https://soap.intercall.example/ownerAPI?wsdl");
        std::env::set_var("INTERCALL_DEFAULT_OWNER", "7891575");
        std::env::set_var("INTERCALL_TIMEOUT_SECS", "12");
        std::env::set_var("INTERCALL_USER_AGENT", "provisioning-bot/2.0");

        let result = load_from_env();
        assert!(result.is_ok(), "Should load config from env vars, error: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.credentials.username, "synapse");
        assert_eq!(config.credentials.account_number, "889797");
        assert_eq!(config.endpoint, "https://soap.intercall.example/ownerAPI");
        assert_eq!(config.default_owner_number.as_deref(), Some("7891575"));
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.user_agent.as_deref(), Some("provisioning-bot/2.0"));

        clear_env();
    }

    #[test]
    fn test_load_from_env_defaults_optional_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::set_var("INTERCALL_DEFAULT_OWNER", "  ");

        let config = load_from_env().unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.document.is_none());
        assert!(config.default_owner_number.is_none());

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::remove_var("INTERCALL_PASSWORD");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, IntercallError::Config(ref msg) if msg.contains("INTERCALL_PASSWORD")));

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::set_var("INTERCALL_TIMEOUT_SECS", "soon");
        assert!(matches!(load_from_env(), Err(IntercallError::Config(_))));

        std::env::remove_var("INTERCALL_TIMEOUT_SECS");
        std::env::set_var("INTERCALL_ENDPOINT", "ftp://soap.intercall.example");
        assert!(matches!(load_from_env(), Err(IntercallError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let path = write_temp(
            r#"{
                "credentials": {
                    "username": "synapse",
                    "password": "secret",
                    "account_number": "889797"
                },
                "endpoint": "https://soap.intercall.example/ownerAPI",
                "document": "config/ownerAPI.wsdl"
            }"#,
            "json",
        );

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.credentials.password, "secret");
        assert_eq!(config.document.as_deref(), Some("config/ownerAPI.wsdl"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let path = write_temp(
            r#"
endpoint = "https://soap.intercall.example/ownerAPI"
default_owner_number = "7891575"
timeout_secs = 45

[credentials]
username = "synapse"
password = "secret"
account_number = "889797"
"#,
            "toml",
        );

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.default_owner_number.as_deref(), Some("7891575"));
        assert_eq!(config.timeout_secs, 45);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_rejects_invalid_config() {
        let path = write_temp(
            r#"{
                "credentials": {"username": "synapse", "password": "", "account_number": "889797"},
                "endpoint": "https://soap.intercall.example/ownerAPI"
            }"#,
            "json",
        );

        let err = load_from_file(Some(path.clone())).unwrap_err();
        assert!(matches!(err, IntercallError::Config(ref msg) if msg.contains("password")));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/intercall.json")));
        assert!(matches!(result, Err(IntercallError::Config(_))));
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let path = write_temp(r#"{ "this is": "not valid json" "#, "json");

        let result = load_from_file(Some(path.clone()));
        assert!(matches!(result, Err(IntercallError::Config(ref msg)) if msg.contains("JSON")));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("endpoint: x", &PathBuf::from("intercall.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
