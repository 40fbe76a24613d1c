use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_files_path: Option<String>,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: port.parse().map_err(|_| ConfigError::InvalidNumber {
                name: "PORT",
                value: port.clone(),
            })?,
            static_files_path: env::var("STATIC_FILES_PATH").ok(),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:8081".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        })
    }

    /// Origins must match a configured entry exactly, scheme and port included.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.cors_origins.iter().any(|allowed| allowed == origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure config tests run serially (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("STATIC_FILES_PATH");
        env::remove_var("CORS_ORIGINS");
    }

    #[test]
    fn test_config_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.static_files_path.is_none());
        assert_eq!(config.cors_origins, vec!["http://localhost:8081"]);
    }

    #[test]
    fn test_config_from_env() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        env::set_var("HOST", "0.0.0.0");
        env::set_var("PORT", "3000");
        env::set_var("STATIC_FILES_PATH", "./dist");
        env::set_var("CORS_ORIGINS", "http://a.test, http://b.test,");

        let config = Config::from_env().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_files_path, Some("./dist".to_string()));
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);

        // Clean up
        clear_env();
    }

    #[test]
    fn test_cors_origin_must_match_exactly() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = Config::from_env().unwrap();

        assert!(config.allows_origin("http://localhost:8081"));
        assert!(!config.allows_origin("http://localhost:8081.evil.example"));
        assert!(!config.allows_origin("http://localhost:80810"));
        assert!(!config.allows_origin("http://localhost"));
        assert!(!config.allows_origin(""));
    }

    #[test]
    fn test_config_invalid_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert_eq!(err.to_string(), "PORT must be a number, got 'not-a-port'");

        clear_env();
    }
}
