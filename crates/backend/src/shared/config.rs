use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON-файл с начальными записями каталога (clients/articles/products)
    pub seed_path: Option<String>,
    /// Заполнить каталог тестовыми данными, если seed-файла нет
    #[serde(default = "default_true")]
    pub seed_test_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            seed_test_data: true,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[catalog]
seed_path = "catalog.json"
seed_test_data = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolves a configured relative path against the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(path_str)
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn seed_path(&self) -> Option<PathBuf> {
        self.catalog.seed_path.as_deref().map(resolve_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.catalog.seed_path.as_deref(), Some("catalog.json"));
        assert!(config.catalog.seed_test_data);
    }

    #[test]
    fn test_catalog_section_is_optional() {
        let config = parse_config("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.catalog.seed_path.is_none());
        assert!(config.catalog.seed_test_data);
        assert!(config.seed_path().is_none());
    }

    #[test]
    fn test_absolute_path_kept() {
        let abs = if cfg!(windows) { "C:\\data\\catalog.json" } else { "/data/catalog.json" };
        assert_eq!(resolve_path(abs), PathBuf::from(abs));
    }
}
