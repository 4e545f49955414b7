//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sample-board.db".to_string()
}

fn default_templates_dir() -> String {
    "templates/**/*.html".to_string()
}

fn default_page_unit() -> usize {
    10
}

fn default_page_size() -> usize {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Records shown per list page.
    #[serde(default = "default_page_unit")]
    pub page_unit: usize,
    /// Page links shown per pagination block.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            database_url: default_database_url(),
            templates_dir: default_templates_dir(),
            page_unit: default_page_unit(),
            page_size: default_page_size(),
        }
    }
}
