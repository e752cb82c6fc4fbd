use std::path::PathBuf;

pub const CATALOG_ENV: &str = "DATE_SELECTOR_CATALOG";

pub struct Config {
    pub catalog_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let catalog_path = std::env::var(CATALOG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("date-selector")
                    .join("presets.json")
            });

        Self { catalog_path }
    }

    pub fn with_catalog(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
        }
    }
}
