use crate::domain::{Preset, PresetCatalog};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    presets: Vec<Preset>,
}

/// JSON file holding a host-configured preset catalog.
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the catalog, or the standard one if the file does not exist.
    pub fn load_or_standard(&self) -> Result<PresetCatalog> {
        if !self.exists() {
            log::debug!(
                "no catalog at {}, using standard presets",
                self.path.display()
            );
            return Ok(PresetCatalog::standard());
        }
        self.load()
    }

    pub fn load(&self) -> Result<PresetCatalog> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading preset catalog {}", self.path.display()))?;
        let document: CatalogDocument = serde_json::from_str(&content)
            .with_context(|| format!("parsing preset catalog {}", self.path.display()))?;

        let catalog = PresetCatalog::from_presets(document.presets)
            .with_context(|| format!("invalid preset catalog {}", self.path.display()))?;
        log::debug!(
            "loaded {} presets from {}",
            catalog.len(),
            self.path.display()
        );
        Ok(catalog)
    }

    pub fn save(&self, catalog: &PresetCatalog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let document = CatalogDocument {
            presets: catalog.iter().cloned().collect(),
        };
        let content = serde_json::to_string_pretty(&document)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing preset catalog {}", self.path.display()))?;
        Ok(())
    }

    pub fn write_standard(&self) -> Result<()> {
        self.save(&PresetCatalog::standard())
    }
}
