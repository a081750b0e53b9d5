//! YAML scale configuration file.
//!
//! ```yaml
//! scales:
//!   - id: CORE
//!     name: Core inventory
//!     questions:
//!       - id: CORE_01
//!         text: "..."
//! selection:
//!   rules:
//!     - when: { age: "0" }
//!       quick: [CORE, YOUTH]
//!       full: [CORE, YOUTH, YOUTH_EXT]
//!   default:
//!     quick: [CORE, ADULT]
//!     full: [CORE, ADULT, ADULT_EXT]
//! ```

use serde::Deserialize;
use std::path::Path;

use super::TableScaleSelector;
use crate::domain::foundation::ValidationError;
use crate::domain::scales::{ScaleCatalog, ScaleDefinition};

/// Errors that can occur while loading the scale file
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read scale file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scale file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid scale file: {0}")]
    Invalid(#[from] ValidationError),
}

/// Parsed contents of the scale file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleConfigFile {
    #[serde(default)]
    pub scales: Vec<ScaleDefinition>,

    #[serde(default)]
    pub selection: TableScaleSelector,
}

impl ScaleConfigFile {
    /// Read and parse a scale file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Split into the catalog and selector the resolver consumes.
    ///
    /// Selection rules may name scales the catalog lacks; those are logged
    /// here and skipped during resolution.
    pub fn into_parts(self) -> Result<(ScaleCatalog, TableScaleSelector), CatalogError> {
        let catalog = ScaleCatalog::new(self.scales)?;

        for scale_id in self.selection.referenced_scales() {
            if catalog.get(scale_id).is_none() {
                tracing::warn!(scale_id = %scale_id, "Selection rule references unknown scale");
            }
        }

        Ok((catalog, self.selection))
    }
}
