//! Scale Adapters
//!
//! - **ScaleConfigFile** - YAML file holding scale definitions and selection rules
//! - **TableScaleSelector** - Ordered demographic rules mapping to scale lists
//!
//! `ScaleCatalog` implements the `ScaleDefinitions` port here.

mod config_file;
mod table_selector;

pub use config_file::{CatalogError, ScaleConfigFile};
pub use table_selector::{ScaleSets, SelectionRule, TableScaleSelector};

use crate::domain::foundation::ScaleId;
use crate::domain::scales::{ScaleCatalog, ScaleDefinition};
use crate::ports::ScaleDefinitions;

impl ScaleDefinitions for ScaleCatalog {
    fn scale(&self, id: &ScaleId) -> Option<&ScaleDefinition> {
        self.get(id)
    }
}
