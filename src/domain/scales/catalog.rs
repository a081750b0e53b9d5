//! ScaleCatalog - lookup table from scale id to definition.

use std::collections::HashMap;

use super::ScaleDefinition;
use crate::domain::foundation::{QuestionId, ScaleId, ValidationError};

/// All scales known to the application.
#[derive(Debug, Clone, Default)]
pub struct ScaleCatalog {
    scales: HashMap<ScaleId, ScaleDefinition>,
}

impl ScaleCatalog {
    /// Builds a catalog, rejecting duplicate scale ids.
    pub fn new(definitions: Vec<ScaleDefinition>) -> Result<Self, ValidationError> {
        let mut scales = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            let id = definition.id.clone();
            if scales.insert(id.clone(), definition).is_some() {
                return Err(ValidationError::invalid_format(
                    "scales",
                    format!("duplicate scale id '{}'", id),
                ));
            }
        }
        Ok(Self { scales })
    }

    pub fn get(&self, id: &ScaleId) -> Option<&ScaleDefinition> {
        self.scales.get(id)
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Finds which scale a question belongs to, if any.
    pub fn scale_of(&self, question: &QuestionId) -> Option<&ScaleId> {
        self.scales
            .values()
            .find(|scale| scale.question_ids().any(|q| q == question))
            .map(|scale| &scale.id)
    }
}
