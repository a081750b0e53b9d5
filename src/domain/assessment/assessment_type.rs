//! AssessmentType enum selecting the quick or full questionnaire variant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Which questionnaire variant the user is taking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    #[default]
    Quick,
    Full,
}

impl AssessmentType {
    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentType::Quick => "quick",
            AssessmentType::Full => "full",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" => Ok(AssessmentType::Quick),
            "full" => Ok(AssessmentType::Full),
            other => Err(ValidationError::invalid_format(
                "assessment_type",
                format!("expected 'quick' or 'full', got '{}'", other),
            )),
        }
    }
}
