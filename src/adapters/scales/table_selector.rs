//! Table-driven ScaleSelector.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::assessment::{AssessmentType, Demographics};
use crate::domain::foundation::ScaleId;
use crate::ports::ScaleSelector;

/// Scale lists for each assessment variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScaleSets {
    #[serde(default)]
    pub quick: Vec<ScaleId>,

    #[serde(default)]
    pub full: Vec<ScaleId>,
}

impl ScaleSets {
    pub fn for_type(&self, assessment_type: AssessmentType) -> &[ScaleId] {
        match assessment_type {
            AssessmentType::Quick => &self.quick,
            AssessmentType::Full => &self.full,
        }
    }
}

/// Applies when every `when` attribute equals the respondent's value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectionRule {
    #[serde(default)]
    pub when: BTreeMap<String, String>,

    #[serde(flatten)]
    pub scales: ScaleSets,
}

impl SelectionRule {
    pub fn matches(&self, demographics: &Demographics) -> bool {
        self.when
            .iter()
            .all(|(key, expected)| demographics.attribute(key).as_deref() == Some(expected.as_str()))
    }
}

/// First matching rule wins; `default` applies otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableScaleSelector {
    #[serde(default)]
    pub rules: Vec<SelectionRule>,

    #[serde(default)]
    pub default: ScaleSets,
}

impl TableScaleSelector {
    pub fn new(rules: Vec<SelectionRule>, default: ScaleSets) -> Self {
        Self { rules, default }
    }

    /// Every scale id mentioned anywhere in the table.
    pub fn referenced_scales(&self) -> impl Iterator<Item = &ScaleId> {
        self.rules
            .iter()
            .map(|r| &r.scales)
            .chain(std::iter::once(&self.default))
            .flat_map(|sets| sets.quick.iter().chain(sets.full.iter()))
    }
}

impl ScaleSelector for TableScaleSelector {
    fn select(&self, demographics: &Demographics, assessment_type: AssessmentType) -> Vec<ScaleId> {
        let sets = self
            .rules
            .iter()
            .find(|rule| rule.matches(demographics))
            .map(|rule| &rule.scales)
            .unwrap_or(&self.default);
        sets.for_type(assessment_type).to_vec()
    }
}
