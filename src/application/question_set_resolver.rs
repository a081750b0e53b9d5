//! QuestionSetResolver - derives the valid question set from demographics.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::assessment::{AssessmentType, Demographics, ValidQuestionSet};
use crate::domain::foundation::ScaleId;
use crate::ports::{ScaleDefinitions, ScaleSelector};

/// Expands the selected scales into the set of acceptable question ids.
///
/// Pure: the same demographics always resolve to the same set. Scale ids the
/// catalog does not know are skipped.
#[derive(Clone)]
pub struct QuestionSetResolver {
    selector: Arc<dyn ScaleSelector>,
    definitions: Arc<dyn ScaleDefinitions>,
    assessment_type: AssessmentType,
}

impl QuestionSetResolver {
    pub fn new(
        selector: Arc<dyn ScaleSelector>,
        definitions: Arc<dyn ScaleDefinitions>,
        assessment_type: AssessmentType,
    ) -> Self {
        Self {
            selector,
            definitions,
            assessment_type,
        }
    }

    pub fn assessment_type(&self) -> AssessmentType {
        self.assessment_type
    }

    /// Ordered scale ids for the respondent, as the selector returns them.
    pub fn scale_ids(&self, demographics: &Demographics) -> Vec<ScaleId> {
        self.selector.select(demographics, self.assessment_type)
    }

    /// Scale ids as an unordered set, for change detection.
    pub fn scale_set(&self, demographics: &Demographics) -> BTreeSet<ScaleId> {
        self.scale_ids(demographics).into_iter().collect()
    }

    /// True when the two demographics select different scales, ignoring order.
    pub fn scales_changed(&self, old: &Demographics, new: &Demographics) -> bool {
        self.scale_set(old) != self.scale_set(new)
    }

    /// Valid question set for the given demographics.
    pub fn resolve(&self, demographics: &Demographics) -> ValidQuestionSet {
        self.resolve_scales(&self.scale_ids(demographics))
    }

    /// Union of the questions of the given scales.
    pub fn resolve_scales(&self, scale_ids: &[ScaleId]) -> ValidQuestionSet {
        let mut valid = ValidQuestionSet::new();
        for scale_id in scale_ids {
            match self.definitions.scale(scale_id) {
                Some(scale) => valid.extend(scale.question_ids().cloned()),
                None => tracing::debug!(scale_id = %scale_id, "Skipping unknown scale"),
            }
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;
    use crate::domain::scales::{QuestionDefinition, ScaleCatalog, ScaleDefinition};

    struct AgeSelector;

    impl ScaleSelector for AgeSelector {
        fn select(&self, demographics: &Demographics, assessment_type: AssessmentType) -> Vec<ScaleId> {
            let mut ids = match demographics.age.as_deref() {
                Some("0") => vec![ScaleId::from("A"), ScaleId::from("C")],
                Some("9") => vec![ScaleId::from("B"), ScaleId::from("A")],
                _ => vec![ScaleId::from("A"), ScaleId::from("B")],
            };
            if assessment_type == AssessmentType::Full {
                ids.push(ScaleId::from("GHOST"));
            }
            ids
        }
    }

    fn scale(id: &str, count: usize) -> ScaleDefinition {
        ScaleDefinition {
            id: ScaleId::from(id),
            name: id.to_string(),
            questions: (1..=count)
                .map(|n| QuestionDefinition {
                    id: QuestionId::from(format!("{}{}", id, n).as_str()),
                    text: None,
                })
                .collect(),
        }
    }

    fn resolver(assessment_type: AssessmentType) -> QuestionSetResolver {
        let catalog =
            ScaleCatalog::new(vec![scale("A", 5), scale("B", 3), scale("C", 2)]).unwrap();
        QuestionSetResolver::new(Arc::new(AgeSelector), Arc::new(catalog), assessment_type)
    }

    #[test]
    fn resolves_union_of_selected_scales() {
        let valid = resolver(AssessmentType::Quick).resolve(&Demographics::with_age("2"));

        assert_eq!(valid.len(), 8);
        assert!(valid.contains(&QuestionId::from("A5")));
        assert!(valid.contains(&QuestionId::from("B3")));
        assert!(!valid.contains(&QuestionId::from("C1")));
    }

    #[test]
    fn unknown_scales_are_skipped() {
        let valid = resolver(AssessmentType::Full).resolve(&Demographics::with_age("2"));
        assert_eq!(valid.len(), 8);
    }

    #[test]
    fn scale_order_does_not_count_as_change() {
        let resolver = resolver(AssessmentType::Quick);
        assert!(!resolver.scales_changed(&Demographics::with_age("2"), &Demographics::with_age("9")));
        assert!(resolver.scales_changed(&Demographics::with_age("2"), &Demographics::with_age("0")));
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = resolver(AssessmentType::Quick);
        let demo = Demographics::with_age("0");
        assert_eq!(resolver.resolve(&demo), resolver.resolve(&demo));
    }
}
