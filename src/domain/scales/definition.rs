//! Scale and question definitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, ScaleId};

/// A single questionnaire item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: QuestionId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A psychometric instrument and its questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleDefinition {
    pub id: ScaleId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub questions: Vec<QuestionDefinition>,
}

impl ScaleDefinition {
    /// Iterates the ids of this scale's questions in order.
    pub fn question_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.questions.iter().map(|q| &q.id)
    }
}
