//! Response value object - a single committed answer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, Timestamp};

/// One answer to one question.
///
/// Responses are never edited in place; a session replaces its response
/// sequence wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    question_id: QuestionId,
    value: i32,
    timestamp: Timestamp,
}

impl Response {
    /// Creates a response stamped with the current time.
    pub fn new(question_id: QuestionId, value: i32) -> Self {
        Self::at(question_id, value, Timestamp::now())
    }

    /// Creates a response with an explicit timestamp.
    pub fn at(question_id: QuestionId, value: i32, timestamp: Timestamp) -> Self {
        Self {
            question_id,
            value,
            timestamp,
        }
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields_and_text_timestamp() {
        let ts = Timestamp::parse("2024-03-01T08:00:00Z").unwrap();
        let response = Response::at(QuestionId::from("SRI_A_01"), 4, ts);

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["questionId"], "SRI_A_01");
        assert_eq!(json["value"], 4);
        assert!(json["timestamp"].as_str().unwrap().starts_with("2024-03-01T08:00:00"));
    }

    #[test]
    fn deserializes_stored_shape() {
        let response: Response = serde_json::from_str(
            r#"{"questionId":"q7","value":2,"timestamp":"2024-03-01T08:00:00.000Z"}"#,
        )
        .unwrap();

        assert_eq!(response.question_id().as_str(), "q7");
        assert_eq!(response.value(), 2);
    }
}
