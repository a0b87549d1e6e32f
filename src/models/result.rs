use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The five stages every backend answer carries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultField {
    Plan,
    Research,
    Analysis,
    Critique,
    Final,
}

impl ResultField {
    pub const ALL: [ResultField; 5] = [
        ResultField::Plan,
        ResultField::Research,
        ResultField::Analysis,
        ResultField::Critique,
        ResultField::Final,
    ];

    /// JSON key used by the backend
    pub fn key(self) -> &'static str {
        match self {
            ResultField::Plan => "plan",
            ResultField::Research => "research",
            ResultField::Analysis => "analysis",
            ResultField::Critique => "critique",
            ResultField::Final => "final",
        }
    }

    /// Section heading shown above the field
    pub fn title(self) -> &'static str {
        match self {
            ResultField::Plan => "Plan (Planner)",
            ResultField::Research => "Research (Researcher)",
            ResultField::Analysis => "Analysis (Analyst)",
            ResultField::Critique => "Critique (Critic)",
            ResultField::Final => "Final Synthesis (Synthesizer)",
        }
    }

    /// Zero-based position used to stagger the reveal
    pub fn index(self) -> usize {
        match self {
            ResultField::Plan => 0,
            ResultField::Research => 1,
            ResultField::Analysis => 2,
            ResultField::Critique => 3,
            ResultField::Final => 4,
        }
    }
}

impl fmt::Display for ResultField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Structured answer returned by `POST /ask`.
///
/// Unknown backend fields are kept in `extra` so nothing the service sends is lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub plan: String,
    pub research: String,
    pub analysis: String,
    pub critique: String,
    #[serde(rename = "final")]
    pub final_answer: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl QueryResult {
    pub fn field(&self, field: ResultField) -> &str {
        match field {
            ResultField::Plan => &self.plan,
            ResultField::Research => &self.research,
            ResultField::Analysis => &self.analysis,
            ResultField::Critique => &self.critique,
            ResultField::Final => &self.final_answer,
        }
    }

    /// First required field absent from a raw payload, if any
    pub fn missing_field(payload: &Value) -> Option<ResultField> {
        let object = payload.as_object();
        ResultField::ALL
            .into_iter()
            .find(|field| object.is_none_or(|map| !map.contains_key(field.key())))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_keeps_extra_fields() {
        let payload = json!({
            "plan": "p",
            "research": "r",
            "analysis": "a",
            "critique": "c",
            "final": "f",
            "model": "gpt",
            "tokens": 42
        });

        let result: QueryResult = serde_json::from_value(payload).unwrap();
        assert_eq!(result.final_answer, "f");
        assert_eq!(result.field(ResultField::Plan), "p");
        assert_eq!(result.extra.len(), 2);
        assert_eq!(result.extra["tokens"], json!(42));
    }

    #[test]
    fn test_serialize_uses_final_key() {
        let result = QueryResult {
            plan: String::new(),
            research: String::new(),
            analysis: String::new(),
            critique: String::new(),
            final_answer: "done".to_string(),
            extra: BTreeMap::new(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["final"], json!("done"));
        assert!(value.get("final_answer").is_none());
    }

    #[test]
    fn test_missing_field_detection() {
        let complete = json!({"plan": "", "research": "", "analysis": "", "critique": "", "final": ""});
        assert_eq!(QueryResult::missing_field(&complete), None);

        let no_critique = json!({"plan": "", "research": "", "analysis": "", "final": ""});
        assert_eq!(QueryResult::missing_field(&no_critique), Some(ResultField::Critique));

        assert_eq!(QueryResult::missing_field(&json!([1, 2])), Some(ResultField::Plan));
    }

    #[test]
    fn test_field_order_matches_index() {
        for (idx, field) in ResultField::ALL.iter().enumerate() {
            assert_eq!(field.index(), idx);
        }
    }
}
