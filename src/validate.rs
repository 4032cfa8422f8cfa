//! Advisory validation of raw clue records.
//!
//! Validation never blocks building a puzzle. Every field that does not have
//! its expected type is logged as a warning and collected into a
//! [`Validation`]; the caller decides whether to care.

use std::fmt;

use serde_json::Value;

use crate::error::Error;
use crate::event::{LogLevel, emit_log};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FieldType {
    Text,
    Number,
    Direction,
}

impl FieldType {
    const fn name(self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Number => "number",
            Self::Direction => "direction",
        }
    }

    fn accepts(self, value: Option<&Value>) -> bool {
        match (self, value) {
            (Self::Text, Some(Value::String(_))) | (Self::Number, Some(Value::Number(_))) => true,
            (Self::Direction, Some(Value::String(s))) => s == "across" || s == "down",
            _ => false,
        }
    }
}

const FIELDS: [(&str, FieldType); 5] = [
    ("clue", FieldType::Text),
    ("answer", FieldType::Text),
    ("direction", FieldType::Direction),
    ("x", FieldType::Number),
    ("y", FieldType::Number),
];

/// One field of one record that failed its type check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Position of the record in the input.
    pub record: usize,
    pub field: &'static str,
    pub expected: &'static str,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clue {}: \"{}\" is not a {}",
            self.record, self.field, self.expected
        )
    }
}

impl From<Diagnostic> for Error {
    fn from(d: Diagnostic) -> Self {
        Self::InvalidClue {
            record: d.record,
            field: d.field,
            expected: d.expected,
        }
    }
}

/// Outcome of validating a clue list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    diagnostics: Vec<Diagnostic>,
}

impl Validation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Type-check one record.
pub(crate) fn check_record(index: usize, record: &Value) -> Vec<Diagnostic> {
    if !record.is_object() {
        return vec![Diagnostic {
            record: index,
            field: "record",
            expected: "object",
        }];
    }
    FIELDS
        .iter()
        .filter(|(field, ty)| !ty.accepts(record.get(*field)))
        .map(|&(field, ty)| Diagnostic {
            record: index,
            field,
            expected: ty.name(),
        })
        .collect()
}

/// Check every record and log a warning for each failing field.
#[must_use]
pub fn validate_clues(records: &[Value]) -> Validation {
    let mut diagnostics = Vec::new();
    for (index, record) in records.iter().enumerate() {
        for diagnostic in check_record(index, record) {
            emit_log(LogLevel::Warn, &format!("{diagnostic}\n{record}"));
            diagnostics.push(diagnostic);
        }
    }
    Validation { diagnostics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_records() {
        let records = vec![
            json!({"clue": "Pet", "answer": "dog", "direction": "down", "x": 0, "y": 0}),
            json!({"clue": "Pet", "answer": "cat", "direction": "across", "x": 0, "y": 0, "custom": "x"}),
        ];
        let validation = validate_clues(&records);
        assert!(validation.is_valid());
        assert!(validation.diagnostics().is_empty());
    }

    #[test]
    fn test_reports_each_failing_field() {
        let records = vec![
            json!({"clue": "ok", "answer": "dog", "direction": "down", "x": 0, "y": 0}),
            json!({"clue": 3, "answer": "dog", "direction": "down", "x": "1", "y": 0}),
        ];
        let validation = validate_clues(&records);
        assert!(!validation.is_valid());
        assert_eq!(
            validation.diagnostics(),
            &[
                Diagnostic {
                    record: 1,
                    field: "clue",
                    expected: "string"
                },
                Diagnostic {
                    record: 1,
                    field: "x",
                    expected: "number"
                },
            ]
        );
    }

    #[test]
    fn test_missing_fields_and_non_objects() {
        let records = vec![json!({"answer": "dog"}), json!("nope")];
        let validation = validate_clues(&records);
        let fields: Vec<&str> = validation.diagnostics().iter().map(|d| d.field).collect();
        assert_eq!(fields, vec!["clue", "direction", "x", "y", "record"]);
    }

    #[test]
    fn test_unknown_direction() {
        let diagnostics = check_record(
            0,
            &json!({"clue": "", "answer": "a", "direction": "diagonal", "x": 0, "y": 0}),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "clue 0: \"direction\" is not a direction"
        );
    }
}
