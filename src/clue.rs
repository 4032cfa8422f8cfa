//! Clue definitions and clue numbering.
//!
//! Clues arrive as plain records: a prompt, an answer, a direction and a
//! start coordinate. [`number_clues`] assigns crossword numbers in reading
//! order; clues that start on the same cell (one across, one down) share a
//! number.
//!
//! ```
//! use crossword_rust::clue::{ClueDefinition, Direction, number_clues};
//!
//! let clues = vec![
//!     ClueDefinition::new("Feline", "cat", Direction::Across, 0, 0),
//!     ClueDefinition::new("Taxi", "cab", Direction::Down, 0, 0),
//!     ClueDefinition::new("Also", "too", Direction::Across, 0, 2),
//! ];
//! let numbered = number_clues(&clues);
//! assert_eq!(numbered[0].number, 1);
//! assert_eq!(numbered[1].number, 1);
//! assert_eq!(numbered[2].number, 2);
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cell::Coord;
use crate::error::{Error, Result};
use crate::validate;

/// Direction a word runs in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Across,
    Down,
}

impl Direction {
    /// The other direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Across => "across",
            Self::Down => "down",
        }
    }

    /// Parse `"across"` or `"down"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "across" => Some(Self::Across),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clue as supplied by the puzzle author.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueDefinition {
    pub clue: String,
    pub answer: String,
    pub direction: Direction,
    pub x: u32,
    pub y: u32,
    /// Custom class tag applied to every cell of the answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

impl ClueDefinition {
    #[must_use]
    pub fn new(clue: &str, answer: &str, direction: Direction, x: u32, y: u32) -> Self {
        Self {
            clue: clue.to_string(),
            answer: answer.to_string(),
            direction,
            x,
            y,
            custom: None,
        }
    }

    /// Attach a custom class tag.
    #[must_use]
    pub fn with_custom(mut self, custom: &str) -> Self {
        self.custom = Some(custom.to_string());
        self
    }

    /// Start cell of the answer.
    #[must_use]
    pub const fn start(&self) -> Coord {
        Coord::new(self.x, self.y)
    }

    /// Convert a raw record, coercing anything malformed.
    ///
    /// Missing or non-text `clue`/`answer` become empty (numbers are printed),
    /// non-numeric coordinates become 0 and an unknown direction becomes
    /// across. Pair with [`validate::validate_clues`] to report what was
    /// coerced.
    #[must_use]
    pub fn from_value_lossy(value: &Value) -> Self {
        let text = |key: &str| match value.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let coordinate = |key: &str| match value.get(key) {
            Some(Value::Number(n)) => n
                .as_u64()
                .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
                .or_else(|| n.as_f64().map(|v| v.max(0.0).min(f64::from(u32::MAX)) as u32))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        };
        let direction = value
            .get("direction")
            .and_then(Value::as_str)
            .and_then(Direction::parse)
            .unwrap_or_default();
        let custom = value
            .get("custom")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        Self {
            clue: text("clue"),
            answer: text("answer"),
            direction,
            x: coordinate("x"),
            y: coordinate("y"),
            custom,
        }
    }
}

/// A clue with its assigned crossword number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NumberedClue {
    #[serde(flatten)]
    pub definition: ClueDefinition,
    /// Start cell; prints as `"x-y"`.
    pub id: Coord,
    pub number: u32,
}

impl NumberedClue {
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.definition.direction
    }

    #[must_use]
    pub const fn start(&self) -> Coord {
        self.id
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.definition.answer
    }

    #[must_use]
    pub fn clue(&self) -> &str {
        &self.definition.clue
    }
}

/// Assign clue numbers by start position.
///
/// Numbers start at 1 and follow (y, x) order of the distinct start cells.
/// The result is sorted by number; clues sharing a number keep their
/// reading-order position relative to each other.
#[must_use]
pub fn number_clues(clues: &[ClueDefinition]) -> Vec<NumberedClue> {
    let mut ordered: Vec<&ClueDefinition> = clues.iter().collect();
    ordered.sort_by_key(|clue| clue.start());

    let mut lookup: HashMap<Coord, u32> = HashMap::with_capacity(ordered.len());
    let mut current = 1;
    let mut numbered = Vec::with_capacity(ordered.len());
    for clue in ordered {
        let id = clue.start();
        let number = *lookup.entry(id).or_insert_with(|| {
            let number = current;
            current += 1;
            number
        });
        numbered.push(NumberedClue {
            definition: clue.clone(),
            id,
            number,
        });
    }

    numbered.sort_by_key(|clue| clue.number);
    numbered
}

/// Clues running in `direction`, in number order.
#[must_use]
pub fn clues_in_direction(clues: &[NumberedClue], direction: Direction) -> Vec<&NumberedClue> {
    clues
        .iter()
        .filter(|clue| clue.direction() == direction)
        .collect()
}

/// Parse a JSON array of clue records, rejecting anything malformed.
///
/// This is the typed alternative to the lenient widget path: the first
/// structural problem is returned as an [`Error`] instead of a logged
/// diagnostic.
pub fn parse_clues_strict(json: &str) -> Result<Vec<ClueDefinition>> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    for (index, record) in records.iter().enumerate() {
        if let Some(diagnostic) = validate::check_record(index, record).into_iter().next() {
            return Err(diagnostic.into());
        }
    }

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let clue: ClueDefinition = serde_json::from_value(record)?;
            if clue.answer.is_empty() {
                return Err(Error::EmptyAnswer { record: index });
            }
            Ok(clue)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn clue(answer: &str, direction: Direction, x: u32, y: u32) -> ClueDefinition {
        ClueDefinition::new("", answer, direction, x, y)
    }

    #[test]
    fn test_numbers_follow_reading_order() {
        let clues = vec![
            clue("abc", Direction::Across, 0, 2),
            clue("abc", Direction::Down, 2, 0),
            clue("abc", Direction::Across, 0, 0),
        ];
        let numbered = number_clues(&clues);
        let got: Vec<(String, u32)> = numbered
            .iter()
            .map(|c| (c.id.to_string(), c.number))
            .collect();
        assert_eq!(
            got,
            vec![
                ("0-0".to_string(), 1),
                ("2-0".to_string(), 2),
                ("0-2".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_shared_start_shares_number() {
        let clues = vec![
            clue("abc", Direction::Down, 0, 0),
            clue("xyz", Direction::Across, 1, 1),
            clue("abc", Direction::Across, 0, 0),
        ];
        let numbered = number_clues(&clues);
        assert_eq!(numbered.len(), 3);
        let at_origin: Vec<u32> = numbered
            .iter()
            .filter(|c| c.id == Coord::new(0, 0))
            .map(|c| c.number)
            .collect();
        assert_eq!(at_origin, vec![1, 1]);
        assert_eq!(numbered[2].number, 2);
        // Stable within a shared number: the down clue came first.
        assert_eq!(numbered[0].direction(), Direction::Down);
    }

    #[test]
    fn test_clues_in_direction() {
        let numbered = number_clues(&[
            clue("abc", Direction::Down, 0, 0),
            clue("abc", Direction::Across, 0, 0),
            clue("abc", Direction::Across, 0, 2),
        ]);
        let across: Vec<u32> = clues_in_direction(&numbered, Direction::Across)
            .iter()
            .map(|c| c.number)
            .collect();
        assert_eq!(across, vec![1, 2]);
    }

    #[test]
    fn test_direction_serde() {
        let d: Direction = serde_json::from_value(json!("down")).unwrap();
        assert_eq!(d, Direction::Down);
        assert_eq!(serde_json::to_value(Direction::Across).unwrap(), json!("across"));
        assert_eq!(Direction::Across.flipped(), Direction::Down);
    }

    #[test]
    fn test_from_value_lossy_coerces() {
        let value = json!({"clue": 5, "answer": "ok", "direction": "sideways", "x": "3", "y": -2});
        let clue = ClueDefinition::from_value_lossy(&value);
        assert_eq!(clue.clue, "5");
        assert_eq!(clue.answer, "ok");
        assert_eq!(clue.direction, Direction::Across);
        assert_eq!((clue.x, clue.y), (3, 0));
        assert_eq!(clue.custom, None);
    }

    #[test]
    fn test_parse_strict_ok() {
        let clues = parse_clues_strict(
            r#"[{"clue": "Pet", "answer": "dog", "direction": "down", "x": 1, "y": 0, "custom": "star"}]"#,
        )
        .unwrap();
        assert_eq!(clues.len(), 1);
        assert_eq!(clues[0].direction, Direction::Down);
        assert_eq!(clues[0].custom.as_deref(), Some("star"));
    }

    #[test]
    fn test_parse_strict_rejects_bad_field() {
        let err = parse_clues_strict(
            r#"[{"clue": "Pet", "answer": "dog", "direction": "down", "x": "1", "y": 0}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidClue {
                record: 0,
                field: "x",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_strict_rejects_empty_answer() {
        let err = parse_clues_strict(
            r#"[{"clue": "Pet", "answer": "", "direction": "down", "x": 1, "y": 0}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyAnswer { record: 0 }));
    }
}
