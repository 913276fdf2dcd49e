use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};

pub const COMPLETED_MARKER: &str =
  "(Completed)";

/// Server-assigned task identifier.
///
/// The API may hand out numeric or textual ids; both are kept as they
/// arrive and echoed back unchanged in per-id paths and PUT bodies.
/// Numbers that do not fit an `i64` (fractions, very large values) keep
/// their JSON form in `RawNumber`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
)]
#[serde(untagged)]
pub enum TaskId {
  Number(i64),
  RawNumber(serde_json::Number),
  Text(String)
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    match self {
      | TaskId::Number(value) => {
        write!(f, "{value}")
      }
      | TaskId::RawNumber(value) => {
        write!(f, "{value}")
      }
      | TaskId::Text(value) => {
        f.write_str(value)
      }
    }
  }
}

/// Only text that prints back identically becomes a number, so `"007"`
/// or `"+5"` stay textual.
impl FromStr for TaskId {
  type Err = std::convert::Infallible;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    if let Some(value) = trimmed
      .parse::<i64>()
      .ok()
      .filter(|value| {
        value.to_string() == trimmed
      })
    {
      return Ok(TaskId::Number(value));
    }
    if let Some(value) = trimmed
      .parse::<serde_json::Number>()
      .ok()
      .filter(|value| {
        value.to_string() == trimmed
      })
    {
      return Ok(TaskId::RawNumber(value));
    }
    Ok(TaskId::Text(trimmed.to_string()))
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:          TaskId,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub completed:   bool
}

impl Task {
  pub fn summary(&self) -> String {
    format!(
      "{} - {}",
      self.title, self.description
    )
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskCreate {
  pub title:       String,
  pub description: String
}
