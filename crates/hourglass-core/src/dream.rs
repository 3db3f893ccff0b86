//! Dreams — free-text aspirations kept in one shared list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One stored dream.
///
/// Entries are created as `{id, text, done: false}` and nothing in the
/// service sets `done`. A stored entry is kept as its full JSON object so
/// fields this service does not know about, or entries missing a field,
/// survive a rewrite of the list unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dream(Map<String, Value>);

impl Dream {
  pub fn new(id: i64, text: impl Into<String>) -> Self {
    let mut fields = Map::new();
    fields.insert("id".into(), id.into());
    fields.insert("text".into(), Value::String(text.into()));
    fields.insert("done".into(), false.into());
    Self(fields)
  }

  /// The entry's id, if it has an integer one.
  pub fn id(&self) -> Option<i64> { self.0.get("id").and_then(Value::as_i64) }

  pub fn text(&self) -> Option<&str> {
    self.0.get("text").and_then(Value::as_str)
  }

  /// `false` unless the entry carries `"done": true`.
  pub fn is_done(&self) -> bool {
    self.0.get("done").and_then(Value::as_bool).unwrap_or(false)
  }

  pub fn fields(&self) -> &Map<String, Value> { &self.0 }
}

impl From<Map<String, Value>> for Dream {
  fn from(fields: Map<String, Value>) -> Self { Self(fields) }
}

/// Dream text that has been trimmed and checked to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDream(String);

impl NewDream {
  /// Returns `None` if `text` is blank after trimming.
  pub fn parse(text: &str) -> Option<Self> {
    let text = text.trim();
    (!text.is_empty()).then(|| Self(text.to_owned()))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn into_inner(self) -> String { self.0 }
}

/// One past the highest id in `dreams`, or `0` for an empty list. Entries
/// without an integer id count as `-1`.
pub fn next_id(dreams: &[Dream]) -> i64 {
  dreams
    .iter()
    .map(|d| d.id().unwrap_or(-1))
    .max()
    .unwrap_or(-1)
    .saturating_add(1)
}

/// Append `text` under the next free id and return the new entry.
pub fn push(dreams: &mut Vec<Dream>, text: NewDream) -> Dream {
  let dream = Dream::new(next_id(dreams), text.into_inner());
  dreams.push(dream.clone());
  dream
}

/// Drop every entry with `id`; returns how many were removed. Entries
/// without an integer id are never removed.
pub fn remove(dreams: &mut Vec<Dream>, id: i64) -> usize {
  let before = dreams.len();
  dreams.retain(|d| d.id() != Some(id));
  before - dreams.len()
}
