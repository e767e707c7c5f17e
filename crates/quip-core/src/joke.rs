//! The joke entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single joke, either persisted or freshly fetched from the provider.
///
/// Values handed out by the store are detached copies; mutating one never
/// touches the stored row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
  /// Store-assigned surrogate key. `None` until the joke has been persisted.
  #[serde(default)]
  pub id:          Option<i64>,
  /// Identifier assigned by the provider; unique across the store.
  pub external_id: String,
  pub content:     String,
  /// Provenance link. Absent for locally seeded content.
  #[serde(default)]
  pub url:         Option<String>,
  pub created_at:  DateTime<Utc>,
}

impl Joke {
  /// Build an unpersisted joke.
  pub fn new(
    external_id: impl Into<String>,
    content: impl Into<String>,
    url: Option<String>,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id: None,
      external_id: external_id.into(),
      content: content.into(),
      url,
      created_at,
    }
  }

  pub fn is_persisted(&self) -> bool { self.id.is_some() }
}
