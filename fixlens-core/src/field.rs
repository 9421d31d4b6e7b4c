/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Decoded field records.
//!
//! A [`FieldRecord`] is one `tag=value` unit of a decoded message,
//! annotated with the tag's name and description from the tag directory.
//! Records are produced only by decoding and are immutable once created.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One decoded `tag=value` field with its directory annotation.
///
/// `name` and `description` come from the tag directory's exact-match
/// lookup on `tag`; unknown tags carry the sentinel values
/// `"UnknownTag"` and `"Description not available"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Numeric tag identifier, as text (e.g. `"11"`).
    pub tag: String,
    /// Tag name from the directory, or the unknown-tag sentinel.
    pub name: String,
    /// Raw field value, always kept as text at the codec boundary.
    pub value: String,
    /// Tag description from the directory, or its sentinel.
    pub description: String,
}

impl FieldRecord {
    /// Creates a new field record.
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            value: value.into(),
            description: description.into(),
        }
    }
}

impl fmt::Display for FieldRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.tag, self.value, self.name)
    }
}
