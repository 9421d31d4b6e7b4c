/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Tag directory types.
//!
//! The directory maps a tag identifier (text) to its name and description.
//! It is constructed once, never mutated afterwards, and queried read-only
//! by the decoder; concurrent reads are safe by construction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name reported for tags missing from the directory.
pub const UNKNOWN_TAG_NAME: &str = "UnknownTag";

/// Description reported for tags missing from the directory.
pub const UNKNOWN_TAG_DESCRIPTION: &str = "Description not available";

/// One row of the tag reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDef {
    /// Tag identifier as text (unique match key, e.g. `"11"`).
    #[serde(rename = "Tag")]
    pub tag: String,
    /// Human-readable tag name (e.g. `"ClOrdID"`).
    #[serde(rename = "Name")]
    pub name: String,
    /// Longer description of the tag's meaning.
    #[serde(rename = "Description")]
    pub description: String,
}

impl TagDef {
    /// Creates a new tag definition.
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Immutable lookup table from tag identifier to [`TagDef`].
///
/// Lookup is exact string equality on the tag text; a miss is handled by
/// the decoder with the sentinel name/description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagDirectory {
    defs: HashMap<String, TagDef>,
}

impl TagDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            defs: HashMap::new(),
        }
    }

    /// Builds a directory from tag definition rows.
    ///
    /// A duplicate tag keeps the later row, matching map-building-over-
    /// iteration semantics.
    #[must_use]
    pub fn from_defs(defs: impl IntoIterator<Item = TagDef>) -> Self {
        Self {
            defs: defs
                .into_iter()
                .map(|def| (def.tag.clone(), def))
                .collect(),
        }
    }

    /// Looks up a tag by exact string equality.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<&TagDef> {
        self.defs.get(tag)
    }

    /// Returns the tag's name, or the unknown-tag sentinel.
    #[must_use]
    pub fn name_of(&self, tag: &str) -> &str {
        self.lookup(tag)
            .map_or(UNKNOWN_TAG_NAME, |def| def.name.as_str())
    }

    /// Returns the tag's description, or its sentinel.
    #[must_use]
    pub fn description_of(&self, tag: &str) -> &str {
        self.lookup(tag)
            .map_or(UNKNOWN_TAG_DESCRIPTION, |def| def.description.as_str())
    }

    /// Returns the number of known tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns true if the directory has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterates over the tag definitions in unspecified order.
    pub fn defs(&self) -> impl Iterator<Item = &TagDef> {
        self.defs.values()
    }
}

impl FromIterator<TagDef> for TagDirectory {
    fn from_iter<I: IntoIterator<Item = TagDef>>(iter: I) -> Self {
        Self::from_defs(iter)
    }
}
