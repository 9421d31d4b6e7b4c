/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Decoded message representation.
//!
//! A [`DecodedMessage`] is the ordered sequence of [`FieldRecord`]s parsed
//! from one wire message. Order is the order of appearance in the source
//! text; the sequence is never re-sorted and repeated tags are kept as
//! separate records.

use crate::field::FieldRecord;
use smallvec::SmallVec;

/// Ordered sequence of decoded fields for one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedMessage {
    fields: SmallVec<[FieldRecord; 16]>,
}

impl DecodedMessage {
    /// Creates an empty decoded message.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: SmallVec::new(),
        }
    }

    /// Builds a decoded message from an ordered field sequence.
    #[must_use]
    pub fn from_fields(fields: impl IntoIterator<Item = FieldRecord>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// Appends a field, preserving insertion order.
    #[inline]
    pub fn push(&mut self, field: FieldRecord) {
        self.fields.push(field);
    }

    /// Returns the fields in source order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldRecord] {
        &self.fields
    }

    /// Returns the first field with the given tag.
    ///
    /// Repeated tags are kept as separate records; this lookup picks the
    /// first occurrence deterministically.
    #[must_use]
    pub fn first(&self, tag: &str) -> Option<&FieldRecord> {
        self.fields.iter().find(|field| field.tag == tag)
    }

    /// Returns the number of decoded fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields were decoded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in source order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldRecord> {
        self.fields.iter()
    }
}

impl IntoIterator for DecodedMessage {
    type Item = FieldRecord;
    type IntoIter = smallvec::IntoIter<[FieldRecord; 16]>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodedMessage {
    type Item = &'a FieldRecord;
    type IntoIter = std::slice::Iter<'a, FieldRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<FieldRecord> for DecodedMessage {
    fn from_iter<I: IntoIterator<Item = FieldRecord>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}
