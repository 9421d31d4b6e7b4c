/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Core value types for FixLens.
//!
//! This module provides the typed field values used by the encoder and the
//! summary builder:
//! - [`SeqNum`]: message sequence number
//! - [`Timestamp`]: UTC timestamp with FIX second-precision formatting
//! - [`CompId`]: component identifier (SenderCompID, TargetCompID)
//! - [`Side`]: order side (tag 54)
//! - [`OrdType`]: order type (tag 40)

use crate::error::FieldError;
use arrayvec::ArrayString;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for CompID strings in bytes.
pub const COMP_ID_MAX_LEN: usize = 32;

/// Length of a second-precision FIX timestamp: `YYYYMMDD-HH:MM:SS`.
const TIMESTAMP_LEN: usize = 17;

/// FIX message sequence number.
///
/// Sequence numbers are positive integers identifying messages within a
/// session. They start at 1 and increment for each message sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct SeqNum(u64);

impl SeqNum {
    /// Creates a new sequence number.
    ///
    /// # Arguments
    /// * `value` - The sequence number value (should be >= 1)
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw sequence number value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the next sequence number.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Checks if this sequence number is valid (>= 1).
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1
    }
}

impl Default for SeqNum {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u64> for SeqNum {
    type Error = FieldError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value >= 1 {
            Ok(Self(value))
        } else {
            Err(FieldError::InvalidSeqNum)
        }
    }
}

impl From<SeqNum> for u64 {
    fn from(seq: SeqNum) -> Self {
        seq.0
    }
}

impl fmt::Display for SeqNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// UTC timestamp formatted at second precision for the wire.
///
/// The protocol's timestamp fields (SendingTime 52, TransactTime 60) carry
/// `YYYYMMDD-HH:MM:SS` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC timestamp.
    #[inline]
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Converts to a chrono `DateTime<Utc>`.
    #[inline]
    #[must_use]
    pub const fn to_datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Formats the timestamp in FIX second precision.
    ///
    /// Format: `YYYYMMDD-HH:MM:SS`
    #[must_use]
    pub fn format_seconds(self) -> ArrayString<TIMESTAMP_LEN> {
        let mut buf = ArrayString::new();
        let _ = std::fmt::write(
            &mut buf,
            format_args!("{}", self.0.format("%Y%m%d-%H:%M:%S")),
        );
        buf
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_seconds())
    }
}

/// Component identifier for FIX counterparties.
///
/// Used for SenderCompID (tag 49) and TargetCompID (tag 56). Maximum
/// length is 32 bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct CompId(ArrayString<COMP_ID_MAX_LEN>);

impl CompId {
    /// Creates a new CompId from a string slice.
    ///
    /// # Arguments
    /// * `s` - The component identifier string
    ///
    /// # Returns
    /// `Some(CompId)` if the string fits within the maximum length, `None` otherwise.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        ArrayString::from(s).ok().map(Self)
    }

    /// Returns the CompId as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the length of the CompId in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the CompId is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CompId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CompId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompId {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or(FieldError::CompIdTooLong {
            length: s.len(),
            max: COMP_ID_MAX_LEN,
        })
    }
}

/// Order side (tag 54).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order.
    Buy = b'1',
    /// Sell order.
    Sell = b'2',
}

impl Side {
    /// Creates a Side from its wire character.
    ///
    /// # Arguments
    /// * `c` - The character representing the side
    ///
    /// # Returns
    /// `Some(Side)` if the character is valid, `None` otherwise.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Buy),
            '2' => Some(Self::Sell),
            _ => None,
        }
    }

    /// Returns the wire character for this side.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Returns the human-readable label for this side.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Side {
    type Error = FieldError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(FieldError::InvalidSide(c))
    }
}

/// Order type (tag 40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrdType {
    /// Market order.
    Market = b'1',
    /// Limit order.
    Limit = b'2',
}

impl OrdType {
    /// Creates an OrdType from its wire character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Market),
            '2' => Some(Self::Limit),
            _ => None,
        }
    }

    /// Returns the wire character for this order type.
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Returns the human-readable label for this order type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Limit => "Limit",
        }
    }
}

impl fmt::Display for OrdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for OrdType {
    type Error = FieldError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(FieldError::InvalidOrdType(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_num_operations() {
        let seq = SeqNum::new(5);
        assert_eq!(seq.value(), 5);
        assert_eq!(seq.next().value(), 6);
        assert!(seq.is_valid());
        assert!(!SeqNum::new(0).is_valid());
    }

    #[test]
    fn test_seq_num_try_from() {
        assert_eq!(SeqNum::try_from(1), Ok(SeqNum::new(1)));
        assert_eq!(SeqNum::try_from(0), Err(FieldError::InvalidSeqNum));
    }

    #[test]
    fn test_timestamp_format() {
        let dt = DateTime::from_timestamp(0, 0).unwrap();
        let ts = Timestamp::from(dt);
        assert_eq!(ts.format_seconds().as_str(), "19700101-00:00:00");
    }

    #[test]
    fn test_comp_id() {
        let id = CompId::new("SENDER").unwrap();
        assert_eq!(id.as_str(), "SENDER");
        assert_eq!(id.len(), 6);
        assert!(!id.is_empty());
    }

    #[test]
    fn test_comp_id_too_long() {
        let long_str = "A".repeat(COMP_ID_MAX_LEN + 1);
        assert!(CompId::new(&long_str).is_none());
        assert_eq!(
            long_str.parse::<CompId>(),
            Err(FieldError::CompIdTooLong {
                length: COMP_ID_MAX_LEN + 1,
                max: COMP_ID_MAX_LEN,
            })
        );
    }

    #[test]
    fn test_side_from_char() {
        assert_eq!(Side::from_char('1'), Some(Side::Buy));
        assert_eq!(Side::from_char('2'), Some(Side::Sell));
        assert_eq!(Side::from_char('X'), None);
    }

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Buy.label(), "Buy");
        assert_eq!(Side::Sell.label(), "Sell");
        assert_eq!(Side::Buy.to_string(), "1");
    }

    #[test]
    fn test_ord_type() {
        assert_eq!(OrdType::from_char('1'), Some(OrdType::Market));
        assert_eq!(OrdType::from_char('2'), Some(OrdType::Limit));
        assert_eq!(OrdType::Market.label(), "Market");
        assert_eq!(OrdType::Limit.as_char(), '2');
    }
}
