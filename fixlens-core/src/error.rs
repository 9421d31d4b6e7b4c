/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Error types for FixLens.
//!
//! The codec operations themselves (checksum, encode, split, decode,
//! summarize) are total over their documented input domains and never
//! return errors. The enum here covers the one fallible boundary: turning
//! free-form input into typed field values before the codec sees them.

use thiserror::Error;

/// Errors that occur when constructing typed field values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Side character is not one of the supported values.
    #[error("invalid side {0:?}: expected '1' (buy) or '2' (sell)")]
    InvalidSide(char),

    /// Order type character is not one of the supported values.
    #[error("invalid order type {0:?}: expected '1' (market) or '2' (limit)")]
    InvalidOrdType(char),

    /// Sequence numbers start at 1.
    #[error("invalid sequence number: must be >= 1")]
    InvalidSeqNum,

    /// CompID exceeds the maximum length.
    #[error("comp id too long: {length} bytes exceeds maximum {max}")]
    CompIdTooLong {
        /// Length of the rejected identifier in bytes.
        length: usize,
        /// Maximum allowed length in bytes.
        max: usize,
    },
}
