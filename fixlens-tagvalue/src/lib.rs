/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! # FixLens Tag-Value
//!
//! FIX-style tag=value message handling for FixLens.
//!
//! This crate implements the codec core:
//! - **Checksum**: modulo-256 checksum over character code points
//! - **Encoder**: New Order Single construction with after-the-fact
//!   body-length and checksum patching
//! - **Splitter**: partitioning a buffer of concatenated messages
//! - **Decoder**: total parsing into annotated [`fixlens_core::DecodedMessage`]s
//!
//! Every operation is a pure computation over in-memory strings; none of
//! them can fail over their documented input domains.

pub mod checksum;
pub mod decoder;
pub mod encoder;
pub mod splitter;

/// SOH (Start of Header), the conventional wire field separator.
pub const SOH: char = '\x01';

/// Pipe, the human-display separator and the decoder's fallback.
pub const PIPE: char = '|';

pub use checksum::{calculate_checksum, checksum, format_checksum};
pub use decoder::{Decoder, Separator};
pub use encoder::{OrderSpec, encode, for_display};
pub use splitter::{MESSAGE_START, split_messages};
