/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Message splitter.
//!
//! Partitions a raw buffer that may hold several concatenated messages
//! into individual message strings. The split point is the literal
//! message-start marker (the BeginString tag prefix), not the field
//! separator, so the splitter works the same whichever separator the
//! buffer uses.

/// Literal marker that opens every message.
pub const MESSAGE_START: &str = "8=FIX";

/// Splits a buffer into individual message strings.
///
/// Splits on [`MESSAGE_START`], discards empty fragments, re-prepends the
/// consumed marker to every fragment, and trims surrounding whitespace. A
/// buffer with no marker yields a single degenerate fragment with the
/// marker prepended; callers treat single-message input like any other.
#[must_use]
pub fn split_messages(buffer: &str) -> Vec<String> {
    buffer
        .split(MESSAGE_START)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            let message = format!("{MESSAGE_START}{fragment}");
            message.trim().to_owned()
        })
        .collect()
}
