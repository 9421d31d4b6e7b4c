/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Protocol checksum calculation.
//!
//! The checksum is the sum of all character code points in the message
//! text modulo 256, formatted as a 3-digit zero-padded decimal string.
//! Summing code points (not bytes) follows the behavior this codec is
//! compatible with; the two only differ for non-ASCII input, which is
//! undefined for this protocol.

/// Calculates the checksum for the given text.
///
/// Total over any string; the empty string sums to 0.
///
/// # Arguments
/// * `text` - The message text to checksum
///
/// # Returns
/// The checksum value as a u8 (0-255).
///
/// # Example
/// ```
/// use fixlens_tagvalue::calculate_checksum;
///
/// let value = calculate_checksum("8=FIX.4.4\x019=5\x0135=D\x01");
/// ```
#[inline]
#[must_use]
pub fn calculate_checksum(text: &str) -> u8 {
    // Wrapping accumulation is exact: 2^32 is a multiple of 256.
    let sum = text
        .chars()
        .fold(0u32, |acc, c| acc.wrapping_add(c as u32));
    (sum % 256) as u8
}

/// Formats a checksum value as a 3-digit zero-padded string.
///
/// # Arguments
/// * `value` - The checksum value (0-255)
#[inline]
#[must_use]
pub fn format_checksum(value: u8) -> String {
    format!("{value:03}")
}

/// Calculates and formats the checksum in one step.
///
/// Always returns a 3-character numeric string in `"000"..="255"`.
#[inline]
#[must_use]
pub fn checksum(text: &str) -> String {
    format_checksum(calculate_checksum(text))
}
