/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Message decoder.
//!
//! Parses one message string into an ordered [`DecodedMessage`], annotating
//! each field with its name and description from the tag directory. The
//! decoder is total: unknown tags get sentinel annotations, tokens without
//! `=` are skipped, and a message with no valid fields decodes to an empty
//! message.

use crate::splitter::split_messages;
use crate::{PIPE, SOH};
use fixlens_core::field::FieldRecord;
use fixlens_core::message::DecodedMessage;
use fixlens_dictionary::TagDirectory;
use memchr::memchr;

/// Field separator selection, resolved once per decode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// Detect from the message: SOH when present, otherwise `|`.
    #[default]
    Auto,
    /// Caller-supplied separator character.
    Custom(char),
}

impl Separator {
    /// Maps user input to a separator: the first character when the input
    /// is non-empty, otherwise auto-detection.
    #[must_use]
    pub fn from_user_input(input: &str) -> Self {
        input.chars().next().map_or(Self::Auto, Self::Custom)
    }

    /// Resolves to the concrete separator character for one message.
    #[must_use]
    pub fn resolve(self, message: &str) -> char {
        match self {
            Self::Custom(c) => c,
            Self::Auto => {
                if memchr(SOH as u8, message.as_bytes()).is_some() {
                    SOH
                } else {
                    PIPE
                }
            }
        }
    }
}

/// Message decoder over an immutable tag directory.
///
/// The directory is handed in at construction and only read afterwards,
/// so one decoder (or many) can serve any number of decode calls.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'d> {
    directory: &'d TagDirectory,
}

impl<'d> Decoder<'d> {
    /// Creates a decoder borrowing the given tag directory.
    #[inline]
    #[must_use]
    pub const fn new(directory: &'d TagDirectory) -> Self {
        Self { directory }
    }

    /// Decodes one message string into ordered, annotated field records.
    ///
    /// Tokens are split on the resolved separator; each token containing
    /// `=` is split once on the first `=` into tag and value. Token order
    /// is preserved and repeated tags stay separate records.
    #[must_use]
    pub fn decode(&self, message: &str, separator: Separator) -> DecodedMessage {
        let sep = separator.resolve(message);
        let mut decoded = DecodedMessage::new();
        for token in message.split(sep) {
            let Some((tag, value)) = token.split_once('=') else {
                continue;
            };
            decoded.push(FieldRecord::new(
                tag,
                self.directory.name_of(tag),
                value,
                self.directory.description_of(tag),
            ));
        }
        decoded
    }

    /// Splits a buffer of concatenated messages and decodes each one.
    #[must_use]
    pub fn decode_all(&self, buffer: &str, separator: Separator) -> Vec<DecodedMessage> {
        split_messages(buffer)
            .iter()
            .map(|message| self.decode(message, separator))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlens_dictionary::{UNKNOWN_TAG_DESCRIPTION, UNKNOWN_TAG_NAME, defaults};

    #[test]
    fn test_separator_from_user_input() {
        assert_eq!(Separator::from_user_input(""), Separator::Auto);
        assert_eq!(Separator::from_user_input("|"), Separator::Custom('|'));
        assert_eq!(Separator::from_user_input(";x"), Separator::Custom(';'));
    }

    #[test]
    fn test_separator_resolution() {
        assert_eq!(Separator::Auto.resolve("8=FIX\x0135=D\x01"), SOH);
        assert_eq!(Separator::Auto.resolve("8=FIX|35=D|"), PIPE);
        assert_eq!(Separator::Custom(';').resolve("8=FIX\x01"), ';');
    }

    #[test]
    fn test_decode_preserves_order_and_values() {
        let directory = defaults::order_tags();
        let decoder = Decoder::new(&directory);
        let decoded = decoder.decode("8=FIX.4.4\x0135=D\x0111=ORD1\x01", Separator::Auto);

        let tags: Vec<&str> = decoded.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, ["8", "35", "11"]);
        assert_eq!(decoded.first("11").unwrap().value, "ORD1");
        assert_eq!(decoded.first("11").unwrap().name, "ClOrdID");
    }

    #[test]
    fn test_decode_pipe_fallback() {
        let directory = defaults::order_tags();
        let decoder = Decoder::new(&directory);
        let decoded = decoder.decode("8=FIX.4.4|35=D|54=2|", Separator::Auto);
        assert_eq!(decoded.first("54").unwrap().value, "2");
    }

    #[test]
    fn test_decode_unknown_tag_sentinels() {
        let directory = defaults::order_tags();
        let decoder = Decoder::new(&directory);
        let decoded = decoder.decode("9999=foo\x01", Separator::Auto);
        let record = decoded.first("9999").unwrap();
        assert_eq!(record.name, UNKNOWN_TAG_NAME);
        assert_eq!(record.description, UNKNOWN_TAG_DESCRIPTION);
        assert_eq!(record.value, "foo");
    }

    #[test]
    fn test_decode_skips_tokens_without_equals() {
        let directory = defaults::order_tags();
        let decoder = Decoder::new(&directory);
        let decoded = decoder.decode("junk\x0111=ORD1\x01\x01", Separator::Auto);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded.first("11").unwrap().value, "ORD1");
    }

    #[test]
    fn test_decode_value_with_equals_splits_once() {
        let directory = defaults::order_tags();
        let decoder = Decoder::new(&directory);
        let decoded = decoder.decode("58=a=b\x01", Separator::Auto);
        assert_eq!(decoded.first("58").unwrap().value, "a=b");
    }

    #[test]
    fn test_decode_no_valid_fields_is_empty() {
        let directory = defaults::order_tags();
        let decoder = Decoder::new(&directory);
        assert!(decoder.decode("no fields here", Separator::Custom(';')).is_empty());
    }

    #[test]
    fn test_decode_repeated_tags_kept() {
        let directory = defaults::order_tags();
        let decoder = Decoder::new(&directory);
        let decoded = decoder.decode("54=1\x0154=2\x01", Separator::Auto);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.first("54").unwrap().value, "1");
    }

    #[test]
    fn test_decode_all_two_messages() {
        let directory = defaults::order_tags();
        let decoder = Decoder::new(&directory);
        let buffer = "8=FIX.4.4\x0111=A\x0110=061\x018=FIX.4.4\x0111=B\x0110=042\x01";
        let decoded = decoder.decode_all(buffer, Separator::Auto);
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].first("11").unwrap().value, "A");
        assert_eq!(decoded[1].first("11").unwrap().value, "B");
    }
}
