/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! # FixLens
//!
//! A small toolkit for creating and interpreting FIX-style order messages.
//!
//! FixLens covers the codec core of a tag=value financial messaging
//! protocol: building a well-formed New Order Single with computed body
//! length and checksum, splitting a pasted buffer into individual
//! messages, decoding each into annotated field records via a tag
//! directory, and projecting compact per-order summaries.
//!
//! ## Quick Start
//!
//! ```
//! use fixlens::prelude::*;
//!
//! let directory = fixlens::dictionary::defaults::order_tags();
//! let decoder = Decoder::new(&directory);
//!
//! let spec = OrderSpec {
//!     order_id: "12345".to_owned(),
//!     client_id: CompId::new("CLIENT1").unwrap(),
//!     broker_id: CompId::new("BROKER1").unwrap(),
//!     seq_num: SeqNum::new(1),
//!     symbol: "AAPL".to_owned(),
//!     side: Side::Buy,
//!     quantity: 100,
//!     price: None,
//! };
//! let message = encode(&spec);
//!
//! let decoded = decoder.decode_all(&message, Separator::Auto);
//! let rows = summarize(&decoded);
//! assert_eq!(rows[0].order_id, "12345");
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: shared types, field records, decoded messages
//! - [`dictionary`]: the immutable tag directory and embedded defaults
//! - [`tagvalue`]: checksum, encoder, splitter, decoder
//! - [`report`]: per-order summary rows

pub mod core {
    //! Shared types, field records, and decoded messages.
    pub use fixlens_core::*;
}

pub mod dictionary {
    //! Immutable tag directory and embedded defaults.
    pub use fixlens_dictionary::*;
}

pub mod tagvalue {
    //! Checksum, encoder, splitter, and decoder.
    pub use fixlens_tagvalue::*;
}

pub mod report {
    //! Per-order summary rows.
    pub use fixlens_report::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixlens_core::{
        CompId, DecodedMessage, FieldError, FieldRecord, OrdType, SeqNum, Side, Timestamp,
    };

    // Dictionary
    pub use fixlens_dictionary::{
        TagDef, TagDirectory, UNKNOWN_TAG_DESCRIPTION, UNKNOWN_TAG_NAME,
    };

    // Tag-value codec
    pub use fixlens_tagvalue::{
        Decoder, OrderSpec, Separator, checksum, encode, for_display, split_messages,
    };

    // Report
    pub use fixlens_report::{ExecutionStatus, SummaryRow, summarize};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let _seq = SeqNum::new(1);
        let _ts = Timestamp::now();
        let _side = Side::Buy;
        let _sep = Separator::Auto;
    }

    #[test]
    fn test_empty_directory_still_decodes() {
        let directory = TagDirectory::empty();
        let decoder = Decoder::new(&directory);
        let decoded = decoder.decode("11=ORD1\x01", Separator::Auto);
        assert_eq!(decoded.first("11").unwrap().name, UNKNOWN_TAG_NAME);
    }
}
