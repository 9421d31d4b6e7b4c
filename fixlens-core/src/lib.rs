/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! # FixLens Core
//!
//! Core types and error definitions for the FixLens codec.
//!
//! This crate provides the building blocks shared by the other FixLens crates:
//! - **Error types**: typed-value construction errors with `thiserror`
//! - **Field types**: [`FieldRecord`], the annotated decoded field
//! - **Message types**: [`DecodedMessage`], an ordered field sequence
//! - **Value types**: [`SeqNum`], [`Timestamp`], [`CompId`], [`Side`], [`OrdType`]
//!
//! Every codec operation downstream is total; the only fallible surfaces
//! live here, where free-form input is turned into typed values.

pub mod error;
pub mod field;
pub mod message;
pub mod tag;
pub mod types;

pub use error::FieldError;
pub use field::FieldRecord;
pub use message::DecodedMessage;
pub use types::{CompId, OrdType, SeqNum, Side, Timestamp};
