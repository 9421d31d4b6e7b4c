/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! # FixLens Dictionary
//!
//! Tag directory for the FixLens decoder.
//!
//! This crate provides:
//! - **Directory types**: [`TagDef`] rows and the immutable [`TagDirectory`]
//! - **Sentinels**: the name/description used for unknown tags
//! - **Embedded defaults**: a built-in table covering the order tags
//!
//! The directory is built once and only read afterwards; where the rows
//! come from (a spreadsheet, a file, the embedded table) is the caller's
//! concern — `TagDef` is serde-derived so any deserialized row set works.

pub mod defaults;
pub mod directory;

pub use directory::{TagDef, TagDirectory, UNKNOWN_TAG_DESCRIPTION, UNKNOWN_TAG_NAME};
