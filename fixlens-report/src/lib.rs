/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! # FixLens Report
//!
//! Summary projection over decoded messages: one compact [`SummaryRow`]
//! per order, extracting a fixed set of well-known tags. A pure, total
//! view — missing fields become placeholders, never errors.

pub mod summary;

pub use summary::{COLUMNS, ExecutionStatus, SummaryRow, UNKNOWN, summarize};
