/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Per-order summary rows.
//!
//! Each [`SummaryRow`] is a pure projection of one [`DecodedMessage`].
//! Extraction builds a tag→value map record by record, so a repeated tag
//! keeps its last occurrence; this mirrors the behavior of the system
//! this codec is compatible with and is pinned by tests (the codec-level
//! `DecodedMessage::first` lookup is first-occurrence — see DESIGN.md).

use fixlens_core::message::DecodedMessage;
use fixlens_core::tag;
use fixlens_core::types::{OrdType, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Placeholder for summary fields whose source tag is missing.
pub const UNKNOWN: &str = "Unknown";

/// Column headers for rendering summary rows as a table.
pub const COLUMNS: [&str; 8] = [
    "Order ID",
    "Broker ID",
    "Client ID",
    "Stock/Security",
    "Quantity",
    "Buy/Sell",
    "Order Type",
    "Executed",
];

/// Whether an order has been executed (presence of OrdStatus, tag 39).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// Tag 39 present, whatever its value.
    Executed,
    /// Tag 39 absent.
    NotExecuted,
}

impl ExecutionStatus {
    /// Returns the human-readable label for this status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Executed => "Executed",
            Self::NotExecuted => "Not Executed",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compact per-order summary projected from one decoded message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// ClOrdID (11), or [`UNKNOWN`].
    pub order_id: String,
    /// TargetCompID (56), or [`UNKNOWN`].
    pub broker_id: String,
    /// SenderCompID (49), or [`UNKNOWN`].
    pub client_id: String,
    /// Symbol (55), or [`UNKNOWN`].
    pub symbol: String,
    /// OrderQty (38) kept as text, or [`UNKNOWN`].
    pub quantity: String,
    /// Side (54): `"1"` is Buy, anything else (missing included) is Sell.
    pub side: Side,
    /// OrdType (40): `"1"` is Market, anything else (missing included) is Limit.
    pub order_type: OrdType,
    /// Execution status from the presence of OrdStatus (39).
    pub executed: ExecutionStatus,
}

impl SummaryRow {
    /// Projects one decoded message into a summary row.
    ///
    /// Never fails; an empty message yields a row of placeholders with
    /// the default Sell / Limit / Not Executed readings.
    #[must_use]
    pub fn from_message(message: &DecodedMessage) -> Self {
        let mut values: HashMap<&str, &str> = HashMap::new();
        for field in message {
            // Direct assignment per record: a repeated tag overwrites.
            values.insert(field.tag.as_str(), field.value.as_str());
        }
        let text = |tag: &str| values.get(tag).map_or_else(|| UNKNOWN.to_owned(), |v| (*v).to_owned());

        Self {
            order_id: text(tag::CL_ORD_ID),
            broker_id: text(tag::TARGET_COMP_ID),
            client_id: text(tag::SENDER_COMP_ID),
            symbol: text(tag::SYMBOL),
            quantity: text(tag::ORDER_QTY),
            side: match values.get(tag::SIDE) {
                Some(&"1") => Side::Buy,
                _ => Side::Sell,
            },
            order_type: match values.get(tag::ORD_TYPE) {
                Some(&"1") => OrdType::Market,
                _ => OrdType::Limit,
            },
            executed: if values.contains_key(tag::ORD_STATUS) {
                ExecutionStatus::Executed
            } else {
                ExecutionStatus::NotExecuted
            },
        }
    }
}

impl fmt::Display for SummaryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {} | {} | {}",
            self.order_id,
            self.broker_id,
            self.client_id,
            self.symbol,
            self.quantity,
            self.side.label(),
            self.order_type.label(),
            self.executed,
        )
    }
}

/// Summarizes a sequence of decoded messages, one row each, order preserved.
#[must_use]
pub fn summarize(messages: &[DecodedMessage]) -> Vec<SummaryRow> {
    messages.iter().map(SummaryRow::from_message).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlens_core::field::FieldRecord;

    fn message(pairs: &[(&str, &str)]) -> DecodedMessage {
        pairs
            .iter()
            .map(|&(tag, value)| FieldRecord::new(tag, "Name", value, "Description"))
            .collect()
    }

    #[test]
    fn test_full_extraction() {
        let msg = message(&[
            ("11", "ORD1"),
            ("56", "BROKER1"),
            ("49", "CLIENT1"),
            ("55", "AAPL"),
            ("38", "10"),
            ("54", "1"),
            ("40", "2"),
            ("39", "0"),
        ]);
        let row = SummaryRow::from_message(&msg);
        assert_eq!(row.order_id, "ORD1");
        assert_eq!(row.broker_id, "BROKER1");
        assert_eq!(row.client_id, "CLIENT1");
        assert_eq!(row.symbol, "AAPL");
        assert_eq!(row.quantity, "10");
        assert_eq!(row.side, Side::Buy);
        assert_eq!(row.order_type, OrdType::Limit);
        assert_eq!(row.executed, ExecutionStatus::Executed);
    }

    #[test]
    fn test_missing_tags_are_placeholders() {
        let row = SummaryRow::from_message(&DecodedMessage::new());
        assert_eq!(row.order_id, UNKNOWN);
        assert_eq!(row.broker_id, UNKNOWN);
        assert_eq!(row.client_id, UNKNOWN);
        assert_eq!(row.symbol, UNKNOWN);
        assert_eq!(row.quantity, UNKNOWN);
        // Missing side/type read as the non-"1" branch.
        assert_eq!(row.side, Side::Sell);
        assert_eq!(row.order_type, OrdType::Limit);
        assert_eq!(row.executed, ExecutionStatus::NotExecuted);
    }

    #[test]
    fn test_malformed_side_maps_to_sell() {
        let row = SummaryRow::from_message(&message(&[("54", "buy")]));
        assert_eq!(row.side, Side::Sell);
    }

    #[test]
    fn test_executed_ignores_value() {
        let row = SummaryRow::from_message(&message(&[("39", "")]));
        assert_eq!(row.executed, ExecutionStatus::Executed);
    }

    #[test]
    fn test_repeated_tag_last_wins() {
        let row = SummaryRow::from_message(&message(&[("54", "1"), ("54", "2")]));
        assert_eq!(row.side, Side::Sell);
    }

    #[test]
    fn test_summarize_preserves_order_and_is_idempotent() {
        let messages = vec![message(&[("11", "A")]), message(&[("11", "B")])];
        let first = summarize(&messages);
        let second = summarize(&messages);
        assert_eq!(first[0].order_id, "A");
        assert_eq!(first[1].order_id, "B");
        assert_eq!(first, second);
    }

    #[test]
    fn test_row_display() {
        let row = SummaryRow::from_message(&message(&[("11", "ORD1"), ("54", "1"), ("40", "1")]));
        let rendered = row.to_string();
        assert!(rendered.starts_with("ORD1 | "));
        assert!(rendered.contains("Buy"));
        assert!(rendered.contains("Market"));
        assert!(rendered.ends_with("Not Executed"));
    }
}
