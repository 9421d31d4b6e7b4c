/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Embedded default tag table.
//!
//! Covers the envelope and order tags this codec reads or writes, so a
//! decoder is usable without loading an external reference table. Callers
//! with a fuller dataset can build their own [`TagDirectory`] from it.

use crate::directory::{TagDef, TagDirectory};

/// Tag, name, description rows for the order tags.
const ORDER_TAGS: &[(&str, &str, &str)] = &[
    ("8", "BeginString", "Identifies the beginning of a message and the protocol version"),
    ("9", "BodyLength", "Number of characters in the message body"),
    ("10", "CheckSum", "Three-digit modulo-256 checksum terminating the message"),
    ("11", "ClOrdID", "Unique identifier for the order assigned by the client"),
    ("21", "HandlInst", "Instructions for order handling on the broker side"),
    ("34", "MsgSeqNum", "Integer message sequence number within the session"),
    ("35", "MsgType", "Defines the message type (D = New Order Single)"),
    ("38", "OrderQty", "Quantity of the security ordered"),
    ("39", "OrdStatus", "Identifies the current status of the order"),
    ("40", "OrdType", "Order type (1 = Market, 2 = Limit)"),
    ("44", "Price", "Price per unit for limit orders"),
    ("49", "SenderCompID", "Identifier of the message sender"),
    ("52", "SendingTime", "UTC time of message transmission"),
    ("54", "Side", "Side of the order (1 = Buy, 2 = Sell)"),
    ("55", "Symbol", "Ticker symbol of the security"),
    ("56", "TargetCompID", "Identifier of the message receiver"),
    ("60", "TransactTime", "UTC time of order initiation"),
];

/// Builds the embedded directory of order tags.
#[must_use]
pub fn order_tags() -> TagDirectory {
    ORDER_TAGS
        .iter()
        .map(|&(tag, name, description)| TagDef::new(tag, name, description))
        .collect()
}
