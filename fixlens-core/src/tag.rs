/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Well-known tag identifiers.
//!
//! Tags are text in this codec: the wire format carries them as decimal
//! strings and the tag directory's match key is exact string equality, so
//! the constants are `&str` rather than integers.

/// BeginString (8).
pub const BEGIN_STRING: &str = "8";
/// BodyLength (9).
pub const BODY_LENGTH: &str = "9";
/// Checksum (10).
pub const CHECKSUM: &str = "10";
/// ClOrdID (11).
pub const CL_ORD_ID: &str = "11";
/// HandlInst (21).
pub const HANDL_INST: &str = "21";
/// MsgSeqNum (34).
pub const MSG_SEQ_NUM: &str = "34";
/// MsgType (35).
pub const MSG_TYPE: &str = "35";
/// OrderQty (38).
pub const ORDER_QTY: &str = "38";
/// OrdStatus (39).
pub const ORD_STATUS: &str = "39";
/// OrdType (40).
pub const ORD_TYPE: &str = "40";
/// Price (44).
pub const PRICE: &str = "44";
/// SenderCompID (49).
pub const SENDER_COMP_ID: &str = "49";
/// SendingTime (52).
pub const SENDING_TIME: &str = "52";
/// Side (54).
pub const SIDE: &str = "54";
/// Symbol (55).
pub const SYMBOL: &str = "55";
/// TargetCompID (56).
pub const TARGET_COMP_ID: &str = "56";
/// TransactTime (60).
pub const TRANSACT_TIME: &str = "60";
