/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! New Order Single encoder.
//!
//! Builds the ordered field list for one order, joins it with SOH, then
//! patches the BodyLength and Checksum placeholders after the fact. Two
//! quirks are reproduced deliberately for compatibility with existing
//! encoded output (see DESIGN.md):
//! - body length is the character count of the substring after the first
//!   `35=D<SOH>`, minus one, rather than the standard FIX body length;
//! - the checksum input still contains the literal `10=XXX` placeholder.

use crate::SOH;
use crate::checksum::checksum;
use fixlens_core::tag;
use fixlens_core::types::{CompId, OrdType, SeqNum, Side, Timestamp};
use rust_decimal::Decimal;

/// Protocol version written as BeginString (tag 8).
pub const BEGIN_STRING: &str = "FIX.4.4";

/// MsgType value for New Order Single (tag 35).
pub const MSG_TYPE_NEW_ORDER_SINGLE: &str = "D";

/// Placeholder patched into BodyLength and Checksum during construction.
const PLACEHOLDER: &str = "XXX";

/// Position of the MsgType field in the ordered field list.
const MSG_TYPE_INDEX: usize = 2;

/// Encoder input: one outbound order.
///
/// Fields are typed so that invalid states (a zero sequence number, an
/// over-long CompID, a side outside buy/sell) cannot reach the encoder;
/// [`encode`] itself is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    /// Client order identifier (ClOrdID, tag 11).
    pub order_id: String,
    /// Sender identifier (SenderCompID, tag 49).
    pub client_id: CompId,
    /// Receiver identifier (TargetCompID, tag 56).
    pub broker_id: CompId,
    /// Message sequence number (MsgSeqNum, tag 34).
    pub seq_num: SeqNum,
    /// Security identifier (Symbol, tag 55).
    pub symbol: String,
    /// Order side (tag 54).
    pub side: Side,
    /// Order quantity (tag 38).
    pub quantity: u64,
    /// Limit price (tag 44). Absent or non-positive means a market order.
    pub price: Option<Decimal>,
}

impl OrderSpec {
    /// Returns the limit price when this is a limit order.
    ///
    /// A missing or non-positive price means a market order.
    #[must_use]
    pub fn limit_price(&self) -> Option<Decimal> {
        self.price.filter(|price| *price > Decimal::ZERO)
    }

    /// Returns the order type derived from the price.
    #[must_use]
    pub fn ord_type(&self) -> OrdType {
        if self.limit_price().is_some() {
            OrdType::Limit
        } else {
            OrdType::Market
        }
    }
}

/// Encodes one order as a complete message string.
///
/// Fields appear in the fixed protocol order, joined by SOH with a
/// trailing SOH. BodyLength (9) and Checksum (10) hold final computed
/// values. SendingTime (52) and TransactTime (60) are independent clock
/// reads and may differ by a second on an unlucky boundary.
#[must_use]
pub fn encode(spec: &OrderSpec) -> String {
    let mut num = itoa::Buffer::new();
    let mut fields: Vec<String> = Vec::with_capacity(17);

    fields.push(format!("{}={BEGIN_STRING}", tag::BEGIN_STRING));
    fields.push(format!("{}={PLACEHOLDER}", tag::BODY_LENGTH));
    fields.push(format!("{}={MSG_TYPE_NEW_ORDER_SINGLE}", tag::MSG_TYPE));
    fields.push(format!("{}={}", tag::SENDER_COMP_ID, spec.client_id));
    fields.push(format!("{}={}", tag::TARGET_COMP_ID, spec.broker_id));
    fields.push(format!("{}={}", tag::MSG_SEQ_NUM, num.format(spec.seq_num.value())));
    fields.push(format!("{}={}", tag::SENDING_TIME, Timestamp::now().format_seconds()));
    fields.push(format!("{}={}", tag::CL_ORD_ID, spec.order_id));
    fields.push(format!("{}=1", tag::HANDL_INST));
    fields.push(format!("{}={}", tag::SYMBOL, spec.symbol));
    fields.push(format!("{}={}", tag::SIDE, spec.side.as_char()));
    fields.push(format!("{}={}", tag::ORDER_QTY, num.format(spec.quantity)));
    match spec.limit_price() {
        Some(price) => {
            fields.push(format!("{}={}", tag::ORD_TYPE, OrdType::Limit.as_char()));
            fields.push(format!("{}={price}", tag::PRICE));
        }
        None => fields.push(format!("{}={}", tag::ORD_TYPE, OrdType::Market.as_char())),
    }
    fields.push(format!("{}={}", tag::TRANSACT_TIME, Timestamp::now().format_seconds()));
    fields.push(format!("{}={PLACEHOLDER}", tag::CHECKSUM));

    // Body length: characters after the MsgType field, trailing separator
    // included, minus one. Computed from the field list, which is exactly
    // the substring following the first `35=D<SOH>`.
    let body_length = fields[MSG_TYPE_INDEX + 1..]
        .iter()
        .map(|field| field.chars().count() + 1)
        .sum::<usize>()
        - 1;

    let mut message =
        String::with_capacity(fields.iter().map(|field| field.len() + 1).sum::<usize>());
    for field in &fields {
        message.push_str(field);
        message.push(SOH);
    }

    // The BodyLength field precedes every free-form value, so the first
    // occurrence of its placeholder text is always the genuine field.
    let mut message = message.replacen(
        &format!("{}={PLACEHOLDER}", tag::BODY_LENGTH),
        &format!("{}={}", tag::BODY_LENGTH, num.format(body_length)),
        1,
    );

    // The checksum input still contains the unresolved `10=XXX` text.
    // The checksum field is the final one, so it is patched in place at
    // the tail; a value that happens to contain the placeholder text is
    // left untouched.
    let value = checksum(&message);
    let tail = format!("{}={PLACEHOLDER}{SOH}", tag::CHECKSUM);
    message.truncate(message.len() - tail.len());
    message.push_str(&format!("{}={value}", tag::CHECKSUM));
    message.push(SOH);
    message
}

/// Replaces the wire separator with `|` for human display.
///
/// Display-only: applying this before length or checksum computation
/// would change both values.
#[must_use]
pub fn for_display(message: &str) -> String {
    message.replace(SOH, "|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::checksum;

    fn market_spec() -> OrderSpec {
        OrderSpec {
            order_id: "12345".to_owned(),
            client_id: CompId::new("CLIENT1").unwrap(),
            broker_id: CompId::new("BROKER1").unwrap(),
            seq_num: SeqNum::new(1),
            symbol: "AAPL".to_owned(),
            side: Side::Buy,
            quantity: 100,
            price: None,
        }
    }

    fn field_value<'a>(message: &'a str, tag: &str) -> Option<&'a str> {
        message
            .split(SOH)
            .filter_map(|token| token.split_once('='))
            .find(|(t, _)| *t == tag)
            .map(|(_, value)| value)
    }

    #[test]
    fn test_market_order_fields() {
        let message = encode(&market_spec());
        assert_eq!(field_value(&message, "40"), Some("1"));
        assert_eq!(field_value(&message, "44"), None);
        assert_eq!(field_value(&message, "54"), Some("1"));
        assert_eq!(field_value(&message, "38"), Some("100"));
    }

    #[test]
    fn test_limit_order_fields() {
        let mut spec = market_spec();
        spec.price = Some(Decimal::new(15050, 2));
        let message = encode(&spec);
        assert_eq!(field_value(&message, "40"), Some("2"));
        assert_eq!(field_value(&message, "44"), Some("150.50"));
    }

    #[test]
    fn test_non_positive_price_is_market() {
        let mut spec = market_spec();
        spec.price = Some(Decimal::ZERO);
        assert_eq!(spec.ord_type(), OrdType::Market);
        spec.price = Some(Decimal::new(-1, 0));
        assert_eq!(spec.ord_type(), OrdType::Market);
        let message = encode(&spec);
        assert_eq!(field_value(&message, "40"), Some("1"));
        assert_eq!(field_value(&message, "44"), None);
    }

    #[test]
    fn test_field_order_fixed() {
        let message = encode(&market_spec());
        let tags: Vec<&str> = message
            .split(SOH)
            .filter_map(|token| token.split_once('='))
            .map(|(tag, _)| tag)
            .collect();
        assert_eq!(
            tags,
            ["8", "9", "35", "49", "56", "34", "52", "11", "21", "55", "54", "38", "40", "60", "10"]
        );
    }

    #[test]
    fn test_trailing_separator() {
        let message = encode(&market_spec());
        assert!(message.ends_with(SOH));
    }

    #[test]
    fn test_body_length_matches_substring_rule() {
        let message = encode(&market_spec());
        let marker = format!("35=D{SOH}");
        let start = message.find(&marker).unwrap() + marker.len();
        let claimed: usize = field_value(&message, "9").unwrap().parse().unwrap();
        assert_eq!(claimed, message[start..].chars().count() - 1);
    }

    #[test]
    fn test_checksum_computed_over_placeholder() {
        let message = encode(&market_spec());
        let declared = field_value(&message, "10").unwrap().to_owned();
        // Rebuild the checksum pre-image: the final checksum field back in
        // its placeholder form.
        let pre_image = message.replacen(&format!("10={declared}"), "10=XXX", 1);
        assert_eq!(checksum(&pre_image), declared);
    }

    #[test]
    fn test_placeholder_text_in_value_not_patched() {
        let mut spec = market_spec();
        spec.order_id = "10=XXX".to_owned();
        let message = encode(&spec);

        // The adversarial ClOrdID value survives untouched and the final
        // checksum field still gets its computed digits.
        assert_eq!(field_value(&message, "11"), Some("10=XXX"));
        let declared = field_value(&message, "10").unwrap();
        assert_eq!(declared.len(), 3);
        assert!(declared.chars().all(|c| c.is_ascii_digit()));
        assert!(!message.ends_with("10=XXX\x01"));

        // The declared digits match the placeholder pre-image.
        let pre_image = format!("{}10=XXX\x01", &message[..message.len() - 7]);
        assert_eq!(checksum(&pre_image), declared);
    }

    #[test]
    fn test_timestamps_second_precision() {
        let message = encode(&market_spec());
        for tag in ["52", "60"] {
            let value = field_value(&message, tag).unwrap();
            assert_eq!(value.len(), 17);
            assert_eq!(&value[8..9], "-");
        }
    }

    #[test]
    fn test_for_display() {
        let message = encode(&market_spec());
        let display = for_display(&message);
        assert!(!display.contains(SOH));
        assert!(display.starts_with("8=FIX.4.4|"));
        assert!(display.ends_with('|'));
    }
}
