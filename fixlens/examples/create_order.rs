/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Builds two order messages and prints them in display form.
//!
//! Run with: `cargo run --example create_order`

use fixlens::prelude::*;
use rust_decimal::Decimal;
use tracing::info;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() {
    init_tracing();

    let market = OrderSpec {
        order_id: "12345".to_owned(),
        client_id: CompId::new("CLIENT1").unwrap(),
        broker_id: CompId::new("BROKER1").unwrap(),
        seq_num: SeqNum::new(1),
        symbol: "AAPL".to_owned(),
        side: Side::Buy,
        quantity: 100,
        price: None,
    };
    let mut limit = market.clone();
    limit.order_id = "12346".to_owned();
    limit.seq_num = market.seq_num.next();
    limit.side = Side::Sell;
    limit.price = Some(Decimal::new(19950, 2));

    for spec in [market, limit] {
        let message = encode(&spec);
        info!(
            order_id = %spec.order_id,
            ord_type = spec.ord_type().label(),
            bytes = message.len(),
            "encoded order"
        );
        println!("{}", for_display(&message));
    }
}
