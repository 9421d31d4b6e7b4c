/******************************************************************************
   Author: FixLens Developers
   Email: dev@fixlens.dev
   Date: 25/8/26
******************************************************************************/

//! Interprets a pasted buffer of concatenated order messages.
//!
//! Reads the buffer from the first argument (or uses a built-in sample),
//! splits it into messages, decodes each against the embedded tag
//! directory, and prints the per-order summary followed by the field
//! breakdown of the first order.
//!
//! Run with: `cargo run --example interpret_orders [buffer]`

use fixlens::prelude::*;
use fixlens::report::COLUMNS;
use tracing::{info, warn};

const SAMPLE: &str = "8=FIX.4.4|9=104|35=D|49=CLIENT1|56=BROKER1|34=1|52=20240101-09:30:00|\
11=ORD1|21=1|55=AAPL|54=1|38=100|40=1|60=20240101-09:30:00|10=143|\
8=FIX.4.4|9=112|35=D|49=CLIENT2|56=BROKER1|34=2|52=20240101-09:31:00|\
11=ORD2|21=1|55=MSFT|54=2|38=50|40=2|44=410.25|60=20240101-09:31:00|10=188|";

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

    let buffer = std::env::args().nth(1).unwrap_or_else(|| SAMPLE.to_owned());

    let directory = fixlens::dictionary::defaults::order_tags();
    let decoder = Decoder::new(&directory);
    let decoded = decoder.decode_all(&buffer, Separator::Auto);
    let rows = summarize(&decoded);

    if rows.iter().all(|row| row.order_id == "Unknown") {
        warn!("could not decode any orders from the buffer, check its format");
    }
    info!(orders = rows.len(), "decoded buffer");

    println!("{}", COLUMNS.join(" | "));
    for row in &rows {
        println!("{row}");
    }

    if let Some(first) = decoded.first() {
        println!("\nDetails for {}:", rows[0].order_id);
        for field in first {
            println!("  {:>4} {:<14} {:<20} {}", field.tag, field.name, field.value, field.description);
        }
    }
}
