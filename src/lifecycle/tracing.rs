//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber. The filter comes from `RUST_LOG`
//! and falls back to `info`. Module paths are hidden (`with_target(false)`); events carry
//! `table_id` and `entity_type` fields instead.
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show forwarded commands and client spans
//! RUST_LOG=debug cargo run
//!
//! # One JSON object per line
//! cargo run -- --log-format json
//! ```
//!
//! A create with `RUST_LOG=debug` reads like:
//!
//! ```text
//! DEBUG create: Sending request table_id=TableId(1) item=NewOrderItem { id: "1", name: "Pizza", quantity: 1 }
//! INFO Worker created entity_type="Table" entity_id=1
//! DEBUG Forward entity_type="Table" entity_id=1 command=AddItem(..)
//! INFO Order received table_id=1 request=NewOrderItem { .. } size=1
//! ```

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // entity_type and table_id identify the source

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
