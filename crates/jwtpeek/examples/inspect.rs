//! Run with
//!
//! ```not_rust
//! cargo run --example inspect -- <token> [<token>...]
//! ```
//!
//! or pipe one token per line on stdin.

use std::io::BufRead;

use jwtpeek::TokenSession;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info,jwtpeek=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = std::io::stdin()
            .lock()
            .lines()
            .map_while(Result::ok)
            .filter(|line| !line.trim().is_empty())
            .collect();
    }

    let mut session = TokenSession::new();

    for raw in &inputs {
        let raw = raw.trim();
        let record = match session.input(raw) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("{}: {e}", abbreviate(raw));
                continue;
            }
        };

        println!("== {}", abbreviate(raw));
        println!(
            "header:\n{}",
            record.header_json().unwrap_or_else(|| "No Content".into())
        );
        println!(
            "payload:\n{}",
            record.payload_json().unwrap_or_else(|| "No Content".into())
        );
        for (claim, value) in record.payload_entries() {
            println!("  {claim:<12} {value}");
        }

        if let Err(e) = session.save_current() {
            tracing::warn!("could not save token: {e}");
        }
    }

    let now = session.now_millis();
    println!("== saved tokens");
    for (index, saved) in session.history().iter().enumerate() {
        let status = if saved.is_expired(now) { "expired" } else { "active" };
        println!(
            "{index:>3}  {}  {status:<7}  {}",
            saved.saved_at(),
            abbreviate(saved.record().original())
        );
    }
}

fn abbreviate(raw: &str) -> String {
    const MAX: usize = 40;
    match raw.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &raw[..end]),
        None => raw.to_string(),
    }
}
