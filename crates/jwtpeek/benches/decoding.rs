//! Token decoding benchmarks
//!
//! Measures decoding throughput for tokens of different payload sizes,
//! for malformed input, and for a session saving into a growing history.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use jwtpeek::{ManualClock, TokenSession, decode};
use std::hint::black_box;

/// Helper to generate test tokens of different sizes
mod helpers {
    use super::*;

    pub fn generate_token_with_payload_size(payload_size: usize) -> String {
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;

        let mut payload =
            r#"{"sub":"user123","iss":"https://example.com","iat":1516239022,"exp":9999999999"#
                .to_string();
        let extra_size = payload_size.saturating_sub(payload.len());
        if extra_size > 0 {
            payload.push_str(",\"data\":\"");
            payload.push_str(&"x".repeat(extra_size.saturating_sub(10)));
            payload.push_str("\"}");
        } else {
            payload.push('}');
        }

        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode([0x5a; 32])
        )
    }
}

fn bench_decode_by_size(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let sizes = vec![64, 256, 1024, 4096, 16384];

    let mut group = c.benchmark_group("decode_by_size");

    for size in sizes {
        let token = generate_token_with_payload_size(size);
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{}", size), |b| {
            b.iter(|| decode(black_box(&token)));
        });
    }

    group.finish();
}

fn bench_decode_invalid(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_invalid");

    group.bench_function("missing_parts", |b| {
        let invalid = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
        b.iter(|| decode(black_box(invalid)));
    });

    group.bench_function("invalid_base64", |b| {
        let invalid = "invalid.base64.signature!!!";
        b.iter(|| decode(black_box(invalid)));
    });

    group.bench_function("invalid_json", |b| {
        let invalid = "eyJpbnZhbGlkX2pzb24.Invalid.Signature";
        b.iter(|| decode(black_box(invalid)));
    });

    group.finish();
}

fn bench_session_history(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let token = generate_token_with_payload_size(256);
    let mut group = c.benchmark_group("session");

    for saved in [10, 100, 1000] {
        group.bench_function(format!("save_into_{}", saved), |b| {
            b.iter_batched(
                || {
                    let clock = ManualClock::new(0);
                    let mut session = TokenSession::with_clock(clock.clone());
                    for _ in 0..saved {
                        clock.advance(1);
                        session.commit(session.decode(&token));
                    }
                    clock.set(saved / 2);
                    session
                },
                |mut session| {
                    session.input(black_box(&token)).ok();
                    session.save_current().map(|saved| saved.saved_at()).ok()
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_by_size,
    bench_decode_invalid,
    bench_session_history
);
criterion_main!(benches);
