//! sumtypes usage example
//!
//! Specializes `Outcome` for a small application: an HTTP-flavoured error
//! taxonomy, a division service and a user lookup.
//!
//! # Environment Variables
//!
//! - `SUMTYPES_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)
//! - `SUMTYPES_FLUSH_EPRINT=1` - Flush debug output immediately

mod errors;
mod service;

use sumtypes::{init_logging, kinfo, kwarn, Either3, Inject, Optional};

use service::Service;

// SUMTYPES_LOG_LEVEL=debug cargo run -p sumtypes-usage
fn main() {
    println!("=== sumtypes usage ===\n");
    init_logging();

    let svc = Service;

    for (i, j) in [(10, 2), (5, 0)] {
        let line = svc
            .divide(i, j)
            .inspect(
                |n| kinfo!("divide({}, {}) = {}", i, j, n),
                |errs| kwarn!("divide({}, {}) failed with {} error(s)", i, j, errs.len()),
            )
            .fold(
                |n| format!("{} / {} = {}", i, j, n),
                |errs| {
                    let lines: Vec<String> = errs.iter().map(ToString::to_string).collect();
                    format!("{} / {} failed: {}", i, j, lines.join("; "))
                },
            );
        println!("{}", line);
    }

    for (i, j) in [(1, 1), (1, 0)] {
        let status = svc
            .get_user(i, j)
            .fold(|()| 200, |e| e.error_type.status_code());
        println!("get_user({}, {}) -> HTTP {}", i, j, status);
    }

    let nickname: Optional<String> = Optional::none();
    let shown = nickname.map(|s| s.to_uppercase()).fold(|s| s, || "<none>".to_string());
    println!("nickname: {}", shown);

    let input: Either3<i64, String, bool> = Either3::inject(String::from("forty-two"));
    let kind = input.fold(|_| "number", |_| "text", |_| "flag");
    println!("input kind: {}", kind);

    println!("\n=== done ===");
}
