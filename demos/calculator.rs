// ============================================================================
// Calculator Example
// ============================================================================
//
// Reads `<a> <op> <b>` lines from stdin and prints the result.
// Operators: + - * / % (flooring), tdiv trem (truncating), cmp.
//
//   echo "-7 / 2" | cargo run --example calculator --features logging

use decimal_bigint::prelude::*;
use std::io::{self, BufRead, Write};

fn evaluate(a: &BigInt, op: &str, b: &BigInt) -> Result<String, String> {
    let value = match op {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" => a.checked_div_floor(b).map_err(|e| e.to_string())?,
        "%" => a.checked_rem_floor(b).map_err(|e| e.to_string())?,
        "tdiv" => a.checked_div_trunc(b).map_err(|e| e.to_string())?,
        "trem" => a.checked_rem_trunc(b).map_err(|e| e.to_string())?,
        "cmp" => return Ok(format!("{:?}", a.cmp(b))),
        other => return Err(format!("unknown operator {:?}", other)),
    };
    Ok(value.to_string())
}

fn main() -> io::Result<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [a, op, b] = parts.as_slice() else {
            if !parts.is_empty() {
                writeln!(out, "error: expected `<a> <op> <b>`")?;
            }
            continue;
        };

        let result = match (a.parse::<BigInt>(), b.parse::<BigInt>()) {
            (Ok(a), Ok(b)) => evaluate(&a, op, &b),
            (Err(e), _) | (_, Err(e)) => Err(e.to_string()),
        };

        match result {
            Ok(value) => writeln!(out, "{}", value)?,
            Err(message) => writeln!(out, "error: {}", message)?,
        }
    }

    Ok(())
}
