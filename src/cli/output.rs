//! Output helpers honoring the global `--json` / `--quiet` flags.
//!
//! The flags are published as environment variables by `main` so any module
//! can check them without threading them through call signatures.

/// Machine-readable JSON output requested.
pub fn is_json() -> bool {
    std::env::var("LEXISCOPE_JSON").is_ok()
}

/// Non-essential output suppressed.
pub fn is_quiet() -> bool {
    std::env::var("LEXISCOPE_QUIET").is_ok()
}

/// Print a JSON value to stdout, pretty-printed.
pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}
