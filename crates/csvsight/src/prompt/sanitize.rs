//! File-name sanitization for prompt embedding.
//!
//! The file name is attacker-controlled and gets interpolated into the
//! analysis prompt, so everything outside a conservative alphabet is
//! squashed to `_` before embedding. The original name is untouched
//! elsewhere; only the prompt sees the sanitized form.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9._-]").expect("sanitizer pattern is valid")
});

/// Replace every character outside `[A-Za-z0-9._-]` with `_`, then cap
/// the result at `max_len` characters.
pub fn sanitize_file_name(name: &str, max_len: usize) -> String {
    let replaced = DISALLOWED.replace_all(name, "_");
    replaced.chars().take(max_len).collect()
}
