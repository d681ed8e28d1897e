//! package.json name validation

use regex::Regex;
use std::sync::LazyLock;

/// Used when normalization leaves nothing behind
pub const FALLBACK_PACKAGE_NAME: &str = "project";

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name pattern is valid")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static ILLEGAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\-~]+").expect("illegal character pattern is valid"));

/// Whether `name` is usable as the `name` field of package.json
pub fn is_valid_package_name(name: &str) -> bool {
    VALID_NAME.is_match(name)
}

/// Turn an arbitrary project name into a valid package name.
/// Idempotent, and the result always passes [`is_valid_package_name`].
pub fn to_valid_package_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lowered, "-");
    let stripped = hyphenated
        .strip_prefix(['.', '_'])
        .unwrap_or(&*hyphenated);
    let normalized = ILLEGAL.replace_all(stripped, "-").into_owned();

    if normalized.is_empty() {
        FALLBACK_PACKAGE_NAME.to_string()
    } else {
        normalized
    }
}
