//! Input checks for CLI arguments.
//!
//! The library accepts anything and quietly drops what it cannot use; the
//! CLI is stricter so that a typo is reported instead of ignored.

use anyhow::{bail, Result};
use gbsearch_api::{Filter, OrderBy, PrintType, Projection, SearchCategory};

pub const MAX_TERM_LENGTH: usize = 200;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String> {
    if input.len() > max_len {
        bail!("input exceeds maximum length of {} bytes", max_len);
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        bail!("input is empty after removing control characters");
    }
    Ok(sanitized)
}

pub fn validate_term(input: &str) -> Result<String> {
    sanitize_text(input, MAX_TERM_LENGTH)
}

/// Accepts two ASCII letters and returns them lowercased.
pub fn validate_code(input: &str, what: &str) -> Result<String> {
    let code = input.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("invalid {} code '{}': expected two letters, e.g. 'en'", what, input);
    }
    Ok(code.to_ascii_lowercase())
}

pub fn validate_category(input: &str) -> Result<SearchCategory> {
    match input.trim().to_lowercase().parse::<SearchCategory>() {
        Ok(category) => Ok(category),
        Err(()) => bail!(
            "unknown search field '{}': expected title, author, publisher, subject, isbn, lccn, oclc or any",
            input
        ),
    }
}

pub fn validate_filter(input: &str) -> Result<Filter> {
    match input.trim().to_lowercase().parse::<Filter>() {
        Ok(filter) => Ok(filter),
        Err(()) => bail!(
            "unknown filter '{}': expected partial, full, free-ebooks, paid-ebooks or ebooks",
            input
        ),
    }
}

pub fn validate_print_type(input: &str) -> Result<PrintType> {
    match input.trim().to_lowercase().parse::<PrintType>() {
        Ok(print_type) => Ok(print_type),
        Err(()) => bail!(
            "unknown print type '{}': expected all, books or magazines",
            input
        ),
    }
}

pub fn validate_projection(input: &str) -> Result<Projection> {
    match input.trim().to_lowercase().parse::<Projection>() {
        Ok(projection) => Ok(projection),
        Err(()) => bail!("unknown projection '{}': expected full or lite", input),
    }
}

pub fn validate_order_by(input: &str) -> Result<OrderBy> {
    match input.trim().to_lowercase().parse::<OrderBy>() {
        Ok(order_by) => Ok(order_by),
        Err(()) => bail!("unknown sort order '{}': expected relevance or newest", input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_text("  go\tlang\n ", 50).unwrap(), "golang");
        assert!(sanitize_text("\n\t", 50).is_err());
        assert!(sanitize_text(&"x".repeat(51), 50).is_err());
    }

    #[test]
    fn test_validate_code() {
        assert_eq!(validate_code("EN", "language").unwrap(), "en");
        assert_eq!(validate_code(" us ", "country").unwrap(), "us");
        assert!(validate_code("eng", "language").is_err());
        assert!(validate_code("e1", "language").is_err());
        assert!(validate_code("", "country").is_err());
    }

    #[test]
    fn test_validate_enums_case_insensitive() {
        assert_eq!(validate_category("Author").unwrap(), SearchCategory::Author);
        assert_eq!(validate_category("any").unwrap(), SearchCategory::Unrestricted);
        assert_eq!(validate_filter("FREE-EBOOKS").unwrap(), Filter::FreeEbooks);
        assert_eq!(validate_print_type("Books").unwrap(), PrintType::Books);
        assert_eq!(validate_projection("lite").unwrap(), Projection::Lite);
        assert_eq!(validate_order_by("Newest").unwrap(), OrderBy::Newest);
    }

    #[test]
    fn test_validate_enums_reject_unknown() {
        let err = validate_filter("cheap").unwrap_err();
        assert!(err.to_string().contains("unknown filter 'cheap'"));
        assert!(validate_category("keyword").is_err());
        assert!(validate_print_type("comics").is_err());
        assert!(validate_projection("medium").is_err());
        assert!(validate_order_by("oldest").is_err());
    }
}
