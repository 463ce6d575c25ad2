//! # Display Formatting
//!
//! Address shortening and USD value rendering.
//!
//! ```rust
//! use lib_utils::format::format_address;
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(format_address(address, 4, 4), "8W6Q...JKAL");
//! ```

/// Show the first `prefix_len` and last `suffix_len` characters of an address.
///
/// Addresses too short to shorten are returned as-is.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    shorten(address, prefix_len, suffix_len, "...")
}

/// Wallet button label: first five and last five characters joined by an ellipsis.
pub fn short_address(address: &str) -> String {
    shorten(address, 5, 5, "\u{2026}")
}

/// Placeholder symbol for a mint without metadata.
pub fn mint_placeholder(mint: &str) -> String {
    let head: String = mint.chars().take(8).collect();
    format!("{head}...")
}

/// `$1234.50` for a known value, `N/A` otherwise.
pub fn format_usd(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => "N/A".to_string(),
    }
}

fn shorten(address: &str, prefix_len: usize, suffix_len: usize, sep: &str) -> String {
    let len = address.chars().count();
    if len <= prefix_len + suffix_len {
        return address.to_string();
    }
    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(len - suffix_len).collect();
    format!("{prefix}{sep}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 4, 4), "8W6Q...JKAL");
        assert_eq!(format_address(ADDR, 2, 2), "8W...AL");
        assert_eq!(format_address("short", 4, 4), "short");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address(ADDR), "8W6Qg\u{2026}uJKAL");
        assert_eq!(short_address("tiny"), "tiny");
    }

    #[test]
    fn test_mint_placeholder() {
        assert_eq!(mint_placeholder(ADDR), "8W6Qgink...");
        assert_eq!(mint_placeholder("abc"), "abc...");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Some(150.0)), "$150.00");
        assert_eq!(format_usd(Some(12.345678)), "$12.35");
        assert_eq!(format_usd(None), "N/A");
    }
}
