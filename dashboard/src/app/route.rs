//! # Routes
//!
//! The dashboard's screens are addressed by path, the same paths the nav bar
//! links and the search box produce.
//!
//! | Path                  | Route                          |
//! |-----------------------|--------------------------------|
//! | `/exchange`           | [`Route::Exchange`]            |
//! | `/portfolio`          | [`Route::Portfolio`]           |
//! | `/portfolio/:address` | [`Route::PortfolioAddress`]    |
//! | `/tokens/:address`    | [`Route::Token`]               |
//!
//! Anything else resolves to `/exchange`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Exchange,
    /// Holdings of the connected wallet.
    Portfolio,
    /// Watch-only holdings of an arbitrary address.
    PortfolioAddress(String),
    Token(String),
}

impl Route {
    /// Parse a path. Unknown paths resolve to [`Route::Exchange`].
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path.trim().split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["exchange"] => Route::Exchange,
            ["portfolio"] => Route::Portfolio,
            ["portfolio", address] => Route::PortfolioAddress(address.to_string()),
            ["tokens", address] => Route::Token(address.to_string()),
            _ => Route::Exchange,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Exchange => "/exchange".to_string(),
            Route::Portfolio => "/portfolio".to_string(),
            Route::PortfolioAddress(address) => format!("/portfolio/{address}"),
            Route::Token(address) => format!("/tokens/{address}"),
        }
    }

    /// Route for the search box input.
    pub fn token_search(input: &str) -> Option<Self> {
        let address = input.trim();
        (!address.is_empty()).then(|| Route::Token(address.to_string()))
    }

    pub fn is_portfolio(&self) -> bool {
        matches!(self, Route::Portfolio | Route::PortfolioAddress(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/exchange"), Route::Exchange);
        assert_eq!(Route::parse("/portfolio"), Route::Portfolio);
        assert_eq!(Route::parse("/portfolio/abc"), Route::PortfolioAddress("abc".into()));
        assert_eq!(Route::parse("/tokens/So11111111111111111111111111111111111111112/"), Route::Token("So11111111111111111111111111111111111111112".into()));
    }

    #[test]
    fn test_unknown_paths_fall_back_to_exchange() {
        assert_eq!(Route::parse("/"), Route::Exchange);
        assert_eq!(Route::parse("/settings"), Route::Exchange);
        assert_eq!(Route::parse("/tokens"), Route::Exchange);
        assert_eq!(Route::parse("/portfolio/a/b"), Route::Exchange);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Exchange, Route::Portfolio, Route::PortfolioAddress("x".into()), Route::Token("y".into())] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_token_search() {
        assert_eq!(Route::token_search("  mint  "), Some(Route::Token("mint".into())));
        assert_eq!(Route::token_search("   "), None);
    }
}
