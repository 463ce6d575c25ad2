//! # Token References
//!
//! The static table of well-known mints plus a [`TokenRegistry`] that merges
//! it with entries fetched from the strict token list.

use serde::{Deserialize, Serialize};

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const USDT_MINT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";

/// Decimal count assumed for a mint we know nothing about.
pub const DEFAULT_DECIMALS: u8 = 6;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

struct KnownToken {
    symbol: &'static str,
    name: &'static str,
    mint: &'static str,
    decimals: u8,
}

const KNOWN_TOKENS: [KnownToken; 3] = [
    KnownToken { symbol: "SOL", name: "Solana", mint: SOL_MINT, decimals: 9 },
    KnownToken { symbol: "USDC", name: "USD Coin", mint: USDC_MINT, decimals: 6 },
    KnownToken { symbol: "USDT", name: "Tether USD", mint: USDT_MINT, decimals: 6 },
];

/// A token the UI can select, quote or display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRef {
    pub symbol: String,
    pub name: String,
    pub mint: String,
    pub decimals: u8,
    pub logo_uri: Option<String>,
}

impl From<&KnownToken> for TokenRef {
    fn from(token: &KnownToken) -> Self {
        Self {
            symbol: token.symbol.to_string(),
            name: token.name.to_string(),
            mint: token.mint.to_string(),
            decimals: token.decimals,
            logo_uri: None,
        }
    }
}

impl TokenRef {
    pub fn sol() -> Self {
        Self::from(&KNOWN_TOKENS[0])
    }

    pub fn usdc() -> Self {
        Self::from(&KNOWN_TOKENS[1])
    }
}

/// The built-in tokens, in selector order.
pub fn known_tokens() -> Vec<TokenRef> {
    KNOWN_TOKENS.iter().map(TokenRef::from).collect()
}

pub fn find_known_by_mint(mint: &str) -> Option<TokenRef> {
    KNOWN_TOKENS.iter().find(|t| t.mint == mint).map(TokenRef::from)
}

pub fn find_known_by_symbol(symbol: &str) -> Option<TokenRef> {
    KNOWN_TOKENS
        .iter()
        .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
        .map(TokenRef::from)
}

/// Known tokens first, then whatever the remote list contributed.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    tokens: Vec<TokenRef>,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self { tokens: known_tokens() }
    }
}

impl TokenRegistry {
    /// Add remote entries. Known mints keep their static definition; a remote
    /// logo is adopted when the static entry has none.
    pub fn merge(&mut self, remote: impl IntoIterator<Item = TokenRef>) {
        for token in remote {
            match self.tokens.iter_mut().find(|t| t.mint == token.mint) {
                Some(existing) => {
                    if existing.logo_uri.is_none() {
                        existing.logo_uri = token.logo_uri;
                    }
                }
                None => self.tokens.push(token),
            }
        }
    }

    pub fn all(&self) -> &[TokenRef] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn by_mint(&self, mint: &str) -> Option<&TokenRef> {
        self.tokens.iter().find(|t| t.mint == mint)
    }

    pub fn decimals_of(&self, mint: &str) -> u8 {
        self.by_mint(mint).map(|t| t.decimals).unwrap_or(DEFAULT_DECIMALS)
    }

    /// Case-insensitive match on symbol or name; an empty filter matches everything.
    pub fn search(&self, filter: &str, limit: usize) -> Vec<&TokenRef> {
        let needle = filter.trim().to_lowercase();
        self.tokens
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || t.symbol.to_lowercase().contains(&needle)
                    || t.name.to_lowercase().contains(&needle)
                    || t.mint == filter.trim()
            })
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(symbol: &str, mint: &str, decimals: u8) -> TokenRef {
        TokenRef {
            symbol: symbol.into(),
            name: format!("{symbol} token"),
            mint: mint.into(),
            decimals,
            logo_uri: Some(format!("https://logo/{symbol}.png")),
        }
    }

    #[test]
    fn test_known_lookup() {
        assert_eq!(find_known_by_mint(USDC_MINT).unwrap().symbol, "USDC");
        assert_eq!(find_known_by_symbol("sol").unwrap().decimals, 9);
        assert!(find_known_by_mint("unknown").is_none());
    }

    #[test]
    fn test_registry_defaults_unknown_decimals() {
        let registry = TokenRegistry::default();
        assert_eq!(registry.decimals_of(SOL_MINT), 9);
        assert_eq!(registry.decimals_of("SomeUnknownMint"), DEFAULT_DECIMALS);
    }

    #[test]
    fn test_merge_keeps_static_definition() {
        let mut registry = TokenRegistry::default();
        registry.merge(vec![
            remote("WSOL", SOL_MINT, 4),
            remote("BONK", "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", 5),
        ]);
        assert_eq!(registry.len(), 4);
        let sol = registry.by_mint(SOL_MINT).unwrap();
        assert_eq!(sol.symbol, "SOL");
        assert_eq!(sol.decimals, 9);
        assert!(sol.logo_uri.is_some());
        assert_eq!(registry.decimals_of("DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263"), 5);
    }

    #[test]
    fn test_search() {
        let registry = TokenRegistry::default();
        let hits = registry.search("usd", 10);
        assert_eq!(hits.len(), 2);
        assert_eq!(registry.search("", 2).len(), 2);
        assert_eq!(registry.search(USDT_MINT, 10)[0].symbol, "USDT");
    }
}
