//! # Application Configuration
//!
//! Configuration is loaded from environment variables (and an optional `.env`
//! file) once at startup and validated to fail fast if misconfigured.
//!
//! The loaded [`Config`] is an immutable value. It is handed to whoever needs
//! it, usually wrapped in an `Arc`; nothing reads configuration from a global.
//!
//! ## Variables
//!
//! | Variable               | Required | Default                         |
//! |------------------------|----------|---------------------------------|
//! | `HELIUS_API_KEY`       | yes      |                                 |
//! | `JUPITER_QUOTE_API`    | no       | `https://quote-api.jup.ag/v6`   |
//! | `JUPITER_PRICE_API`    | no       | `https://price.jup.ag/v6`       |
//! | `JUPITER_TOKEN_API`    | no       | `https://token.jup.ag`          |
//! | `DEFAULT_SLIPPAGE_BPS` | no       | `50`                            |
//! | `SOLANA_KEYPAIR_PATH`  | no       | `~/.config/solana/id.json`      |
//! | `JUPITER_AS_LEGACY_TX` | no       | `false`                         |
//!
//! ```rust,no_run
//! use lib_core::config::Config;
//!
//! let config = Config::load()?;
//! let rpc_url = config.default_endpoint().url(&config);
//! # Ok::<(), lib_core::AppError>(())
//! ```

use crate::error::{AppError, Result};
use lib_utils::envs::{self, get_env, get_env_opt, get_env_parse_or};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_QUOTE_API: &str = "https://quote-api.jup.ag/v6";
pub const DEFAULT_PRICE_API: &str = "https://price.jup.ag/v6";
pub const DEFAULT_TOKEN_API: &str = "https://token.jup.ag";
pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

const HELIUS_MAINNET: &str = "https://mainnet.helius-rpc.com/?api-key=";
const PUBLIC_MAINNET: &str = "https://api.mainnet-beta.solana.com";
const PUBLIC_DEVNET: &str = "https://api.devnet.solana.com";

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// API key for the Helius mainnet RPC. Startup fails without it.
    pub helius_api_key: String,

    /// Jupiter quote and swap API base (`/quote`, `/swap` are appended).
    pub quote_api_base: String,

    /// Jupiter price API base (`/price` is appended).
    pub price_api_base: String,

    /// Jupiter token list base (`/strict` is appended).
    pub token_api_base: String,

    /// Slippage tolerance used for every quote, in basis points.
    pub default_slippage_bps: u16,

    /// Keypair file offered by the connect dialog.
    pub keypair_path: PathBuf,

    /// Ask Jupiter for a legacy transaction instead of a v0 one.
    pub as_legacy_transaction: bool,
}

impl Config {
    /// Build a configuration with default endpoints around an API key.
    pub fn new(helius_api_key: impl Into<String>) -> Self {
        Self {
            helius_api_key: helius_api_key.into(),
            quote_api_base: DEFAULT_QUOTE_API.to_string(),
            price_api_base: DEFAULT_PRICE_API.to_string(),
            token_api_base: DEFAULT_TOKEN_API.to_string(),
            default_slippage_bps: DEFAULT_SLIPPAGE_BPS,
            keypair_path: default_keypair_path(),
            as_legacy_transaction: false,
        }
    }

    /// Load `.env` (if present), read the environment and validate.
    pub fn load() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let helius_api_key = get_env("HELIUS_API_KEY")?;

        let mut config = Self::new(helius_api_key);
        if let Some(url) = get_env_opt("JUPITER_QUOTE_API") {
            config.quote_api_base = url;
        }
        if let Some(url) = get_env_opt("JUPITER_PRICE_API") {
            config.price_api_base = url;
        }
        if let Some(url) = get_env_opt("JUPITER_TOKEN_API") {
            config.token_api_base = url;
        }
        config.default_slippage_bps = get_env_parse_or("DEFAULT_SLIPPAGE_BPS", DEFAULT_SLIPPAGE_BPS)?;
        if let Some(path) = get_env_opt("SOLANA_KEYPAIR_PATH") {
            config.keypair_path = PathBuf::from(path);
        }
        config.as_legacy_transaction = get_env_parse_or("JUPITER_AS_LEGACY_TX", false)?;

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.helius_api_key.trim().is_empty() {
            return Err(AppError::Config("HELIUS_API_KEY must not be empty".to_string()));
        }

        lib_utils::validate_slippage_bps(self.default_slippage_bps).map_err(AppError::Config)?;

        for (name, url) in [
            ("JUPITER_QUOTE_API", &self.quote_api_base),
            ("JUPITER_PRICE_API", &self.price_api_base),
            ("JUPITER_TOKEN_API", &self.token_api_base),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::Config(format!("{name} must be an http(s) URL, got '{url}'")));
            }
        }

        Ok(())
    }

    /// The endpoint selected on first launch.
    pub fn default_endpoint(&self) -> RpcEndpoint {
        RpcEndpoint::Helius
    }
}

fn default_keypair_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".config").join("solana").join("id.json")
}

impl From<envs::Error> for AppError {
    fn from(err: envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

// region: --- RPC Endpoint

/// User-selectable RPC endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpcEndpoint {
    /// Helius mainnet, authenticated with the configured API key.
    #[default]
    Helius,
    /// Public mainnet-beta endpoint (rate limited, may answer 403).
    Mainnet,
    /// Public devnet endpoint; the only network with airdrops.
    Devnet,
    Custom(String),
}

impl RpcEndpoint {
    /// Endpoints offered in the settings menu.
    pub fn presets() -> [RpcEndpoint; 3] {
        [RpcEndpoint::Helius, RpcEndpoint::Mainnet, RpcEndpoint::Devnet]
    }

    /// Resolve the JSON-RPC URL.
    pub fn url(&self, config: &Config) -> String {
        match self {
            RpcEndpoint::Helius => format!("{}{}", HELIUS_MAINNET, config.helius_api_key),
            RpcEndpoint::Mainnet => PUBLIC_MAINNET.to_string(),
            RpcEndpoint::Devnet => PUBLIC_DEVNET.to_string(),
            RpcEndpoint::Custom(url) => url.clone(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            RpcEndpoint::Helius => "Mainnet (Helius)",
            RpcEndpoint::Mainnet => "Mainnet (public)",
            RpcEndpoint::Devnet => "Devnet",
            RpcEndpoint::Custom(_) => "Custom",
        }
    }

    pub fn is_devnet(&self) -> bool {
        match self {
            RpcEndpoint::Devnet => true,
            RpcEndpoint::Custom(url) => url.contains("devnet"),
            _ => false,
        }
    }
}

// endregion: --- RPC Endpoint
