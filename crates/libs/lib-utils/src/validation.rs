//! # Validation Utilities
//!
//! Input validation helpers.

use url::Url;

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate a base58 Solana address (32 bytes once decoded).
pub fn validate_address(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    validate_not_empty(trimmed, "Address")?;
    let bytes = bs58::decode(trimmed)
        .into_vec()
        .map_err(|_| "Address is not valid base58".to_string())?;
    if bytes.len() != 32 {
        return Err(format!("Address must decode to 32 bytes, got {}", bytes.len()));
    }
    Ok(())
}

/// Slippage is expressed in basis points and cannot exceed 100%.
pub fn validate_slippage_bps(bps: u16) -> Result<(), String> {
    if bps > 10_000 {
        Err(format!("Slippage of {} bps exceeds 10000", bps))
    } else {
        Ok(())
    }
}

/// An RPC URL must parse, use http(s) and name a host.
pub fn validate_url(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    let url = Url::parse(trimmed).map_err(|e| format!("'{}' is not a valid URL: {}", trimmed, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("URL must start with http:// or https://".to_string());
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(format!("'{}' has no host", trimmed)),
    }
}
