//! # RPC Gateway
//!
//! The subset of Solana JSON-RPC the dashboard needs, behind a trait so the
//! portfolio, token lookup and swap flows can be exercised without a node.

use async_trait::async_trait;
use lib_core::Result;
use serde::Deserialize;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::VersionedTransaction;

/// Raw account state as returned by `getAccountInfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

/// An SPL token account decoded from its `jsonParsed` representation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTokenAccount {
    pub address: String,
    pub mint: String,
    pub owner: String,
    pub amount: u64,
    pub decimals: u8,
    pub ui_amount: f64,
}

/// Simulation result. `error` is set when the node reported a failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationOutcome {
    pub error: Option<SimulationFailure>,
    pub logs: Vec<String>,
    pub units_consumed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationFailure {
    /// The node's error, rendered as JSON.
    pub detail: String,
    /// The failure came from inside a program (`InstructionError`).
    pub instruction_error: bool,
}

impl SimulationFailure {
    /// Classify a transaction error from its JSON shape, e.g.
    /// `{"InstructionError":[2,{"Custom":6001}]}`.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let instruction_error = value
            .as_object()
            .map(|obj| obj.contains_key("InstructionError"))
            .unwrap_or(false);
        Self { detail: value.to_string(), instruction_error }
    }
}

#[async_trait]
pub trait RpcGateway: Send + Sync {
    /// Native balance in lamports.
    async fn get_balance(&self, owner: &Pubkey) -> Result<u64>;

    /// SPL token accounts owned by `owner` under the Tokenkeg program.
    async fn get_token_accounts(&self, owner: &Pubkey) -> Result<Vec<ParsedTokenAccount>>;

    /// `None` when the account does not exist.
    async fn get_account(&self, address: &Pubkey) -> Result<Option<AccountSnapshot>>;

    async fn get_latest_blockhash(&self) -> Result<Hash>;

    async fn simulate(&self, transaction: &VersionedTransaction) -> Result<SimulationOutcome>;

    /// Submit and wait until the cluster confirms.
    async fn send_and_confirm(&self, transaction: &VersionedTransaction) -> Result<Signature>;

    /// Request test SOL and wait for confirmation. Only test clusters honour this.
    async fn request_airdrop(&self, owner: &Pubkey, lamports: u64) -> Result<Signature>;
}

// region: --- jsonParsed token accounts

#[derive(Debug, Deserialize)]
struct ParsedAccountData {
    parsed: ParsedAccountBody,
}

#[derive(Debug, Deserialize)]
struct ParsedAccountBody {
    info: TokenAccountInfo,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct TokenAccountInfo {
    mint: String,
    owner: String,
    #[serde(rename = "tokenAmount")]
    token_amount: UiTokenAmount,
}

#[derive(Debug, Deserialize)]
struct UiTokenAmount {
    amount: String,
    decimals: u8,
    #[serde(rename = "uiAmount")]
    ui_amount: Option<f64>,
}

/// Decode the `data` field of a `jsonParsed` token account.
///
/// Returns `None` for anything that is not an initialized token account.
pub fn parse_token_account(address: &str, data: &serde_json::Value) -> Option<ParsedTokenAccount> {
    let parsed: ParsedAccountData = serde_json::from_value(data.clone()).ok()?;
    if parsed.parsed.kind != "account" {
        return None;
    }
    let info = parsed.parsed.info;
    let amount: u64 = info.token_amount.amount.parse().ok()?;
    let decimals = info.token_amount.decimals;
    let ui_amount = info
        .token_amount
        .ui_amount
        .unwrap_or_else(|| amount as f64 / 10f64.powi(i32::from(decimals)));

    Some(ParsedTokenAccount {
        address: address.to_string(),
        mint: info.mint,
        owner: info.owner,
        amount,
        decimals,
        ui_amount,
    })
}

// endregion: --- jsonParsed token accounts
