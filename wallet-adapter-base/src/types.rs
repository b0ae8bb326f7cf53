//! values exchanged between an aptos dApp, the adapter and the injected provider
//! field names follow the camelCase shapes `@aptos-labs/wallet-adapter-core` uses

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub address: String,
    pub public_key: String,
    /** Aptos Names Service name, if the wallet resolved one */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ans_name: Option<String>,
}

impl AccountInfo {
    pub fn new(address: impl ToString, public_key: impl ToString) -> Self {
        Self {
            address: address.to_string(),
            public_key: public_key.to_string(),
            ans_name: None,
        }
    }
}

/// Well-known aptos networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NetworkName {
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub name: String,
    pub chain_id: Option<String>,
    pub api: Option<String>,
}

impl NetworkInfo {
    /// Network info known only by name. Chain id and api endpoint stay unknown.
    pub fn from_name(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            chain_id: None,
            api: None,
        }
    }

    pub fn network_name(&self) -> Option<NetworkName> {
        self.name.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignMessagePayload {
    pub message: String,
    pub nonce: String,
    /** include the account address in the signed message */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<bool>,
    /** include the dApp domain in the signed message */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<bool>,
    /** include the current chain id in the signed message */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<bool>,
}

impl SignMessagePayload {
    pub fn new(message: impl ToString, nonce: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            nonce: nonce.to_string(),
            address: None,
            application: None,
            chain_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Signature {
    Single(String),
    Multi(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignMessageResponse {
    pub full_message: String,
    pub message: String,
    pub nonce: String,
    pub prefix: String,
    pub signature: Signature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitmap: Option<Vec<u8>>,
}

/// Transaction payload handed to the wallet without interpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionPayload {
    /// entry function payload in its JSON form
    Entry(serde_json::Value),
    /// payload already serialized to BCS
    Bcs(Vec<u8>),
}

impl TransactionPayload {
    pub fn is_bcs(&self) -> bool {
        matches!(self, Self::Bcs(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub hash: String,
}

/// What a provider resolves `signAndSubmitTransaction` with: a hash on
/// success, or an error code with a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTransactionResponse {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SubmitTransactionResponse {
    pub fn submitted(hash: impl ToString) -> Self {
        Self {
            hash: Some(hash.to_string()),
            ..Default::default()
        }
    }

    pub fn rejected(code: i64, message: impl ToString) -> Self {
        Self {
            code: Some(code),
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// A code of `0` does not count as an error.
    pub fn error_code(&self) -> Option<i64> {
        self.code.filter(|code| *code != 0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountChangeEvent {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkChangeEvent {
    pub network_name: String,
}

/// Input to a wallet's deep link builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeeplinkData {
    pub url: String,
}
