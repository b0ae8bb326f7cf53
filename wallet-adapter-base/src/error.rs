use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, WalletError>;

/// The adapter operation an error was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "camelCase")]
pub enum Operation {
    Connect,
    Disconnect,
    Account,
    Network,
    SignMessage,
    SignAndSubmitTransaction,
    OnAccountChange,
    OnNetworkChange,
}

/// Failure reported by an injected provider, either thrown or returned as an
/// error-code-bearing result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl ToString) -> Self {
        Self {
            code: None,
            message: message.to_string(),
        }
    }

    pub fn with_code(code: i64, message: impl ToString) -> Self {
        Self {
            code: Some(code),
            message: message.to_string(),
        }
    }
}

/// Errors surfaced by wallet adapters.
///
/// Every string-carrying kind displays exactly its message, so callers that
/// match on message text see what the wallet reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("{wallet} provider is not available ({operation})")]
    ProviderAbsent { wallet: String, operation: Operation },
    #[error("{0}")]
    Connection(String),
    #[error("{0}")]
    Account(String),
    #[error("{0}")]
    Network(String),
    #[error("{0}")]
    Sign(String),
    #[error("{0}")]
    Submission(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl WalletError {
    pub fn provider_absent(wallet: impl ToString, operation: Operation) -> Self {
        Self::ProviderAbsent {
            wallet: wallet.to_string(),
            operation,
        }
    }
}
