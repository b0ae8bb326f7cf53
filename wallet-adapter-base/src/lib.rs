mod adapter;
mod error;
mod provider;
mod types;

pub use adapter::AdapterPlugin;
pub use adapter::WalletReadyState;
pub use adapter::{AccountChangeCallback, NetworkChangeCallback};
pub use error::{Operation, ProviderError, Result, WalletError};
pub use provider::{AccountChangeHandler, NetworkChangeHandler, PluginProvider, ProviderResult};
pub use types::{
    AccountChangeEvent, AccountInfo, DeeplinkData, NetworkChangeEvent, NetworkInfo, NetworkName,
    SignMessagePayload, SignMessageResponse, Signature, SubmitTransactionResponse,
    TransactionPayload, TransactionResult,
};
