use futures::future::LocalBoxFuture;

use crate::error::ProviderError;
use crate::types::{
    AccountChangeEvent, AccountInfo, NetworkChangeEvent, SignMessagePayload, SignMessageResponse,
    SubmitTransactionResponse, TransactionPayload,
};

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Handler a provider invokes when the active account changes.
pub type AccountChangeHandler =
    Box<dyn Fn(AccountChangeEvent) -> LocalBoxFuture<'static, crate::Result<()>>>;

/// Handler a provider invokes when the active network changes.
pub type NetworkChangeHandler =
    Box<dyn Fn(NetworkChangeEvent) -> LocalBoxFuture<'static, crate::Result<()>>>;

/// The object a wallet extension injects into the page.
///
/// Methods resolving to `None` correspond to the provider resolving with
/// nothing (`null` / `undefined`).
#[async_trait::async_trait(?Send)]
pub trait PluginProvider {
    async fn connect(&self) -> ProviderResult<Option<AccountInfo>>;
    async fn disconnect(&self) -> ProviderResult<()>;
    async fn account(&self) -> ProviderResult<Option<AccountInfo>>;
    async fn network(&self) -> ProviderResult<Option<String>>;
    async fn sign_message(
        &self,
        payload: &SignMessagePayload,
    ) -> ProviderResult<Option<SignMessageResponse>>;
    async fn sign_and_submit_transaction(
        &self,
        payload: &TransactionPayload,
        options: Option<&serde_json::Value>,
    ) -> ProviderResult<SubmitTransactionResponse>;
    async fn on_account_change(&self, handler: AccountChangeHandler) -> ProviderResult<()>;
    async fn on_network_change(&self, handler: NetworkChangeHandler) -> ProviderResult<()>;
}
