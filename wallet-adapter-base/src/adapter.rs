//! modeled on the `AdapterPlugin` interface of `@aptos-labs/wallet-adapter-core`

use crate::types::{
    AccountInfo, DeeplinkData, NetworkInfo, SignMessagePayload, SignMessageResponse,
    TransactionResult,
};

/// Callback handed the account a wallet switched to.
pub type AccountChangeCallback = Box<dyn Fn(AccountInfo)>;

/// Callback handed the network a wallet switched to.
pub type NetworkChangeCallback = Box<dyn Fn(NetworkInfo)>;

/**
 * A wallet's readiness describes whether the wallet API could be found in the
 * page. A browser extension like OKX is `Installed` if its provider was
 * injected into the global scope, or `NotDetected` otherwise.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum WalletReadyState {
    Installed,
    NotDetected,
}

#[async_trait::async_trait(?Send)]
pub trait AdapterPlugin {
    fn name(&self) -> String;
    fn url(&self) -> String;
    fn icon(&self) -> String;
    /// key of the global object the wallet injects its provider under
    fn provider_name(&self) -> Option<String> {
        None
    }
    fn ready_state(&self) -> WalletReadyState;

    /// Link that opens `data.url` inside the wallet's mobile app.
    fn deeplink_provider(&self, _data: &DeeplinkData) -> Option<String> {
        None
    }

    async fn connect(&self) -> crate::Result<AccountInfo>;
    async fn disconnect(&self) -> crate::Result<()>;
    async fn account(&self) -> crate::Result<AccountInfo>;
    async fn network(&self) -> crate::Result<NetworkInfo>;

    async fn sign_message(&self, payload: &SignMessagePayload)
        -> crate::Result<SignMessageResponse>;

    async fn sign_and_submit_transaction(
        &self,
        payload: serde_json::Value,
        options: Option<serde_json::Value>,
    ) -> crate::Result<TransactionResult>;

    async fn sign_and_submit_bcs_transaction(
        &self,
        payload: Vec<u8>,
        options: Option<serde_json::Value>,
    ) -> crate::Result<TransactionResult>;

    async fn on_account_change(&self, callback: AccountChangeCallback) -> crate::Result<()>;
    async fn on_network_change(&self, callback: NetworkChangeCallback) -> crate::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_adapter_plugin_trait_be_made_into_object() {
        let _wallet_adapter: Option<Box<dyn AdapterPlugin>> = None;
    }

    #[test]
    fn ready_state_displays_variant_name() {
        assert_eq!(WalletReadyState::NotDetected.to_string(), "NotDetected");
    }
}
