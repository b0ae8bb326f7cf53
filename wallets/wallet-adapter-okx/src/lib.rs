use std::rc::Rc;

use futures::FutureExt;
use wallet_adapter_base::{
    AccountChangeCallback, AccountChangeEvent, AccountChangeHandler, AccountInfo, AdapterPlugin,
    DeeplinkData, NetworkChangeCallback, NetworkChangeEvent, NetworkChangeHandler, NetworkInfo,
    Operation, PluginProvider, Result, SignMessagePayload, SignMessageResponse,
    SubmitTransactionResponse, TransactionPayload, TransactionResult,
    WalletError, WalletReadyState,
};
use wallet_adapter_wasm::InjectedProvider;

pub const OKX_WALLET_NAME: &str = "OKX";

const OKX_URL: &str = "https://www.okx.com/web3";

// the extension injects its provider as `window.aptos`
const OKX_PROVIDER_NAME: &str = "aptos";

const OKX_ICON: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAJAAAACQCAMAAADQmBKKAAAAVFBMVEUAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAD///+/v79AQECgoKCQkJAQEBAgICAwMDDf39/Pz8+Pj4/380QvAAAAEHRSTlMA3+9AIM+fcIAQf7+vUJCPrZ+0KwAAAdhJREFUeNrt3O1ugjAYhuG2fBQE5sunbDv/85wN0ZmMVtNFeNye+3+TKyAYTfuq1RKbZ9rI89JVbRP1YEluZJNM3tzXlAcjG6ZtisRx6UPoZmnZIZ34PEfZqfWLlGayW1m64tGyYzrF8jgRlueHKJPdy249BwHo+O1JBKLkCtr9A7SkS6Qb5ipQnrBLZrlEVmAqkD5BLuM8jQDlHrRcgMrPICNAGZiX4qUE6RlzWVULVLmqBKoM6S3k0kqwMmggeTHQaex8DVPswtMvQEPrb4xfGA/qWn9d9EKCCCKIIIIIIogggggiiCCCXhY0tv6G+IXxoGnofI2TzL2v8MJ4ULiP1tv7JLHFg/o20CzBtgf1Eowgggi6RhBBSwQRRNA1gghaIogggh5pRgMFf0rLvZ6ykaD3NXMjAf9BI4gggggiiCCCCCKIIIII+qcguI0Ep9B+gMiFn27hnzlGsUNY593O4R1WAji2fVuFdWZSpMY7Egh3aBLrMTOIB2+h7lmjsI4Ca+UqBCarXCXMJdKpwrpEhVoqQb7PNO6YDfUmABXIo1oARm2gjddBG0CkU/yRUXu+IN9eZezYuWJzkilKFSq18aR4Trhmu+F+jw8ctHWl5XkZneV2XfMFxCf3Ec1FG6QAAAAASUVORK5CYII=";

/// Adapter for the OKX wallet extension's aptos provider.
#[derive(Clone, Default)]
pub struct OkxWallet {
    provider: Option<Rc<dyn PluginProvider>>,
}

impl std::fmt::Debug for OkxWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OkxWallet")
            .field("provider", &self.provider.is_some())
            .finish()
    }
}

impl OkxWallet {
    pub fn new(provider: Option<Rc<dyn PluginProvider>>) -> Self {
        Self { provider }
    }

    /// Picks up the provider the extension injected into the page, if any.
    pub fn from_window() -> Self {
        let provider = InjectedProvider::detect(OKX_PROVIDER_NAME)
            .map(|provider| Rc::new(provider) as Rc<dyn PluginProvider>);
        Self::new(provider)
    }

    fn provider(&self, operation: Operation) -> Result<&Rc<dyn PluginProvider>> {
        self.provider
            .as_ref()
            .ok_or_else(|| WalletError::provider_absent(OKX_WALLET_NAME, operation))
    }

    // plain and BCS payloads go through the same provider call
    async fn submit(
        &self,
        payload: TransactionPayload,
        options: Option<serde_json::Value>,
    ) -> Result<TransactionResult> {
        let provider = self.provider(Operation::SignAndSubmitTransaction)?;

        tracing::debug!(bcs = payload.is_bcs(), "{OKX_WALLET_NAME} signAndSubmitTransaction");

        let response = provider
            .sign_and_submit_transaction(&payload, options.as_ref())
            .await
            .map_err(|err| WalletError::Submission(err.message))?;

        if let Some(code) = response.error_code() {
            tracing::debug!("transaction rejected with code {code}");
            return Err(WalletError::Submission(response.message.unwrap_or_default()));
        }

        match response.hash {
            Some(hash) => Ok(TransactionResult { hash }),
            None => Err(WalletError::Submission(format!(
                "{OKX_WALLET_NAME} signAndSubmitTransaction returned no hash"
            ))),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl AdapterPlugin for OkxWallet {
    fn name(&self) -> String {
        OKX_WALLET_NAME.into()
    }

    fn url(&self) -> String {
        OKX_URL.into()
    }

    fn icon(&self) -> String {
        OKX_ICON.into()
    }

    fn provider_name(&self) -> Option<String> {
        Some(OKX_PROVIDER_NAME.into())
    }

    fn ready_state(&self) -> WalletReadyState {
        if self.provider.is_some() {
            WalletReadyState::Installed
        } else {
            WalletReadyState::NotDetected
        }
    }

    // opens the dApp inside the OKX mobile app
    // https://www.okx.com/web3/build/docs/extension/create-deeplinks
    fn deeplink_provider(&self, data: &DeeplinkData) -> Option<String> {
        Some(format!("okx://wallet/dapp/details?dappUrl={}", data.url))
    }

    async fn connect(&self) -> Result<AccountInfo> {
        tracing::info!("{OKX_WALLET_NAME} connect");

        self.provider(Operation::Connect)?
            .connect()
            .await?
            .ok_or_else(|| WalletError::Connection(format!("{OKX_WALLET_NAME} Address Info Error")))
    }

    async fn disconnect(&self) -> Result<()> {
        tracing::info!("{OKX_WALLET_NAME} disconnect");

        Ok(self.provider(Operation::Disconnect)?.disconnect().await?)
    }

    async fn account(&self) -> Result<AccountInfo> {
        self.provider(Operation::Account)?
            .account()
            .await?
            .ok_or_else(|| WalletError::Account(format!("{OKX_WALLET_NAME} Account Error")))
    }

    async fn network(&self) -> Result<NetworkInfo> {
        let name = self
            .provider(Operation::Network)?
            .network()
            .await?
            .filter(|name| !name.is_empty())
            .ok_or_else(|| WalletError::Network(format!("{OKX_WALLET_NAME} Network Error")))?;

        Ok(NetworkInfo::from_name(name))
    }

    async fn sign_message(&self, payload: &SignMessagePayload) -> Result<SignMessageResponse> {
        let provider = self.provider(Operation::SignMessage)?;

        // not fatal, the wallet gets to decide what to do with it
        if payload.nonce.is_empty() {
            tracing::warn!("{OKX_WALLET_NAME} Invalid signMessage Payload");
        }

        match provider.sign_message(payload).await {
            Ok(Some(response)) => Ok(response),
            Ok(None) => Err(WalletError::Sign(format!("{OKX_WALLET_NAME} Sign Message failed"))),
            Err(err) => Err(WalletError::Sign(err.message)),
        }
    }

    async fn sign_and_submit_transaction(
        &self,
        payload: serde_json::Value,
        options: Option<serde_json::Value>,
    ) -> Result<TransactionResult> {
        self.submit(TransactionPayload::Entry(payload), options).await
    }

    async fn sign_and_submit_bcs_transaction(
        &self,
        payload: Vec<u8>,
        options: Option<serde_json::Value>,
    ) -> Result<TransactionResult> {
        self.submit(TransactionPayload::Bcs(payload), options).await
    }

    async fn on_account_change(&self, callback: AccountChangeCallback) -> Result<()> {
        let provider = self.provider(Operation::OnAccountChange)?;

        let callback: Rc<dyn Fn(AccountInfo)> = Rc::from(callback);
        let self_clone = self.clone();

        let handler: AccountChangeHandler = Box::new(move |event: AccountChangeEvent| {
            let wallet = self_clone.clone();
            let callback = callback.clone();

            async move {
                let account = match event {
                    AccountChangeEvent {
                        address,
                        public_key: Some(public_key),
                    } if !public_key.is_empty() => {
                        AccountInfo::new(address.unwrap_or_default(), public_key)
                    }
                    // no public key means the wallet was locked, ask for the account again
                    _ => wallet.connect().await.map_err(|err| {
                        tracing::error!("{OKX_WALLET_NAME} account change: {err}");
                        err
                    })?,
                };

                tracing::debug!("account changed: {}", account.address);
                callback(account);

                Ok::<(), WalletError>(())
            }
            .boxed_local()
        });

        provider.on_account_change(handler).await.map_err(|err| {
            tracing::error!("{OKX_WALLET_NAME} onAccountChange: {err}");
            err.into()
        })
    }

    async fn on_network_change(&self, callback: NetworkChangeCallback) -> Result<()> {
        let provider = self.provider(Operation::OnNetworkChange)?;

        let callback: Rc<dyn Fn(NetworkInfo)> = Rc::from(callback);

        let handler: NetworkChangeHandler = Box::new(move |event: NetworkChangeEvent| {
            let callback = callback.clone();

            async move {
                tracing::debug!("network changed: {}", event.network_name);
                // the event carries neither chain id nor api endpoint
                callback(NetworkInfo::from_name(event.network_name));
                Ok::<(), WalletError>(())
            }
            .boxed_local()
        });

        provider.on_network_change(handler).await.map_err(|err| {
            tracing::error!("{OKX_WALLET_NAME} onNetworkChange: {err}");
            err.into()
        })
    }
}
