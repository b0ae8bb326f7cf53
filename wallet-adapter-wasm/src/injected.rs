use serde::de::DeserializeOwned;
use serde::Serialize;
use wallet_adapter_base::{
    AccountChangeEvent, AccountChangeHandler, AccountInfo, NetworkChangeEvent,
    NetworkChangeHandler, PluginProvider, ProviderError, ProviderResult, SignMessagePayload,
    SignMessageResponse, SubmitTransactionResponse, TransactionPayload,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use crate::util::{is_nullish, reflect_get, window};

mod provider_binding {
    use super::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(extends = js_sys::Object)]
        #[derive(Clone, Debug)]
        pub type AptosProvider;

        #[wasm_bindgen(method, catch)]
        pub fn connect(this: &AptosProvider) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn disconnect(this: &AptosProvider) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn account(this: &AptosProvider) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch)]
        pub fn network(this: &AptosProvider) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = signMessage)]
        pub fn sign_message(this: &AptosProvider, payload: &JsValue)
            -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = signAndSubmitTransaction)]
        pub fn sign_and_submit_transaction(
            this: &AptosProvider,
            transaction: &JsValue,
            options: &JsValue,
        ) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = onAccountChange)]
        pub fn on_account_change(
            this: &AptosProvider,
            handler: &js_sys::Function,
        ) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = onNetworkChange)]
        pub fn on_network_change(
            this: &AptosProvider,
            handler: &js_sys::Function,
        ) -> Result<JsValue, JsValue>;
    }
}

/// Converts whatever a provider threw into a [`ProviderError`], keeping its
/// `code` and `message` when it has them.
pub fn provider_error(err: JsValue) -> ProviderError {
    if let Some(message) = err.as_string() {
        return ProviderError::new(message);
    }

    let message = reflect_get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|msg| msg.as_string());
    let code = reflect_get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as i64);

    ProviderError {
        code,
        message: message.unwrap_or_else(|| format!("{err:?}")),
    }
}

// provider methods may return a promise or a plain value
async fn settle(result: Result<JsValue, JsValue>) -> ProviderResult<JsValue> {
    let value = result.map_err(provider_error)?;
    let promise = js_sys::Promise::resolve(&value);
    JsFuture::from(promise).await.map_err(provider_error)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> ProviderResult<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(ProviderError::new)
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> ProviderResult<Option<T>> {
    if is_nullish(&value) {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(ProviderError::new)
}

fn payload_to_js(payload: &TransactionPayload) -> ProviderResult<JsValue> {
    match payload {
        TransactionPayload::Entry(value) => to_js(value),
        TransactionPayload::Bcs(bytes) => Ok(js_sys::Uint8Array::from(bytes.as_slice()).into()),
    }
}

// a locked wallet reports no account at all
fn account_change_event(event: JsValue) -> Result<AccountChangeEvent, serde_wasm_bindgen::Error> {
    if is_nullish(&event) {
        return Ok(AccountChangeEvent::default());
    }
    serde_wasm_bindgen::from_value(event)
}

fn handler_promise(
    fut: futures::future::LocalBoxFuture<'static, wallet_adapter_base::Result<()>>,
) -> js_sys::Promise {
    future_to_promise(async move {
        fut.await
            .map(|_| JsValue::UNDEFINED)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    })
}

/// A wallet provider injected into the page, e.g. `window.aptos`.
#[derive(Debug, Clone)]
pub struct InjectedProvider {
    provider: provider_binding::AptosProvider,
    slot: String,
}

impl InjectedProvider {
    /// Looks the provider up under `window[slot]`.
    pub fn detect(slot: &str) -> Option<Self> {
        let window = window().ok()?;
        let provider = reflect_get(&window, &JsValue::from_str(slot)).ok()?;

        if is_nullish(&provider) {
            tracing::debug!("no provider injected at window.{slot}");
            return None;
        }

        tracing::debug!("provider detected at window.{slot}");

        Some(Self {
            provider: provider.unchecked_into(),
            slot: slot.to_string(),
        })
    }
}

#[async_trait::async_trait(?Send)]
impl PluginProvider for InjectedProvider {
    async fn connect(&self) -> ProviderResult<Option<AccountInfo>> {
        tracing::debug!("{} connect", self.slot);
        from_js(settle(self.provider.connect()).await?)
    }

    async fn disconnect(&self) -> ProviderResult<()> {
        tracing::debug!("{} disconnect", self.slot);
        settle(self.provider.disconnect()).await?;
        Ok(())
    }

    async fn account(&self) -> ProviderResult<Option<AccountInfo>> {
        from_js(settle(self.provider.account()).await?)
    }

    async fn network(&self) -> ProviderResult<Option<String>> {
        from_js(settle(self.provider.network()).await?)
    }

    async fn sign_message(
        &self,
        payload: &SignMessagePayload,
    ) -> ProviderResult<Option<SignMessageResponse>> {
        let payload = to_js(payload)?;
        from_js(settle(self.provider.sign_message(&payload)).await?)
    }

    async fn sign_and_submit_transaction(
        &self,
        payload: &TransactionPayload,
        options: Option<&serde_json::Value>,
    ) -> ProviderResult<SubmitTransactionResponse> {
        let transaction = payload_to_js(payload)?;
        let options = match options {
            Some(options) => to_js(options)?,
            None => JsValue::UNDEFINED,
        };

        tracing::debug!("transaction: {:?}", transaction);

        let response = settle(
            self.provider
                .sign_and_submit_transaction(&transaction, &options),
        )
        .await?;

        from_js(response)?
            .ok_or_else(|| ProviderError::new("signAndSubmitTransaction resolved with nothing"))
    }

    async fn on_account_change(&self, handler: AccountChangeHandler) -> ProviderResult<()> {
        let closure = Closure::wrap(Box::new(move |event: JsValue| {
            match account_change_event(event) {
                Ok(event) => handler_promise(handler(event)),
                Err(err) => {
                    tracing::error!("could not decode account change: {err}");
                    js_sys::Promise::reject(&JsValue::from_str(&err.to_string()))
                }
            }
        }) as Box<dyn FnMut(JsValue) -> js_sys::Promise>);

        let f: &js_sys::Function = closure.as_ref().unchecked_ref();
        settle(self.provider.on_account_change(f)).await?;

        // the provider keeps calling the handler for the lifetime of the page
        closure.forget();

        Ok(())
    }

    async fn on_network_change(&self, handler: NetworkChangeHandler) -> ProviderResult<()> {
        let closure = Closure::wrap(Box::new(move |event: JsValue| {
            match serde_wasm_bindgen::from_value::<NetworkChangeEvent>(event) {
                Ok(event) => handler_promise(handler(event)),
                Err(err) => {
                    tracing::error!("could not decode network change: {err}");
                    js_sys::Promise::reject(&JsValue::from_str(&err.to_string()))
                }
            }
        }) as Box<dyn FnMut(JsValue) -> js_sys::Promise>);

        let f: &js_sys::Function = closure.as_ref().unchecked_ref();
        settle(self.provider.on_network_change(f)).await?;

        closure.forget();

        Ok(())
    }
}
