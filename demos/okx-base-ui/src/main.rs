use std::cell::RefCell;

use wallet_adapter_base::{AccountInfo, AdapterPlugin, DeeplinkData, NetworkInfo, WalletReadyState};
use wallet_adapter_okx::OkxWallet;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

struct ButtonListeners {
    _connect: Closure<dyn FnMut()>,
    _disconnect: Closure<dyn FnMut()>,
}

thread_local! {
    static BUTTON_LISTENERS: RefCell<Option<ButtonListeners>> = const { RefCell::new(None) };
}

fn document() -> web_sys::Document {
    web_sys::window()
        .expect("no global `window` exists")
        .document()
        .expect("expecting a document on window")
}

fn set_text(id: &str, text: &str) {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("should have a #{id} element on the page"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap_or_else(|_| panic!("#{id} should be an `HtmlElement`"))
        .set_inner_text(text);
}

fn show_network(network: &NetworkInfo) {
    let label = match network.network_name() {
        Some(name) => name.to_string(),
        None => format!("{} (unknown network)", network.name),
    };
    set_text("network", &label);
}

fn register_button(id: &str, on_click: impl FnMut() + 'static) -> Closure<dyn FnMut()> {
    let closure = Closure::new(Box::new(on_click) as Box<dyn FnMut()>);

    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("should have a #{id} button on the page"))
        .dyn_ref::<web_sys::HtmlElement>()
        .unwrap_or_else(|| panic!("#{id} should be an `HtmlElement`"))
        .set_onclick(Some(closure.as_ref().unchecked_ref()));

    closure
}

fn register_connect_btn(wallet: &OkxWallet) -> Closure<dyn FnMut()> {
    let wallet = wallet.clone();

    register_button("connect-btn", move || {
        let wallet = wallet.clone();
        spawn_local(async move {
            tracing::info!("ready state: {}", wallet.ready_state());

            match wallet.connect().await {
                Ok(account) => set_text("address", &account.address),
                Err(err) => set_text("error", &err.to_string()),
            }

            match wallet.network().await {
                Ok(network) => show_network(&network),
                Err(err) => set_text("error", &err.to_string()),
            }
        });
    })
}

fn register_disconnect_btn(wallet: &OkxWallet) -> Closure<dyn FnMut()> {
    let wallet = wallet.clone();

    register_button("disconnect-btn", move || {
        let wallet = wallet.clone();
        spawn_local(async move {
            match wallet.disconnect().await {
                Ok(()) => set_text("address", ""),
                Err(err) => set_text("error", &err.to_string()),
            }
        });
    })
}

async fn subscribe(wallet: &OkxWallet) -> wallet_adapter_base::Result<()> {
    wallet
        .on_account_change(Box::new(|account: AccountInfo| {
            set_text("address", &account.address)
        }))
        .await?;
    wallet
        .on_network_change(Box::new(|network: NetworkInfo| show_network(&network)))
        .await
}

#[wasm_bindgen(main)]
pub fn main() {
    tracing_wasm::set_as_global_default();

    let wallet = OkxWallet::from_window();

    if wallet.ready_state() != WalletReadyState::Installed {
        // on mobile browsers offer to reopen the page inside the OKX app
        let href = web_sys::window()
            .and_then(|window| window.location().href().ok())
            .unwrap_or_default();
        if let Some(link) = wallet.deeplink_provider(&DeeplinkData { url: href }) {
            set_text("deeplink", &link);
        }
    }

    let subscriber = wallet.clone();
    spawn_local(async move {
        if let Err(err) = subscribe(&subscriber).await {
            tracing::warn!("could not subscribe to wallet changes: {err}");
        }
    });

    BUTTON_LISTENERS.with(|button_listeners| {
        *button_listeners.borrow_mut() = Some(ButtonListeners {
            _connect: register_connect_btn(&wallet),
            _disconnect: register_disconnect_btn(&wallet),
        });
    });
}
