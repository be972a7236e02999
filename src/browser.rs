use crate::config::SiteConfig;
use crate::theme::{Mode, ThemeEnv};
use leptos::logging::{error, warn};
use leptos::prelude::window;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn storage() -> Result<web_sys::Storage, String> {
    window()
        .local_storage()
        .map_err(|e| format!("{e:?}"))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

/// Theme signals backed by `localStorage`, `prefers-color-scheme` and the
/// class list of `<html>`.
#[derive(Clone, Debug)]
pub struct BrowserTheme {
    key: String,
}

impl BrowserTheme {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ThemeEnv for BrowserTheme {
    fn saved_mode(&self) -> Option<String> {
        storage().ok()?.get_item(&self.key).ok().flatten()
    }

    fn prefers_dark(&self) -> bool {
        window()
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn persist(&self, mode: Mode) {
        let result = storage().and_then(|s| {
            s.set_item(&self.key, mode.as_str())
                .map_err(|e| format!("{e:?}"))
        });
        if let Err(e) = result {
            warn!("could not persist theme: {e}");
        }
    }

    fn apply(&self, mode: Mode) {
        match window().document().and_then(|doc| doc.document_element()) {
            Some(root) => root.set_class_name(mode.as_str()),
            None => error!("no document root to apply theme to"),
        }
    }
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::MAX)
}

pub fn load_site_config() -> SiteConfig {
    let raw = window()
        .document()
        .and_then(|doc| doc.get_element_by_id("site-config"))
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    SiteConfig::from_json(&raw).unwrap_or_else(|e| {
        warn!("site config ignored: {e}");
        SiteConfig::default()
    })
}

pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
        if let Err(e) = window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout)
        {
            error!("setTimeout failed: {e:?}");
            if let Err(e) = resolve.call0(&JsValue::NULL) {
                error!("could not resolve timer promise: {e:?}");
            }
        }
    });
    if let Err(e) = JsFuture::from(promise).await {
        warn!("timer promise rejected: {e:?}");
    }
}
