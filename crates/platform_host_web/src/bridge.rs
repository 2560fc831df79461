//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! This module contains the WASM interop layer and a non-WASM fallback shim for asset downloads
//! and alerts.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::{prelude::*, JsCast};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, HtmlAnchorElement, Response, Url};

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    fn window() -> Result<web_sys::Window, String> {
        web_sys::window().ok_or_else(|| "window is unavailable".to_string())
    }

    async fn fetch_blob(url: &str) -> Result<Blob, String> {
        let window = window()?;
        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(js_error_to_string)?;
        let response: Response = response.dyn_into().map_err(js_error_to_string)?;
        if !response.ok() {
            return Err(format!("fetch `{url}` returned status {}", response.status()));
        }
        let blob = JsFuture::from(response.blob().map_err(js_error_to_string)?)
            .await
            .map_err(js_error_to_string)?;
        blob.dyn_into().map_err(js_error_to_string)
    }

    fn save_blob(blob: &Blob, file_name: &str) -> Result<(), String> {
        let document = window()?
            .document()
            .ok_or_else(|| "document is unavailable".to_string())?;
        let body = document
            .body()
            .ok_or_else(|| "document body is unavailable".to_string())?;
        let object_url = Url::create_object_url_with_blob(blob).map_err(js_error_to_string)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error_to_string)?
            .dyn_into()
            .map_err(js_error_to_string)?;
        anchor.set_href(&object_url);
        anchor.set_download(file_name);

        let appended = body.append_child(&anchor).map_err(js_error_to_string);
        if appended.is_ok() {
            anchor.click();
            let _ = body.remove_child(&anchor);
        }
        let _ = Url::revoke_object_url(&object_url);
        appended.map(|_| ())
    }

    pub async fn download_asset(url: &str, file_name: &str) -> Result<(), String> {
        let blob = fetch_blob(url).await?;
        save_blob(&blob, file_name)
    }

    pub fn alert(message: &str) -> Result<(), String> {
        window()?.alert_with_message(message).map_err(js_error_to_string)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub async fn download_asset(_url: &str, _file_name: &str) -> Result<(), String> {
        Err("asset downloads require a browser host".to_string())
    }

    pub fn alert(_message: &str) -> Result<(), String> {
        Ok(())
    }
}

pub async fn download_asset(url: &str, file_name: &str) -> Result<(), String> {
    imp::download_asset(url, file_name).await
}

pub fn alert(message: &str) -> Result<(), String> {
    imp::alert(message)
}
