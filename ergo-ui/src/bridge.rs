//! Typed fetch wrappers over the ergo-dash JSON API.

use crate::dto::{DashboardDto, VideoPanelDto};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

pub async fn get_json<R>(path: &str) -> Result<R, String>
where
    R: DeserializeOwned,
{
    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| format!("fetch {path} failed: {e:?}"))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| format!("fetch {path} did not return a Response"))?;
    if !response.ok() {
        return Err(format!("{path} returned {}", response.status()));
    }

    let body = response
        .json()
        .map_err(|e| format!("reading {path} failed: {e:?}"))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| format!("decoding {path} failed: {e:?}"))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

pub async fn fetch_dashboard() -> Result<DashboardDto, String> {
    get_json("/api/dashboard").await
}

pub async fn fetch_video(index: usize) -> Result<VideoPanelDto, String> {
    get_json(&format!("/api/videos/{index}")).await
}
