use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::assets::load_data_uri;

/// Loads a local image as a `data:` URI, showing `fallback` until (or unless) it arrives.
#[hook]
pub fn use_data_uri(path: &'static str, fallback: &'static str) -> String {
    let uri = use_state(|| fallback.to_string());

    {
        let uri = uri.clone();
        use_effect_with(path, move |path| {
            let path = *path;
            spawn_local(async move {
                let Some(page_url) = web_sys::window().and_then(|w| w.location().href().ok())
                else {
                    return;
                };

                // A missing asset keeps the fallback
                if let Ok(data) = load_data_uri(&page_url, path).await {
                    uri.set(data);
                }
            });

            || ()
        });
    }

    (*uri).clone()
}
