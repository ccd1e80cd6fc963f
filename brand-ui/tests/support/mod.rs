// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for brand-ui component tests.
//
// Provides mount/cleanup helpers, Dioxus rendering helpers and
// `window.__BRAND_CONFIG` injection so that individual test files stay
// focused on assertions rather than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element.
///
/// ```ignore
/// let mount = create_mount_point();
/// render_into(&mount, wrapper);
/// yield_now().await;
/// // assert on mount.query_selector(...)
/// cleanup(&mount);
/// ```
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

async fn next_animation_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        gloo_utils::window()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Yield to the browser event loop so Dioxus can process its initial render.
pub async fn yield_now() {
    next_animation_frame().await;
    // Second frame to make sure mutations are flushed
    next_animation_frame().await;
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Set `window.__BRAND_CONFIG` to the given JS value.
pub fn inject_brand_config(config: &wasm_bindgen::JsValue) {
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__BRAND_CONFIG".into(), config).unwrap();
}

/// Build a config object from `(key, value)` pairs.
pub fn brand_config_object(entries: &[(&str, wasm_bindgen::JsValue)]) -> js_sys::Object {
    let config = js_sys::Object::new();
    for (key, val) in entries {
        js_sys::Reflect::set(&config, &(*key).into(), val).unwrap();
    }
    config
}

/// Remove `window.__BRAND_CONFIG` so tests don't leak state.
pub fn remove_brand_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__BRAND_CONFIG".into());
}
