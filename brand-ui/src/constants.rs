// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::anyhow;
use serde_wasm_bindgen::from_value as from_js_value;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::types::LogoDisplayOptions;

/// Logo image served by the host application.
pub const LOGO_SRC: &str = "/assets/warmconnect-logo.png";

/// Brand name, used both as the wordmark and as the image alt text.
pub const BRAND_NAME: &str = "WarmConnect";
pub const WORDMARK_LEAD: &str = "Warm";
pub const WORDMARK_TAIL: &str = "Connect";
pub const TAGLINE: &str = "Warm introductions, real connections";

pub const DEFAULT_LOGO_SIZE: u32 = 120;

/// Classes always present on the root container.
pub const ROOT_LAYOUT_CLASSES: &str = "brand-logo flex items-center gap-3";

/// Global the host page may set to configure the logo.
pub const BRAND_CONFIG_KEY: &str = "__BRAND_CONFIG";

/// Reads `window.__BRAND_CONFIG`. `Ok(None)` when the page sets no config;
/// an error only when a config is present but is not an object.
pub fn brand_config() -> anyhow::Result<Option<LogoDisplayOptions>> {
    let win = window().ok_or_else(|| anyhow!("No window available"))?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str(BRAND_CONFIG_KEY))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Ok(None);
    }
    from_js_value::<LogoDisplayOptions>(config)
        .map(Some)
        .map_err(|e| anyhow!("Failed to parse {BRAND_CONFIG_KEY}: {e:?}"))
}

/// Like [`brand_config`], but an absent or malformed config yields the
/// default options.
pub fn brand_config_or_default() -> LogoDisplayOptions {
    match brand_config() {
        Ok(Some(options)) => {
            log::debug!("Loaded brand config: {options:?}");
            options
        }
        Ok(None) => {
            log::debug!("window.{BRAND_CONFIG_KEY} not set; using default logo options");
            LogoDisplayOptions::default()
        }
        Err(e) => {
            log::warn!("{e}; using default logo options");
            LogoDisplayOptions::default()
        }
    }
}
