/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use std::fmt::Debug;

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::constants::{DEFAULT_LOGO_SIZE, ROOT_LAYOUT_CLASSES};

/// Display parameters for [`BrandLogo`](crate::components::brand_logo::BrandLogo).
///
/// Field names follow the camelCase keys used by `window.__BRAND_CONFIG`.
/// Each key falls back to its default on its own when it is missing, null
/// or of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawLogoDisplayOptions")]
pub struct LogoDisplayOptions {
    /// Extra classes appended to the root container.
    pub css_class_name: String,
    /// Edge length of the square logo image, in CSS pixels.
    pub size: u32,
    /// Whether the wordmark and tagline are rendered next to the image.
    pub show_text: bool,
}

/// A config value that either parsed as `T` or was something else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawLogoDisplayOptions {
    #[serde(rename = "cssClassName")]
    css_class_name: Option<Lenient<String>>,
    size: Option<Lenient<u32>>,
    #[serde(rename = "showText")]
    show_text: Option<Lenient<bool>>,
}

fn field_or_default<T: Debug>(key: &str, value: Option<Lenient<T>>, default: T) -> T {
    match value {
        Some(Lenient::Valid(v)) => v,
        Some(Lenient::Invalid(_)) => {
            log::warn!("Ignoring invalid brand config value for `{key}`, using {default:?}");
            default
        }
        None => default,
    }
}

impl From<RawLogoDisplayOptions> for LogoDisplayOptions {
    fn from(raw: RawLogoDisplayOptions) -> Self {
        let defaults = Self::default();
        Self {
            css_class_name: field_or_default(
                "cssClassName",
                raw.css_class_name,
                defaults.css_class_name,
            ),
            size: field_or_default("size", raw.size, defaults.size),
            show_text: field_or_default("showText", raw.show_text, defaults.show_text),
        }
    }
}

impl Default for LogoDisplayOptions {
    fn default() -> Self {
        Self {
            css_class_name: String::new(),
            size: DEFAULT_LOGO_SIZE,
            show_text: true,
        }
    }
}

impl LogoDisplayOptions {
    /// Class attribute for the root container: the fixed layout classes,
    /// followed by the caller's classes when any were given.
    pub fn root_class(&self) -> String {
        root_class(&self.css_class_name)
    }
}

pub(crate) fn root_class(custom: &str) -> String {
    let custom = custom.trim();
    if custom.is_empty() {
        ROOT_LAYOUT_CLASSES.to_string()
    } else {
        format!("{ROOT_LAYOUT_CLASSES} {custom}")
    }
}
