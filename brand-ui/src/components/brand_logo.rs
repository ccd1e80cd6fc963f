/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

//! WarmConnect logo: the square brand image with an optional wordmark and
//! tagline stacked beside it.

use dioxus::prelude::*;

use crate::constants::{
    BRAND_NAME, DEFAULT_LOGO_SIZE, LOGO_SRC, TAGLINE, WORDMARK_LEAD, WORDMARK_TAIL,
};
use crate::types::{root_class, LogoDisplayOptions};

/// Brand logo. Every prop is optional.
#[component]
pub fn BrandLogo(
    /// Extra classes for the root container, appended after the layout classes.
    #[props(default)]
    css_class_name: String,
    /// Image width and height in pixels.
    #[props(default = DEFAULT_LOGO_SIZE)]
    size: u32,
    /// Render the wordmark and tagline next to the image.
    #[props(default = true)]
    show_text: bool,
) -> Element {
    let class = root_class(&css_class_name);

    rsx! {
        div { class: "{class}",
            img {
                class: "brand-logo-image",
                src: LOGO_SRC,
                alt: BRAND_NAME,
                width: "{size}",
                height: "{size}",
            }
            if show_text {
                div { class: "brand-logo-text flex flex-col",
                    span { class: "brand-logo-wordmark text-xl font-bold tracking-tight",
                        span { class: "brand-logo-wordmark-warm text-orange-500", "{WORDMARK_LEAD}" }
                        span { class: "brand-logo-wordmark-connect text-gray-900", "{WORDMARK_TAIL}" }
                    }
                    span { class: "brand-logo-tagline text-sm text-gray-500", "{TAGLINE}" }
                }
            }
        }
    }
}

/// [`BrandLogo`] driven by a whole [`LogoDisplayOptions`] value.
#[component]
pub fn BrandLogoWithOptions(options: LogoDisplayOptions) -> Element {
    rsx! {
        BrandLogo {
            css_class_name: options.css_class_name.clone(),
            size: options.size,
            show_text: options.show_text,
        }
    }
}
