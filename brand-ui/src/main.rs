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

use brand_ui::components::brand_logo::BrandLogoWithOptions;
use brand_ui::constants::brand_config_or_default;
use dioxus::prelude::*;

/// App root component
#[component]
fn App() -> Element {
    // Config is read once; the logo itself re-derives everything per render.
    let options = use_hook(brand_config_or_default);

    rsx! {
        header { class: "brand-header",
            BrandLogoWithOptions { options }
        }
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    console_error_panic_hook::set_once();
    log::info!("Starting brand-ui");
    dioxus::launch(App);
}
