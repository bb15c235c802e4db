//! Page widgets for a static site, compiled to WebAssembly.
//!
//! Loading the module installs three independent widgets on the existing
//! markup: an image lightbox, a testimonial slider and read-more toggles for
//! long testimonials. Each widget is split into a DOM-free core that owns its
//! state (and is unit tested natively) and a thin `web-sys` shell under
//! [`dom`] that wires page events into it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`lightbox`] | Overlay navigation state and the actions it emits |
//! | [`slider`] | Testimonial slider index, offsets and frames |
//! | [`read_more`] | Collapse decisions and toggle state |
//! | [`preload`] | Gallery pre-fetch helpers for `<details>` blocks |
//! | [`gesture`] | Horizontal swipe recognition |
//! | [`pager`] | Circular index arithmetic |
//! | [`capability`] | Fine/coarse pointer detection |
//! | [`config`] | Typed configuration with page overrides |
//! | [`error`] | Shell error type |
//! | [`dom`] | Browser bindings for all of the above |
//! | [`consts`] | Thresholds, timings and selectors |

pub mod capability;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod gesture;
pub mod lightbox;
pub mod pager;
pub mod preload;
pub mod read_more;
pub mod slider;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Window};

use crate::config::WidgetConfig;
use crate::dom::report;

/// Module entry point, run once when the page loads the wasm bundle.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, config_error) = match dom::load_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (WidgetConfig::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::warn_1(&format!("site-widgets: logger unavailable: {err}").into());
    }
    if let Some(err) = config_error {
        log::warn!("config: {err}; using defaults");
    }

    install(&window, &document, &config);
}

/// Install every enabled widget. A widget that fails is logged and skipped.
pub fn install(window: &Window, document: &Document, config: &WidgetConfig) {
    if config.lightbox.enabled {
        report("lightbox", dom::lightbox::install(document, window, &config.lightbox));
    }
    if config.slider.enabled {
        report("slider", dom::slider::install(document, window, &config.slider));
    }
    if config.read_more.enabled {
        report("read-more", dom::read_more::install(document, window, &config.read_more));
    }
}
