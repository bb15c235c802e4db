//! Browser shell: binds the widget cores to the page.
//!
//! Each submodule discovers its markup by selector, builds a core, and wires
//! DOM events into it. Nothing here holds widget logic; handlers translate an
//! event into a core call and paint the result.

pub mod lightbox;
pub mod preload;
pub mod read_more;
pub mod slider;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlImageElement, NodeList, TouchEvent};

use crate::config::WidgetConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::error::{Result, WidgetError};

/// Log a failed handler or installer instead of propagating it.
pub fn report(scope: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("{scope}: {err}");
    }
}

/// Read the optional JSON override block from the page.
pub fn load_config(document: &Document) -> Result<WidgetConfig> {
    match document.get_element_by_id(CONFIG_SCRIPT_ID) {
        Some(script) => WidgetConfig::from_json(&script.text_content().unwrap_or_default()),
        None => Ok(WidgetConfig::default()),
    }
}

// ── Queries ─────────────────────────────────────────────────────

/// All elements under `document` matching `selector` that cast to `T`.
pub fn select_all<T: JsCast + Clone>(document: &Document, selector: &str) -> Result<Vec<T>> {
    Ok(collect(&document.query_selector_all(selector)?))
}

/// All elements under `root` matching `selector` that cast to `T`.
pub fn select_all_in<T: JsCast + Clone>(root: &Element, selector: &str) -> Result<Vec<T>> {
    Ok(collect(&root.query_selector_all(selector)?))
}

/// First element under `root` matching `selector` that casts to `T`.
pub fn select_in<T: JsCast + Clone>(root: &Element, selector: &str) -> Result<Option<T>> {
    Ok(root.query_selector(selector)?.and_then(|el| el.dyn_ref::<T>().cloned()))
}

/// Direct element children of `parent`.
#[must_use]
pub fn children(parent: &Element) -> Vec<Element> {
    let list = parent.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

fn collect<T: JsCast + Clone>(list: &NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<T>().cloned())
        .collect()
}

// ── Construction ────────────────────────────────────────────────

/// Create `<tag class="...">` cast to `T`.
pub fn create<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    el.dyn_into::<T>()
        .map_err(|_| WidgetError::Dom(format!("<{tag}> is not the expected element type")))
}

/// Start fetching `src` without attaching it anywhere. The browser cache does
/// the rest; load errors are ignored.
pub fn preload_image(src: &str) -> Result<()> {
    if src.is_empty() {
        return Ok(());
    }
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(())
}

/// Number of active touches and the first touch's client x.
#[must_use]
pub fn first_touch(event: &Event) -> Option<(u32, f64)> {
    let touches = event.dyn_ref::<TouchEvent>()?.touches();
    let first = touches.get(0)?;
    Some((touches.length(), f64::from(first.client_x())))
}

// ── Listeners ───────────────────────────────────────────────────

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::with_options(target, kind, handler, &AddEventListenerOptions::new())
    }

    /// A listener that promises never to call `preventDefault`.
    pub fn passive<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        Self::with_options(target, kind, handler, &options)
    }

    fn with_options<F>(target: &EventTarget, kind: &'static str, handler: F, options: &AddEventListenerOptions) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            options,
        )?;
        Ok(Self { target: target.clone(), kind, callback: Some(callback) })
    }

    /// Keep the listener attached for the rest of the page's lifetime.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let Some(callback) = self.callback.take() else {
            return;
        };
        if let Err(err) = self.target.remove_event_listener_with_callback(self.kind, callback.as_ref().unchecked_ref()) {
            log::warn!("removing {} listener failed: {}", self.kind, WidgetError::from(err));
        }
    }
}
