//! Read-more toggles for `.testimonial` paragraphs.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, MutationObserver, MutationObserverInit, MutationRecord, Window};

use super::{Listener, create, report, select_all, select_in};
use crate::config::ReadMoreConfig;
use crate::consts::{
    COLLAPSED_CLASS, READ_MORE_APPLIED_ATTR, READ_MORE_BUTTON_CLASS, TESTIMONIAL, TESTIMONIAL_PARAGRAPH, TESTIMONIALS,
};
use crate::error::Result;
use crate::read_more::{ReadMoreToggle, ScanDecision, ToggleLabels, ToggleView, plan};

/// Scan the page now, again on window `load`, and whenever testimonials are
/// inserted under `.testimonials`.
pub fn install(document: &Document, window: &Window, config: &ReadMoreConfig) -> Result<()> {
    let scanner = Rc::new(Scanner {
        document: document.clone(),
        window: window.clone(),
        threshold_px: config.threshold_px,
        labels: config.labels(),
        pending: RefCell::new(None),
    });
    scanner.scan()?;

    let on_load = Rc::clone(&scanner);
    Listener::new(window, "load", move |_| report("read-more", on_load.scan()))?.forget();

    if let Some(container) = document.query_selector(TESTIMONIALS)? {
        observe(&scanner, &container, config.settle_ms)?;
    }
    Ok(())
}

struct Scanner {
    document: Document,
    window: Window,
    threshold_px: f64,
    labels: ToggleLabels,
    /// Settling timer for the latest insertion burst. Replacing it cancels
    /// the previous one.
    pending: RefCell<Option<Timeout>>,
}

impl Scanner {
    fn scan(&self) -> Result<()> {
        let mut collapsed = 0;
        for testimonial in select_all::<Element>(&self.document, TESTIMONIAL)? {
            let applied = testimonial.get_attribute(READ_MORE_APPLIED_ATTR).as_deref() == Some("true");
            let paragraph = select_in::<HtmlElement>(&testimonial, TESTIMONIAL_PARAGRAPH)?;
            let height = paragraph.as_ref().map(|p| f64::from(p.scroll_height()));

            match (plan(applied, height, self.threshold_px), paragraph) {
                (ScanDecision::Skip, _) => continue,
                (ScanDecision::Collapse, Some(p)) => {
                    self.attach(&p)?;
                    collapsed += 1;
                }
                _ => {}
            }
            testimonial.set_attribute(READ_MORE_APPLIED_ATTR, "true")?;
        }
        if collapsed > 0 {
            log::debug!("read-more: collapsed {collapsed} testimonials");
        }
        Ok(())
    }

    fn attach(&self, paragraph: &HtmlElement) -> Result<()> {
        let Some(parent) = paragraph.parent_node() else {
            return Ok(());
        };
        let toggle = ReadMoreToggle::new(self.labels.clone());

        let button: HtmlElement = create(&self.document, "button", READ_MORE_BUTTON_CLASS)?;
        button.set_attribute("type", "button")?;
        paint_button(&button, &toggle.view())?;

        let state = RefCell::new(toggle);
        let (p, b) = (paragraph.clone(), button.clone());
        Listener::new(&button, "click", move |_| {
            let mut toggle = state.borrow_mut();
            let view = toggle.toggle();
            report("read-more", paint(&p, &b, &view));
        })?
        .forget();

        parent.insert_before(&button, paragraph.next_sibling().as_ref())?;

        // Start expanded and collapse after the next paint so the max-height
        // transition runs.
        paragraph.class_list().remove_1(COLLAPSED_CLASS)?;
        let p = paragraph.clone();
        after_two_frames(&self.window, move || {
            report("read-more", p.class_list().add_1(COLLAPSED_CLASS).map_err(Into::into));
        })
    }

    fn schedule(self: &Rc<Self>, delay_ms: u32) {
        let scanner: Weak<Self> = Rc::downgrade(self);
        let timer = Timeout::new(delay_ms, move || {
            if let Some(scanner) = scanner.upgrade() {
                report("read-more", scanner.scan());
            }
        });
        *self.pending.borrow_mut() = Some(timer);
    }
}

fn paint_button(button: &HtmlElement, view: &ToggleView<'_>) -> Result<()> {
    button.set_text_content(Some(view.label));
    button.set_attribute("aria-expanded", view.aria_expanded)?;
    Ok(())
}

fn paint(paragraph: &HtmlElement, button: &HtmlElement, view: &ToggleView<'_>) -> Result<()> {
    paragraph.class_list().toggle_with_force(COLLAPSED_CLASS, view.collapsed)?;
    paint_button(button, view)
}

fn observe(scanner: &Rc<Scanner>, container: &Element, settle_ms: u32) -> Result<()> {
    let scanner = Rc::clone(scanner);
    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |records: js_sys::Array, _observer: MutationObserver| {
            let added = records
                .iter()
                .filter_map(|record| record.dyn_ref::<MutationRecord>().cloned())
                .any(|record| record.type_() == "childList" && record.added_nodes().length() > 0);
            if added {
                scanner.schedule(settle_ms);
            }
        },
    );
    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer.observe_with_options(container, &options)?;
    callback.forget();
    Ok(())
}

/// Run `f` after two animation frames, i.e. once the current layout has been
/// painted.
fn after_two_frames<F>(window: &Window, f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let inner_window = window.clone();
    let outer = Closure::once_into_js(move || {
        let inner = Closure::once_into_js(f);
        if let Err(err) = inner_window.request_animation_frame(inner.unchecked_ref()) {
            log::warn!("read-more: animation frame failed: {err:?}");
        }
    });
    window.request_animation_frame(outer.unchecked_ref())?;
    Ok(())
}
