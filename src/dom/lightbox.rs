//! Lightbox overlay bound to `.slides img`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent, Window};

use super::{Listener, create, first_touch, preload_image, report, select_all};
use crate::capability::PointerCapability;
use crate::config::LightboxConfig;
use crate::consts::{
    OVERLAY_CLASS, OVERLAY_CLOSE_CLASS, OVERLAY_CONTROLS_CLASS, OVERLAY_IMAGE_CLASS, OVERLAY_NEXT_CLASS,
    OVERLAY_PREV_CLASS, SLIDE_IMAGES,
};
use crate::error::{Result, WidgetError};
use crate::lightbox::{Action, LightboxCore, OverlayKey, Slide, is_activation_key};

/// Attach the lightbox to every slide image on the page.
///
/// Does nothing when the page has no slide images. On touch-first devices the
/// images only lose their `tabindex`, leaving the wrapping anchors to open the
/// image natively.
pub fn install(document: &Document, window: &Window, config: &LightboxConfig) -> Result<()> {
    let images: Vec<HtmlImageElement> = select_all(document, SLIDE_IMAGES)?;
    if images.is_empty() {
        return Ok(());
    }
    super::preload::install(document)?;

    if !PointerCapability::detect(window).wants_overlay() {
        for img in &images {
            img.remove_attribute("tabindex")?;
        }
        log::info!("lightbox: coarse pointer, leaving {} images to the browser", images.len());
        return Ok(());
    }

    let slides = images.iter().map(|img| Slide::new(img.src(), img.alt())).collect();
    let lightbox = Rc::new(Lightbox {
        document: document.clone(),
        core: RefCell::new(LightboxCore::new(slides, config.swipe())),
        overlay: RefCell::new(None),
    });

    for (index, img) in images.iter().enumerate() {
        let on_click = Rc::clone(&lightbox);
        match img.closest("a")? {
            Some(link) => Listener::new(&link, "click", move |ev: Event| {
                ev.prevent_default();
                on_click.dispatch(|core| core.open(index));
            })?
            .forget(),
            None => Listener::new(img, "click", move |_| on_click.dispatch(|core| core.open(index)))?.forget(),
        }

        let on_key = Rc::clone(&lightbox);
        Listener::new(img, "keydown", move |ev: Event| {
            let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if is_activation_key(&key) {
                ev.prevent_default();
                on_key.dispatch(|core| core.open(index));
            }
        })?
        .forget();
    }

    log::info!("lightbox: attached to {} images", images.len());
    Ok(())
}

struct Lightbox {
    document: Document,
    core: RefCell<LightboxCore>,
    overlay: RefCell<Option<Overlay>>,
}

impl Lightbox {
    /// Run a core operation and paint its actions.
    fn dispatch<F>(self: &Rc<Self>, op: F)
    where
        F: FnOnce(&mut LightboxCore) -> Vec<Action>,
    {
        let actions = op(&mut self.core.borrow_mut());
        for action in actions {
            report("lightbox", self.apply(action));
        }
    }

    fn apply(self: &Rc<Self>, action: Action) -> Result<()> {
        match action {
            Action::MountOverlay => {
                let overlay = Overlay::mount(self)?;
                *self.overlay.borrow_mut() = Some(overlay);
                log::debug!("lightbox: opened");
            }
            Action::ShowImage { src, alt } => {
                if let Some(overlay) = self.overlay.borrow().as_ref() {
                    overlay.image.set_src(&src);
                    overlay.image.set_alt(&alt);
                    log::debug!("lightbox: showing {src}");
                }
            }
            Action::Preload(src) => preload_image(&src)?,
            Action::UnmountOverlay => {
                drop(self.overlay.borrow_mut().take());
                log::debug!("lightbox: closed");
            }
        }
        Ok(())
    }
}

/// Run `op` against the lightbox if it is still alive.
fn dispatch_weak<F>(lightbox: &Weak<Lightbox>, op: F)
where
    F: FnOnce(&mut LightboxCore) -> Vec<Action>,
{
    if let Some(lightbox) = lightbox.upgrade() {
        lightbox.dispatch(op);
    }
}

/// The mounted overlay. Dropping it detaches the markup and every listener,
/// including the document-level keydown handler.
struct Overlay {
    root: HtmlElement,
    image: HtmlImageElement,
    _listeners: Vec<Listener>,
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.root.remove();
    }
}

impl Overlay {
    fn mount(lightbox: &Rc<Lightbox>) -> Result<Self> {
        let document = &lightbox.document;

        let root: HtmlElement = create(document, "div", OVERLAY_CLASS)?;
        root.set_attribute("role", "dialog")?;
        root.set_attribute("aria-modal", "true")?;
        root.set_tab_index(-1);

        let image: HtmlImageElement = create(document, "img", OVERLAY_IMAGE_CLASS)?;
        image.set_alt("");
        root.append_child(&image)?;

        let controls: HtmlElement = create(document, "div", OVERLAY_CONTROLS_CLASS)?;
        let prev = button(document, OVERLAY_PREV_CLASS, "\u{276E}", "Previous", "Previous slide")?;
        let next = button(document, OVERLAY_NEXT_CLASS, "\u{276F}", "Next", "Next slide")?;
        controls.append_child(&prev)?;
        controls.append_child(&next)?;
        root.append_child(&controls)?;

        let close = button(document, OVERLAY_CLOSE_CLASS, "\u{2715}", "Close", "Close")?;
        root.append_child(&close)?;

        let weak = Rc::downgrade(lightbox);
        let mut listeners = Vec::with_capacity(8);

        // Only clicks on the backdrop itself close the overlay.
        let backdrop: EventTarget = root.clone().into();
        let lb = weak.clone();
        listeners.push(Listener::new(&root, "click", move |ev: Event| {
            if ev.target().is_some_and(|target| target == backdrop) {
                dispatch_weak(&lb, LightboxCore::close);
            }
        })?);

        listeners.push(control(&prev, &weak, LightboxCore::prev)?);
        listeners.push(control(&next, &weak, LightboxCore::next)?);
        listeners.push(control(&close, &weak, LightboxCore::close)?);

        let lb = weak.clone();
        listeners.push(Listener::passive(&root, "touchstart", move |ev: Event| {
            if let Some((touches, x)) = first_touch(&ev) {
                dispatch_weak(&lb, |core| {
                    core.on_touch_start(touches, x);
                    Vec::new()
                });
            }
        })?);

        let lb = weak.clone();
        listeners.push(Listener::passive(&root, "touchmove", move |ev: Event| {
            if let Some((touches, x)) = first_touch(&ev) {
                dispatch_weak(&lb, |core| {
                    core.on_touch_move(touches, x);
                    Vec::new()
                });
            }
        })?);

        let lb = weak.clone();
        listeners.push(Listener::new(&root, "touchend", move |_| dispatch_weak(&lb, LightboxCore::on_touch_end))?);

        let lb = weak;
        listeners.push(Listener::new(document, "keydown", move |ev: Event| {
            let key = ev.dyn_ref::<KeyboardEvent>().and_then(|kev| OverlayKey::parse(&kev.key()));
            if let Some(key) = key {
                dispatch_weak(&lb, |core| core.on_key(key));
            }
        })?);

        document.body().ok_or(WidgetError::MissingNode("body"))?.append_child(&root)?;
        root.focus()?;

        Ok(Self { root, image, _listeners: listeners })
    }
}

fn button(document: &Document, class: &str, glyph: &str, title: &str, label: &str) -> Result<HtmlElement> {
    let btn: HtmlElement = create(document, "button", class)?;
    btn.set_text_content(Some(glyph));
    btn.set_title(title);
    btn.set_attribute("aria-label", label)?;
    Ok(btn)
}

/// Overlay button: handles the click itself so the backdrop never sees it.
fn control(btn: &HtmlElement, lightbox: &Weak<Lightbox>, op: fn(&mut LightboxCore) -> Vec<Action>) -> Result<Listener> {
    let lb = lightbox.clone();
    Listener::new(btn, "click", move |ev: Event| {
        ev.stop_propagation();
        dispatch_weak(&lb, op);
    })
}
