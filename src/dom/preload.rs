//! `<details>` galleries: pre-fetch on intent, replay the open animation.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Event, HtmlDetailsElement, HtmlElement, HtmlImageElement};

use super::{Listener, preload_image, report, select_all, select_all_in, select_in};
use crate::consts::{DETAILS, JS_OPEN_CLASS, SLIDES};
use crate::error::Result;
use crate::preload::{DetailsToggle, Latch, distinct_sources};

pub fn install(document: &Document) -> Result<()> {
    let mut count = 0;
    for details in select_all::<HtmlDetailsElement>(document, DETAILS)? {
        let Some(slides) = select_in::<HtmlElement>(&details, SLIDES)? else {
            continue;
        };
        let gallery = Rc::new(Gallery { slides, intent: Cell::new(Latch::new()) });

        let on_toggle = Rc::clone(&gallery);
        let toggled = details.clone();
        Listener::new(&details, "toggle", move |_| {
            report("gallery", on_toggle.toggled(DetailsToggle::from_open(toggled.open())));
        })?
        .forget();

        for kind in ["pointerenter", "focusin"] {
            let on_intent = Rc::clone(&gallery);
            Listener::new(&details, kind, move |_: Event| on_intent.intent())?.forget();
        }
        let on_touch = Rc::clone(&gallery);
        Listener::passive(&details, "touchstart", move |_| on_touch.intent())?.forget();

        count += 1;
    }
    if count > 0 {
        log::debug!("gallery: watching {count} details blocks");
    }
    Ok(())
}

struct Gallery {
    slides: HtmlElement,
    intent: Cell<Latch>,
}

impl Gallery {
    fn preload(&self) -> Result<()> {
        let images: Vec<HtmlImageElement> = select_all_in(&self.slides, "img")?;
        for src in distinct_sources(images.iter().map(HtmlImageElement::src)) {
            preload_image(&src)?;
        }
        Ok(())
    }

    /// First hover, focus or touch fetches the gallery ahead of opening.
    fn intent(&self) {
        let mut latch = self.intent.get();
        let first = latch.fire();
        self.intent.set(latch);
        if first {
            report("gallery", self.preload());
        }
    }

    fn toggled(&self, toggle: DetailsToggle) -> Result<()> {
        let classes = self.slides.class_list();
        if toggle.wants_preload() {
            self.preload()?;
            classes.remove_1(JS_OPEN_CLASS)?;
            // Reading offsetHeight forces a reflow so the animation restarts.
            std::hint::black_box(self.slides.offset_height());
            classes.add_1(JS_OPEN_CLASS)?;
        } else {
            classes.remove_1(JS_OPEN_CLASS)?;
        }
        Ok(())
    }
}
