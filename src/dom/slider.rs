//! Testimonial slider bound to `.testimonial-slider`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Event, HtmlElement, Window};

use super::{Listener, children, create, first_touch, report, select_in};
use crate::config::SliderConfig;
use crate::consts::{ACTIVE_CLASS, DOT_CLASS, SLIDER, SLIDER_DOTS, SLIDER_NEXT, SLIDER_PREV, SLIDER_TRACK, SLIDER_VIEWPORT};
use crate::error::{Result, WidgetError};
use crate::slider::{SliderCore, SliderFrame, dot_label};

pub fn install(document: &Document, window: &Window, config: &SliderConfig) -> Result<()> {
    let Some(root) = document.query_selector(SLIDER)? else {
        return Ok(());
    };
    let Some(track) = select_in::<HtmlElement>(&root, SLIDER_TRACK)? else {
        return Ok(());
    };
    let slides = children(&track);
    if slides.is_empty() {
        return Ok(());
    }
    let viewport = root.query_selector(SLIDER_VIEWPORT)?.ok_or(WidgetError::MissingNode(SLIDER_VIEWPORT))?;
    let dots_wrap = match root.query_selector(SLIDER_DOTS)? {
        Some(wrap) => wrap,
        None => document.query_selector(SLIDER_DOTS)?.ok_or(WidgetError::MissingNode(SLIDER_DOTS))?,
    };

    let mut dots = Vec::with_capacity(slides.len());
    for i in 0..slides.len() {
        let dot: HtmlElement = create(document, "button", DOT_CLASS)?;
        dot.set_attribute("aria-label", &dot_label(i))?;
        dots_wrap.append_child(&dot)?;
        dots.push(dot);
    }

    let width = f64::from(viewport.client_width());
    let slider = Rc::new(Slider {
        core: RefCell::new(SliderCore::new(slides.len(), width, config.swipe())),
        track,
        slides,
        dots,
        viewport,
    });

    for (i, dot) in slider.dots.iter().enumerate() {
        let s = Rc::clone(&slider);
        Listener::new(dot, "click", move |_| s.update(|core| core.jump(i)))?.forget();
    }
    if let Some(prev) = root.query_selector(SLIDER_PREV)? {
        let s = Rc::clone(&slider);
        Listener::new(&prev, "click", move |_| s.update(SliderCore::prev))?.forget();
    }
    if let Some(next) = root.query_selector(SLIDER_NEXT)? {
        let s = Rc::clone(&slider);
        Listener::new(&next, "click", move |_| s.update(SliderCore::next))?.forget();
    }

    let s = Rc::clone(&slider);
    Listener::new(window, "resize", move |_| {
        let width = s.measure();
        s.update(|core| core.resize(width));
    })?
    .forget();

    let s = Rc::clone(&slider);
    Listener::passive(&root, "touchstart", move |ev: Event| {
        if let Some((touches, x)) = first_touch(&ev) {
            s.core.borrow_mut().on_touch_start(touches, x);
        }
    })?
    .forget();
    let s = Rc::clone(&slider);
    Listener::passive(&root, "touchmove", move |ev: Event| {
        if let Some((touches, x)) = first_touch(&ev) {
            s.core.borrow_mut().on_touch_move(touches, x);
        }
    })?
    .forget();
    let s = Rc::clone(&slider);
    Listener::new(&root, "touchend", move |_| {
        let frame = s.core.borrow_mut().on_touch_end();
        if let Some(frame) = frame {
            report("slider", s.render(&frame));
        }
    })?
    .forget();

    let frame = slider.core.borrow().frame();
    slider.render(&frame)?;
    log::info!("slider: {} testimonials", slider.slides.len());
    Ok(())
}

struct Slider {
    core: RefCell<SliderCore>,
    track: HtmlElement,
    slides: Vec<Element>,
    dots: Vec<HtmlElement>,
    viewport: Element,
}

impl Slider {
    fn measure(&self) -> f64 {
        f64::from(self.viewport.client_width())
    }

    fn update<F>(&self, op: F)
    where
        F: FnOnce(&mut SliderCore) -> SliderFrame,
    {
        let frame = op(&mut self.core.borrow_mut());
        log::debug!("slider: showing {} of {}", frame.active + 1, frame.count);
        report("slider", self.render(&frame));
    }

    fn render(&self, frame: &SliderFrame) -> Result<()> {
        self.track.style().set_property("transform", &frame.transform())?;
        for (i, dot) in self.dots.iter().enumerate() {
            dot.class_list().toggle_with_force(ACTIVE_CLASS, frame.is_active(i))?;
        }
        for (i, slide) in self.slides.iter().enumerate() {
            slide.set_attribute("aria-hidden", frame.aria_hidden(i))?;
        }
        Ok(())
    }
}
