//! Calls into the page's script libraries and the few browser APIs the
//! controller's effects need. Every entry point checks that the library is
//! actually loaded and reports `PageError::MissingGlobal` otherwise.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{self, Function, Reflect};
use web_sys::{Document, Element};

use crate::animation::{
    hero_chars_tween, hero_followup_tween, section_reveal_tween, smooth_scroll_easing,
    SmoothScrollOptions, HERO_FOLLOWUP_SELECTOR, HERO_SPLIT, HERO_TITLE_ID,
    REVEAL_SECTION_SELECTOR, REVEAL_TARGET_SELECTOR,
};
use crate::error::PageError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = lucide, js_name = createIcons)]
    fn lucide_create_icons();

    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = from)]
    fn gsap_from(targets: &JsValue, vars: &JsValue);

    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = update)]
    fn scroll_trigger_update();
}

#[wasm_bindgen]
extern "C" {
    type Lenis;

    #[wasm_bindgen(constructor)]
    fn new(options: &JsValue) -> Lenis;

    #[wasm_bindgen(method)]
    fn raf(this: &Lenis, time: f64);

    #[wasm_bindgen(method)]
    fn on(this: &Lenis, event: &str, callback: &Function);
}

#[wasm_bindgen]
extern "C" {
    type SplitType;

    #[wasm_bindgen(constructor)]
    fn new(target: &Element, options: &JsValue) -> SplitType;

    #[wasm_bindgen(method, getter)]
    fn chars(this: &SplitType) -> JsValue;
}

fn has_global(name: &str) -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(false)
}

fn require(name: &'static str) -> Result<(), PageError> {
    if has_global(name) {
        Ok(())
    } else {
        Err(PageError::MissingGlobal(name))
    }
}

fn js_err(e: JsValue) -> PageError {
    PageError::Interop(format!("{:?}", e))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, PageError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| PageError::Interop(e.to_string()))
}

fn document() -> Result<Document, PageError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PageError::MissingElement("document"))
}

/// Materialises `data-lucide` placeholders. Safe to call repeatedly.
pub fn render_icons() -> Result<(), PageError> {
    require("lucide")?;
    lucide_create_icons();
    Ok(())
}

/// Creates the smooth scroller, forwards its scroll events to ScrollTrigger
/// and pumps it from `requestAnimationFrame` for the life of the page.
pub fn start_smooth_scroll() -> Result<(), PageError> {
    require("Lenis")?;

    let options = to_js(&SmoothScrollOptions::default())?;
    let easing = Closure::<dyn Fn(f64) -> f64>::new(smooth_scroll_easing);
    Reflect::set(&options, &JsValue::from_str("easing"), easing.as_ref()).map_err(js_err)?;
    easing.forget();

    let lenis = Lenis::new(&options);
    if has_global("ScrollTrigger") {
        let on_scroll = Closure::<dyn Fn()>::new(scroll_trigger_update);
        lenis.on("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    }
    pump_frames(lenis)
}

fn pump_frames(lenis: Lenis) -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::MissingElement("window"))?;
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move |time: f64| {
        lenis.raf(time);
        if let (Some(window), Some(callback)) = (web_sys::window(), next.borrow().as_ref()) {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
    }
    Ok(())
}

/// Splits the hero heading into characters and plays the entrance tweens.
pub fn animate_hero() -> Result<(), PageError> {
    require("gsap")?;
    require("SplitType")?;

    let title = document()?
        .get_element_by_id(HERO_TITLE_ID)
        .ok_or(PageError::MissingElement("#hero-title"))?;
    let split = SplitType::new(&title, &to_js(&HERO_SPLIT)?);
    gsap_from(&split.chars(), &to_js(&hero_chars_tween())?);
    gsap_from(
        &JsValue::from_str(HERO_FOLLOWUP_SELECTOR),
        &to_js(&hero_followup_tween())?,
    );
    Ok(())
}

/// Registers a play-once reveal for every non-hero section that has
/// something to animate. Returns how many sections were wired.
pub fn reveal_sections() -> Result<u32, PageError> {
    require("gsap")?;
    require("ScrollTrigger")?;
    let plugin =
        Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger")).map_err(js_err)?;
    gsap_register_plugin(&plugin);

    let sections = document()?
        .query_selector_all(REVEAL_SECTION_SELECTOR)
        .map_err(js_err)?;
    let mut wired = 0;
    for i in 0..sections.length() {
        let Some(section) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let targets = section
            .query_selector_all(REVEAL_TARGET_SELECTOR)
            .map_err(js_err)?;
        if targets.length() == 0 {
            continue;
        }

        let vars = to_js(&section_reveal_tween())?;
        let trigger = Reflect::get(&vars, &JsValue::from_str("scrollTrigger")).map_err(js_err)?;
        Reflect::set(&trigger, &JsValue::from_str("trigger"), &section).map_err(js_err)?;
        gsap_from(&targets, &vars);
        wired += 1;
    }
    Ok(wired)
}

pub fn alert(message: &str) -> Result<(), PageError> {
    web_sys::window()
        .ok_or(PageError::MissingElement("window"))?
        .alert_with_message(message)
        .map_err(js_err)
}

pub fn set_scroll_lock(locked: bool) -> Result<(), PageError> {
    let body = document()?.body().ok_or(PageError::MissingElement("body"))?;
    body.style()
        .set_property("overflow", if locked { "hidden" } else { "" })
        .map_err(js_err)
}

pub fn scroll_y() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}
