//! Configuration handed to the animation and scrolling libraries.
//!
//! Everything here is plain data; `interop` turns it into JS objects.

use serde::Serialize;

pub const HERO_TITLE_ID: &str = "hero-title";
pub const HERO_FOLLOWUP_SELECTOR: &str = ".hero__subtitle, .hero__actions";
pub const REVEAL_SECTION_SELECTOR: &str = "section:not(#hero)";
pub const REVEAL_TARGET_SELECTOR: &str = ".section-title, .feature-card, .post-card, .section-text, .contact__form-container, .feature-list li, .innovations__wrapper";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothScrollOptions {
    pub duration: f64,
    pub smooth_wheel: bool,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            duration: 1.2,
            smooth_wheel: true,
        }
    }
}

/// Exponential ease-out used by the smooth scroller.
pub fn smooth_scroll_easing(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitOptions {
    pub types: &'static str,
    pub tag_name: &'static str,
}

pub const HERO_SPLIT: SplitOptions = SplitOptions {
    types: "words, chars",
    tag_name: "span",
};

/// Trigger settings for a viewport-threshold animation. The trigger element
/// itself is attached on the JS side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerVars {
    pub start: &'static str,
    pub toggle_actions: &'static str,
}

/// Starting state of a `from` tween; targets animate to their natural state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TweenVars {
    pub opacity: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_x: Option<f64>,
    pub stagger: f64,
    pub duration: f64,
    pub ease: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_props: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_trigger: Option<ScrollTriggerVars>,
}

pub fn hero_chars_tween() -> TweenVars {
    TweenVars {
        opacity: 0.0,
        y: 40.0,
        rotate_x: Some(-60.0),
        stagger: 0.02,
        duration: 1.2,
        ease: "power4.out",
        delay: Some(0.5),
        clear_props: None,
        scroll_trigger: None,
    }
}

pub fn hero_followup_tween() -> TweenVars {
    TweenVars {
        opacity: 0.0,
        y: 20.0,
        rotate_x: None,
        stagger: 0.2,
        duration: 1.0,
        ease: "power3.out",
        delay: Some(1.3),
        clear_props: None,
        scroll_trigger: None,
    }
}

/// Plays once when the section's top reaches 82% of the viewport height.
pub fn section_reveal_tween() -> TweenVars {
    TweenVars {
        opacity: 0.0,
        y: 40.0,
        rotate_x: None,
        stagger: 0.12,
        duration: 0.8,
        ease: "power2.out",
        delay: None,
        clear_props: Some("all"),
        scroll_trigger: Some(ScrollTriggerVars {
            start: "top 82%",
            toggle_actions: "play none none none",
        }),
    }
}
