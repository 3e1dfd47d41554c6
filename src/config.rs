use log::Level;
use serde::Deserialize;

use crate::error::PageError;

/// Element id of the optional inline JSON block overriding [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose transitions while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Which optional parts of the page exist in this variant of the markup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub consent_banner: bool,
    pub mobile_menu: bool,
    pub contact_form: bool,
    pub hero_title: bool,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            consent_banner: true,
            mobile_menu: true,
            contact_form: true,
            hero_title: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub consent_delay_ms: u32,
    pub submit_latency_ms: u32,
    pub status_display_ms: u32,
    pub status_fade_ms: u32,
    pub header_threshold_px: f64,
    pub storage_key: String,
    pub captcha_alert: String,
    pub busy_label: String,
    pub submit_label: String,
    pub success_message: String,
    pub layout: PageLayout,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            consent_delay_ms: 3_000,
            submit_latency_ms: 1_800,
            status_display_ms: 6_000,
            status_fade_ms: 500,
            header_threshold_px: 100.0,
            storage_key: "octa_cookies_accepted".to_string(),
            captcha_alert: "Error: please solve the math example correctly!".to_string(),
            busy_label: "Sending data...".to_string(),
            submit_label: "Send request".to_string(),
            success_message: "Request sent successfully! We will contact you soon.".to_string(),
            layout: PageLayout::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the inline config block if the page has one. Missing block or
    /// bad JSON both end up as defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => match Self::from_json(&raw) {
                Ok(config) => {
                    log::info!("Loaded page config from #{}", CONFIG_ELEMENT_ID);
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring page config: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
