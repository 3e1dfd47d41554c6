//! Interactive layer of the Octa-Cell landing page: mobile menu, captcha
//! gated contact form, cookie banner, header scroll style and the wiring of
//! the page's animation libraries.
//!
//! The state machines are plain Rust and run anywhere; `app`, `interop`,
//! `storage` and `components` are the browser side.

pub mod animation;
pub mod app;
pub mod captcha;
pub mod config;
pub mod consent;
pub mod controller;
pub mod effects;
pub mod error;
pub mod header;
pub mod interop;
pub mod menu;
pub mod storage;
pub mod submission;
pub mod timers;

pub mod components {
    pub mod contact_form;
    pub mod cookie_popup;
    pub mod hero;
    pub mod sections;
    pub mod site_header;
}

pub use app::App;
pub use config::{PageConfig, PageLayout};
pub use controller::{PageController, PageEvent};
pub use effects::{Effect, Outcome};
pub use error::{CaptchaError, PageError};
