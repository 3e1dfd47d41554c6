use crate::timers::{Task, TimerId};

/// Side effects a state transition asks the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Schedule { id: TimerId, task: Task, delay_ms: u32 },
    Cancel(TimerId),
    /// Blocking user-visible alert.
    Alert(String),
    /// Page scroll locked (`overflow: hidden` on the body) or released.
    LockScroll(bool),
    PersistConsent { key: String, value: String },
    RenderIcons,
    StartSmoothScroll,
    AnimateHero,
    RevealSections,
}

/// Result of dispatching one event.
#[derive(Debug, Default, PartialEq)]
pub struct Outcome {
    pub effects: Vec<Effect>,
    /// Visible state changed and the view should re-render.
    pub changed: bool,
}

impl Outcome {
    pub fn unchanged() -> Self {
        Self::default()
    }

    pub fn changed(effects: Vec<Effect>) -> Self {
        Self { effects, changed: true }
    }
}
