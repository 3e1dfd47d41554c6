use crate::effects::Effect;
use crate::timers::{Task, TimerId, TimerIds};

pub const ACCEPTED_VALUE: &str = "true";

/// Cookie banner shown once per browsing profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentBanner {
    key: String,
    delay_ms: u32,
    accepted: bool,
    visible: bool,
    pending: Option<TimerId>,
}

impl ConsentBanner {
    /// `stored` is whatever durable storage holds under `key`; any value at
    /// all means the visitor already accepted.
    pub fn new(key: impl Into<String>, delay_ms: u32, stored: Option<String>) -> Self {
        Self {
            key: key.into(),
            delay_ms,
            accepted: stored.is_some(),
            visible: false,
            pending: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn maybe_show(&mut self, ids: &mut TimerIds) -> Vec<Effect> {
        if self.accepted || self.pending.is_some() {
            return Vec::new();
        }
        let id = ids.allocate();
        self.pending = Some(id);
        vec![Effect::Schedule {
            id,
            task: Task::ShowConsentBanner,
            delay_ms: self.delay_ms,
        }]
    }

    /// Returns whether the banner became visible.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) {
            log::debug!("Ignoring stale consent timer {:?}", id);
            return false;
        }
        self.pending = None;
        if self.accepted {
            return false;
        }
        self.visible = true;
        true
    }

    pub fn accept(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(id) = self.pending.take() {
            effects.push(Effect::Cancel(id));
        }
        self.visible = false;
        self.accepted = true;
        effects.push(Effect::PersistConsent {
            key: self.key.clone(),
            value: ACCEPTED_VALUE.to_string(),
        });
        log::info!("Cookie consent accepted");
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled_id(effects: &[Effect]) -> TimerId {
        match effects {
            [Effect::Schedule { id, task: Task::ShowConsentBanner, delay_ms: 3_000 }] => *id,
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn shows_after_timer_then_accept_persists() {
        let mut ids = TimerIds::default();
        let mut banner = ConsentBanner::new("k", 3_000, None);
        let id = scheduled_id(&banner.maybe_show(&mut ids));
        assert!(!banner.is_visible());

        assert!(banner.on_timer(id));
        assert!(banner.is_visible());

        let effects = banner.accept();
        assert_eq!(
            effects,
            vec![Effect::PersistConsent { key: "k".into(), value: "true".into() }]
        );
        assert!(!banner.is_visible());
    }

    #[test]
    fn any_stored_value_skips_the_banner() {
        let mut ids = TimerIds::default();
        let mut banner = ConsentBanner::new("k", 3_000, Some("yes".into()));
        assert!(banner.maybe_show(&mut ids).is_empty());
        assert!(!banner.is_visible());
    }

    #[test]
    fn accepting_early_cancels_pending_show() {
        let mut ids = TimerIds::default();
        let mut banner = ConsentBanner::new("k", 3_000, None);
        let id = scheduled_id(&banner.maybe_show(&mut ids));

        let effects = banner.accept();
        assert_eq!(effects[0], Effect::Cancel(id));
        assert!(!banner.on_timer(id));
        assert!(!banner.is_visible());
    }
}
