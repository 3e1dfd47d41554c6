#![allow(dead_code)]

use std::collections::BTreeSet;

use octacell_page::storage::{KeyValueStore, MemoryStore};
use octacell_page::timers::SimulatedClock;
use octacell_page::{Effect, PageConfig, PageController, PageEvent};

/// Stand-in for the icon library: turns placeholders into rendered icons.
#[derive(Debug, Default)]
pub struct FakeIcons {
    pub placeholders: BTreeSet<&'static str>,
    pub rendered: BTreeSet<&'static str>,
}

impl FakeIcons {
    pub fn with_placeholders(names: &[&'static str]) -> Self {
        Self {
            placeholders: names.iter().copied().collect(),
            rendered: BTreeSet::new(),
        }
    }

    pub fn create_icons(&mut self) {
        let found = std::mem::take(&mut self.placeholders);
        self.rendered.extend(found);
    }
}

/// Drives a `PageController` the way the browser would, with virtual time.
pub struct Harness {
    pub page: PageController,
    pub clock: SimulatedClock,
    pub store: MemoryStore,
    pub icons: FakeIcons,
    pub alerts: Vec<String>,
    pub scroll_locked: bool,
    pub startup: Vec<Effect>,
}

impl Harness {
    pub fn new(config: PageConfig, seed: u64) -> Self {
        Self::with_store(config, seed, MemoryStore::default())
    }

    /// Simulates a page load against existing durable storage.
    pub fn with_store(config: PageConfig, seed: u64, store: MemoryStore) -> Self {
        let stored = store.get_item(&config.storage_key).unwrap();
        let mut harness = Self {
            page: PageController::new(config, stored, seed),
            clock: SimulatedClock::new(),
            store,
            icons: FakeIcons::with_placeholders(&["hexagon", "arrow-right", "cookie"]),
            alerts: Vec::new(),
            scroll_locked: false,
            startup: Vec::new(),
        };
        let effects = harness.page.boot();
        harness.startup = effects.clone();
        harness.apply(effects);
        harness
    }

    pub fn send(&mut self, event: PageEvent) {
        let outcome = self.page.dispatch(event);
        self.apply(outcome.effects);
    }

    pub fn advance(&mut self, ms: u64) {
        let until = self.clock.now_ms() + ms;
        while let Some((id, task)) = self.clock.next_due(until) {
            self.send(PageEvent::TimerFired { id, task });
        }
        self.clock.set_now(until);
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in self.clock.apply(effects) {
            match effect {
                Effect::Alert(message) => self.alerts.push(message),
                Effect::LockScroll(locked) => self.scroll_locked = locked,
                Effect::PersistConsent { key, value } => self.store.set_item(&key, &value).unwrap(),
                Effect::RenderIcons => self.icons.create_icons(),
                Effect::StartSmoothScroll | Effect::AnimateHero | Effect::RevealSections => {}
                Effect::Schedule { .. } | Effect::Cancel(_) => unreachable!("handled by the clock"),
            }
        }
    }
}
