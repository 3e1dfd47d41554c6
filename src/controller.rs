use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::PageConfig;
use crate::consent::ConsentBanner;
use crate::effects::{Effect, Outcome};
use crate::header::HeaderStyle;
use crate::menu::MenuToggle;
use crate::submission::{Field, SubmissionController};
use crate::timers::{Task, TimerId, TimerIds};

/// Every input the page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    BurgerClicked,
    NavLinkClicked,
    FieldChanged(Field, String),
    FormSubmitted,
    ConsentAccepted,
    Scrolled(f64),
    TimerFired { id: TimerId, task: Task },
}

/// Owns the interactive state of the page. Parts the page variant does not
/// include are `None` and events aimed at them do nothing.
#[derive(Debug)]
pub struct PageController {
    config: PageConfig,
    ids: TimerIds,
    header: HeaderStyle,
    menu: Option<MenuToggle>,
    consent: Option<ConsentBanner>,
    form: Option<SubmissionController>,
}

impl PageController {
    /// `stored_consent` is the current value under the consent key, if any.
    pub fn new(config: PageConfig, stored_consent: Option<String>, seed: u64) -> Self {
        let layout = config.layout.clone();
        let menu = layout.mobile_menu.then(MenuToggle::new);
        let consent = layout.consent_banner.then(|| {
            ConsentBanner::new(config.storage_key.clone(), config.consent_delay_ms, stored_consent)
        });
        let form = layout
            .contact_form
            .then(|| SubmissionController::new(&config, SmallRng::seed_from_u64(seed)));

        Self {
            config,
            ids: TimerIds::default(),
            header: HeaderStyle::default(),
            menu,
            consent,
            form,
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn header(&self) -> HeaderStyle {
        self.header
    }

    pub fn menu(&self) -> Option<&MenuToggle> {
        self.menu.as_ref()
    }

    pub fn consent(&self) -> Option<&ConsentBanner> {
        self.consent.as_ref()
    }

    pub fn form(&self) -> Option<&SubmissionController> {
        self.form.as_ref()
    }

    /// One-time startup work, in page order.
    pub fn boot(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::RenderIcons, Effect::StartSmoothScroll];
        if self.config.layout.hero_title {
            effects.push(Effect::AnimateHero);
        }
        effects.push(Effect::RevealSections);
        if let Some(consent) = self.consent.as_mut() {
            effects.extend(consent.maybe_show(&mut self.ids));
        }
        log::info!("Page booted with {} startup effects", effects.len());
        effects
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Outcome {
        match event {
            PageEvent::BurgerClicked => match self.menu.as_mut() {
                Some(menu) => Outcome::changed(menu.toggle()),
                None => missing("mobile menu"),
            },
            PageEvent::NavLinkClicked => match self.menu.as_mut() {
                Some(menu) if menu.is_open() => Outcome::changed(menu.link_clicked()),
                _ => Outcome::unchanged(),
            },
            PageEvent::FieldChanged(field, value) => match self.form.as_mut() {
                Some(form) => {
                    form.input(field, value);
                    Outcome::changed(Vec::new())
                }
                None => missing("contact form"),
            },
            PageEvent::FormSubmitted => match self.form.as_mut() {
                Some(form) => Outcome::changed(form.submit(&mut self.ids)),
                None => missing("contact form"),
            },
            PageEvent::ConsentAccepted => match self.consent.as_mut() {
                Some(consent) => Outcome::changed(consent.accept()),
                None => missing("cookie popup"),
            },
            PageEvent::Scrolled(y) => {
                let next = HeaderStyle::for_scroll(y, self.config.header_threshold_px);
                if next == self.header {
                    Outcome::unchanged()
                } else {
                    self.header = next;
                    Outcome::changed(Vec::new())
                }
            }
            PageEvent::TimerFired { id, task } => self.on_timer(id, task),
        }
    }

    fn on_timer(&mut self, id: TimerId, task: Task) -> Outcome {
        match task {
            Task::ShowConsentBanner => match self.consent.as_mut().map(|c| c.on_timer(id)) {
                Some(true) => Outcome::changed(Vec::new()),
                _ => Outcome::unchanged(),
            },
            Task::CompleteSubmission | Task::BeginStatusFade | Task::FinishStatusFade => {
                let Some(form) = self.form.as_mut() else {
                    return Outcome::unchanged();
                };
                if !form.owns_timer(id) {
                    log::debug!("Ignoring stale form timer {:?} ({:?})", id, task);
                    return Outcome::unchanged();
                }
                Outcome::changed(form.on_timer(id, task, &mut self.ids))
            }
        }
    }
}

fn missing(part: &'static str) -> Outcome {
    log::debug!("No {} on this page, ignoring event", part);
    Outcome::unchanged()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageLayout;

    fn bare_config() -> PageConfig {
        PageConfig {
            layout: PageLayout {
                consent_banner: false,
                mobile_menu: false,
                contact_form: false,
                hero_title: false,
            },
            ..PageConfig::default()
        }
    }

    #[test]
    fn boot_order_matches_page_setup() {
        let mut page = PageController::new(PageConfig::default(), None, 1);
        let effects = page.boot();
        assert_eq!(
            &effects[..4],
            &[
                Effect::RenderIcons,
                Effect::StartSmoothScroll,
                Effect::AnimateHero,
                Effect::RevealSections,
            ]
        );
        assert!(matches!(
            effects[4],
            Effect::Schedule { task: Task::ShowConsentBanner, delay_ms: 3_000, .. }
        ));
    }

    #[test]
    fn missing_parts_turn_events_into_no_ops() {
        let mut page = PageController::new(bare_config(), None, 1);
        assert_eq!(
            page.boot(),
            vec![Effect::RenderIcons, Effect::StartSmoothScroll, Effect::RevealSections]
        );
        for event in [
            PageEvent::BurgerClicked,
            PageEvent::NavLinkClicked,
            PageEvent::FormSubmitted,
            PageEvent::ConsentAccepted,
            PageEvent::FieldChanged(Field::Name, "x".into()),
            PageEvent::TimerFired { id: TimerId(9), task: Task::CompleteSubmission },
        ] {
            assert_eq!(page.dispatch(event), Outcome::unchanged());
        }
    }

    #[test]
    fn stale_timers_do_not_rerender() {
        let mut page = PageController::new(PageConfig::default(), None, 1);
        page.boot();
        for task in [Task::CompleteSubmission, Task::BeginStatusFade, Task::ShowConsentBanner] {
            let outcome = page.dispatch(PageEvent::TimerFired { id: TimerId(999), task });
            assert_eq!(outcome, Outcome::unchanged());
        }
    }

    #[test]
    fn consent_timer_shows_the_banner() {
        let mut page = PageController::new(PageConfig::default(), None, 1);
        let id = page
            .boot()
            .into_iter()
            .find_map(|e| match e {
                Effect::Schedule { id, task: Task::ShowConsentBanner, .. } => Some(id),
                _ => None,
            })
            .unwrap();
        let outcome = page.dispatch(PageEvent::TimerFired { id, task: Task::ShowConsentBanner });
        assert!(outcome.changed);
        assert!(page.consent().unwrap().is_visible());
    }

    #[test]
    fn scroll_only_rerenders_when_crossing_threshold() {
        let mut page = PageController::new(PageConfig::default(), None, 1);
        assert!(!page.dispatch(PageEvent::Scrolled(40.0)).changed);
        assert!(page.dispatch(PageEvent::Scrolled(140.0)).changed);
        assert_eq!(page.header(), HeaderStyle::SCROLLED);
        assert!(!page.dispatch(PageEvent::Scrolled(900.0)).changed);
        assert!(page.dispatch(PageEvent::Scrolled(0.0)).changed);
        assert_eq!(page.header(), HeaderStyle::TOP);
    }
}
