use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use web_sys::js_sys;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::cookie_popup::CookiePopup;
use crate::components::hero::Hero;
use crate::components::sections::Sections;
use crate::components::site_header::SiteHeader;
use crate::config::PageConfig;
use crate::controller::{PageController, PageEvent};
use crate::effects::Effect;
use crate::error::PageError;
use crate::interop;
use crate::storage::{KeyValueStore, LocalStorage};
use crate::submission::Field;
use crate::timers::TimerId;

/// Root component. Owns the controller and turns its effects into timers,
/// storage writes and library calls.
pub struct App {
    controller: PageController,
    timers: HashMap<TimerId, Timeout>,
    storage: LocalStorage,
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64
}

fn report(what: &str, result: Result<(), PageError>) {
    if let Err(e) = result {
        log::warn!("{} skipped: {}", what, e);
    }
}

impl App {
    fn run(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { id, task, delay_ms } => {
                    let link = ctx.link().clone();
                    let timeout = Timeout::new(delay_ms, move || {
                        link.send_message(PageEvent::TimerFired { id, task });
                    });
                    self.timers.insert(id, timeout);
                }
                Effect::Cancel(id) => {
                    // dropping a gloo Timeout clears it
                    self.timers.remove(&id);
                }
                Effect::Alert(message) => report("Alert", interop::alert(&message)),
                Effect::LockScroll(locked) => {
                    report("Scroll lock", interop::set_scroll_lock(locked))
                }
                Effect::PersistConsent { key, value } => {
                    report("Saving consent", self.storage.set_item(&key, &value))
                }
                Effect::RenderIcons => report("Icon rendering", interop::render_icons()),
                Effect::StartSmoothScroll => {
                    report("Smooth scroll", interop::start_smooth_scroll())
                }
                Effect::AnimateHero => report("Hero animation", interop::animate_hero()),
                Effect::RevealSections => match interop::reveal_sections() {
                    Ok(count) => log::debug!("Scroll reveal wired for {} sections", count),
                    Err(e) => log::warn!("Section reveal skipped: {}", e),
                },
            }
        }
    }
}

impl Component for App {
    type Message = PageEvent;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = PageConfig::load();
        let storage = LocalStorage;
        let stored_consent = match storage.get_item(&config.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Could not read consent flag: {}", e);
                None
            }
        };

        Self {
            controller: PageController::new(config, stored_consent, random_seed()),
            timers: HashMap::new(),
            storage,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if let PageEvent::TimerFired { id, .. } = &msg {
            self.timers.remove(id);
        }
        let outcome = self.controller.dispatch(msg);
        self.run(ctx, outcome.effects);
        outcome.changed
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let effects = self.controller.boot();
            self.run(ctx, effects);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let page = &self.controller;

        let form = page.form().map(|form| {
            html! {
                <ContactForm
                    values={form.form().clone()}
                    captcha_prompt={form.captcha().prompt()}
                    button={form.button().clone()}
                    status={form.status().clone()}
                    fade_ms={form.fade_ms()}
                    on_input={link.callback(|(field, value): (Field, String)| PageEvent::FieldChanged(field, value))}
                    on_submit={link.callback(|_: ()| PageEvent::FormSubmitted)}
                />
            }
        });

        let cookie_popup = page.consent().map(|consent| {
            html! {
                <CookiePopup
                    visible={consent.is_visible()}
                    on_accept={link.callback(|_: ()| PageEvent::ConsentAccepted)}
                />
            }
        });

        html! {
            <>
                <SiteHeader
                    style={page.header()}
                    menu_open={page.menu().map(|m| m.is_open())}
                    on_burger={link.callback(|_: ()| PageEvent::BurgerClicked)}
                    on_nav_link={link.callback(|_: ()| PageEvent::NavLinkClicked)}
                    on_scroll={link.callback(PageEvent::Scrolled)}
                />
                <main>
                    <Hero with_title={page.config().layout.hero_title} />
                    <Sections />
                    { form.unwrap_or_default() }
                </main>
                { cookie_popup.unwrap_or_default() }
            </>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timers.clear();
    }
}
