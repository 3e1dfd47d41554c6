use std::mem;

use rand::rngs::SmallRng;

use crate::captcha::CaptchaChallenge;
use crate::config::PageConfig;
use crate::effects::Effect;
use crate::timers::{Task, TimerId, TimerIds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Message,
    Captcha,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub message: String,
    pub captcha_answer: String,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = sanitize_phone(&value),
            Field::Message => self.message = value,
            Field::Captcha => self.captcha_answer = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Phone numbers are digits only; everything else is dropped as typed.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub visible: bool,
    pub success: bool,
    pub opacity: f32,
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self {
            text: String::new(),
            visible: false,
            success: false,
            opacity: 1.0,
        }
    }
}

impl StatusMessage {
    pub fn is_fading(&self) -> bool {
        self.visible && self.opacity < 1.0
    }

    fn show_success(&mut self, text: &str) {
        self.text = text.to_string();
        self.success = true;
        self.opacity = 1.0;
        self.visible = true;
    }

    /// Hidden, unstyled and fully opaque again so it can be reused.
    fn reset(&mut self) {
        self.visible = false;
        self.success = false;
        self.opacity = 1.0;
    }
}

/// Captcha-gated contact form with a simulated, timed submission.
///
/// Idle -> Submitting (valid captcha) -> Succeeded (after the latency)
/// -> Idle (after the status message has been shown and faded out).
#[derive(Debug)]
pub struct SubmissionController {
    phase: Phase,
    form: ContactForm,
    captcha: CaptchaChallenge,
    rng: SmallRng,
    button: SubmitButton,
    original_label: Option<String>,
    status: StatusMessage,
    pending: Option<TimerId>,
    latency_ms: u32,
    display_ms: u32,
    fade_ms: u32,
    alert_text: String,
    busy_label: String,
    success_message: String,
}

impl SubmissionController {
    pub fn new(config: &PageConfig, mut rng: SmallRng) -> Self {
        let captcha = CaptchaChallenge::new(&mut rng);
        Self {
            phase: Phase::Idle,
            form: ContactForm::default(),
            captcha,
            rng,
            button: SubmitButton {
                label: config.submit_label.clone(),
                disabled: false,
            },
            original_label: None,
            status: StatusMessage::default(),
            pending: None,
            latency_ms: config.submit_latency_ms,
            display_ms: config.status_display_ms,
            fade_ms: config.status_fade_ms,
            alert_text: config.captcha_alert.clone(),
            busy_label: config.busy_label.clone(),
            success_message: config.success_message.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn captcha(&self) -> &CaptchaChallenge {
        &self.captcha
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn fade_ms(&self) -> u32 {
        self.fade_ms
    }

    /// Whether `id` is the timer this form is currently waiting on.
    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.pending == Some(id)
    }

    pub fn input(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    pub fn submit(&mut self, ids: &mut TimerIds) -> Vec<Effect> {
        let mut effects = Vec::new();
        match self.phase {
            Phase::Submitting => {
                log::debug!("Submit ignored, a submission is already in flight");
                return effects;
            }
            Phase::Succeeded => effects.extend(self.dismiss_status()),
            Phase::Idle => {}
        }

        if let Err(e) = self.captcha.check(&self.form.captcha_answer) {
            log::debug!("Captcha rejected: {}", e);
            self.captcha.generate(&mut self.rng);
            self.form.captcha_answer.clear();
            effects.push(Effect::Alert(self.alert_text.clone()));
            return effects;
        }

        let busy = self.busy_label.clone();
        self.original_label = Some(mem::replace(&mut self.button.label, busy));
        self.button.disabled = true;
        self.phase = Phase::Submitting;
        log::info!("Submitting contact form");
        effects.push(self.schedule(ids, Task::CompleteSubmission, self.latency_ms));
        effects
    }

    pub fn on_timer(&mut self, id: TimerId, task: Task, ids: &mut TimerIds) -> Vec<Effect> {
        if self.pending != Some(id) {
            log::debug!("Ignoring stale form timer {:?} ({:?})", id, task);
            return Vec::new();
        }
        self.pending = None;

        match (self.phase, task) {
            (Phase::Submitting, Task::CompleteSubmission) => {
                // reset and new captcha before the button comes back,
                // button before the message
                self.form.reset();
                self.captcha.generate(&mut self.rng);
                self.button.disabled = false;
                if let Some(label) = self.original_label.take() {
                    self.button.label = label;
                }
                self.status.show_success(&self.success_message);
                self.phase = Phase::Succeeded;
                log::info!("Contact form submitted");
                vec![self.schedule(ids, Task::BeginStatusFade, self.display_ms)]
            }
            (Phase::Succeeded, Task::BeginStatusFade) => {
                self.status.opacity = 0.0;
                vec![self.schedule(ids, Task::FinishStatusFade, self.fade_ms)]
            }
            (Phase::Succeeded, Task::FinishStatusFade) => {
                self.status.reset();
                self.phase = Phase::Idle;
                Vec::new()
            }
            (phase, task) => {
                log::warn!("Unexpected {:?} while {:?}", task, phase);
                Vec::new()
            }
        }
    }

    /// Cuts a visible status message short so a new submission can start
    /// from Idle.
    fn dismiss_status(&mut self) -> Option<Effect> {
        let cancelled = self.pending.take().map(Effect::Cancel);
        self.status.reset();
        self.phase = Phase::Idle;
        log::debug!("Status message dismissed by a new submit");
        cancelled
    }

    fn schedule(&mut self, ids: &mut TimerIds, task: Task, delay_ms: u32) -> Effect {
        let id = ids.allocate();
        self.pending = Some(id);
        Effect::Schedule { id, task, delay_ms }
    }
}
