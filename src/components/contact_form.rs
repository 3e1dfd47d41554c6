use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::submission::{sanitize_phone, ContactForm as FormValues, Field, StatusMessage, SubmitButton};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub values: FormValues,
    pub captcha_prompt: String,
    pub button: SubmitButton,
    pub status: StatusMessage,
    pub fade_ms: u32,
    pub on_input: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
}

fn input_handler(field: Field, on_input: &Callback<(Field, String)>) -> Callback<InputEvent> {
    let on_input = on_input.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut value = input.value();
        if field == Field::Phone {
            let digits = sanitize_phone(&value);
            if digits != value {
                input.set_value(&digits);
                value = digits;
            }
        }
        on_input.emit((field, value));
    })
}

fn status_style(status: &StatusMessage, fade_ms: u32) -> String {
    format!(
        "display: {}; opacity: {}; transition: opacity {}ms ease;",
        if status.visible { "block" } else { "none" },
        status.opacity,
        fade_ms
    )
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_message = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit((Field::Message, area.value()));
        })
    };

    let values = &props.values;

    html! {
        <section id="contact" class="contact">
            <div class="container contact__form-container">
                <h2 class="section-title">{"Tell us about your project"}</h2>
                <form id="ai-form" class="contact__form" {onsubmit}>
                    <input
                        type="text"
                        name="name"
                        placeholder="Your name"
                        required={true}
                        value={values.name.clone()}
                        oninput={input_handler(Field::Name, &props.on_input)}
                    />
                    <input
                        id="phone"
                        type="tel"
                        name="phone"
                        placeholder="Phone"
                        inputmode="numeric"
                        required={true}
                        value={values.phone.clone()}
                        oninput={input_handler(Field::Phone, &props.on_input)}
                    />
                    <textarea
                        name="message"
                        placeholder="What should your bot do?"
                        rows="4"
                        value={values.message.clone()}
                        oninput={on_message}
                    />
                    <div class="captcha">
                        <label id="captcha-question">{props.captcha_prompt.clone()}</label>
                        <input
                            id="captcha-input"
                            type="text"
                            inputmode="numeric"
                            autocomplete="off"
                            required={true}
                            value={values.captcha_answer.clone()}
                            oninput={input_handler(Field::Captcha, &props.on_input)}
                        />
                    </div>
                    <button type="submit" class="btn btn--primary" disabled={props.button.disabled}>
                        {props.button.label.clone()}
                    </button>
                </form>
                <div
                    id="form-status"
                    class={classes!("form-status", props.status.success.then_some("success"))}
                    style={status_style(&props.status, props.fade_ms)}
                >
                    {props.status.text.clone()}
                </div>
            </div>
        </section>
    }
}
