use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CookiePopupProps {
    pub visible: bool,
    pub on_accept: Callback<()>,
}

#[function_component(CookiePopup)]
pub fn cookie_popup(props: &CookiePopupProps) -> Html {
    let onclick = {
        let on_accept = props.on_accept.clone();
        Callback::from(move |_: MouseEvent| on_accept.emit(()))
    };

    html! {
        <div id="cookie-popup" class={classes!("cookie-popup", props.visible.then_some("active"))}>
            <style>
                {r#".cookie-popup {
                    position: fixed;
                    left: 1.5rem;
                    bottom: 1.5rem;
                    max-width: 360px;
                    padding: 1.25rem;
                    border-radius: 16px;
                    background: rgba(15, 23, 42, 0.95);
                    border: 1px solid rgba(148, 163, 184, 0.2);
                    transform: translateY(150%);
                    transition: transform 0.4s ease;
                    z-index: 50;
                }
                .cookie-popup.active {
                    transform: translateY(0);
                }"#}
            </style>
            <i data-lucide="cookie"></i>
            <p>{"We use cookies to make this site work and to understand how it is used."}</p>
            <button id="cookie-accept" class="btn btn--primary" {onclick}>{"Accept"}</button>
        </div>
    }
}
