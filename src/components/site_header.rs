use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::header::HeaderStyle;
use crate::interop;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Platform"),
    ("#blog", "AI Blog"),
    ("#innovations", "Innovations"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub style: HeaderStyle,
    /// `None` when this page has no mobile menu.
    pub menu_open: Option<bool>,
    pub on_burger: Callback<()>,
    pub on_nav_link: Callback<()>,
    pub on_scroll: Callback<f64>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    {
        let on_scroll = props.on_scroll.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(y) = interop::scroll_y() {
                on_scroll.emit(y);
            }
        });
    }

    let burger = props.menu_open.map(|open| {
        let on_burger = props.on_burger.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_burger.emit(());
        });
        html! {
            <button class={classes!("burger", open.then_some("active"))} {onclick} aria-label="Menu">
                <span></span>
                <span></span>
                <span></span>
            </button>
        }
    });

    html! {
        <header class="header" style={props.style.to_css()}>
            <style>
                {r#".header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 40;
                    backdrop-filter: blur(12px);
                    transition: padding 0.3s ease, background 0.3s ease;
                }
                .burger { display: none; }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    background: rgba(15, 23, 42, 0.98);
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                }
                .mobile-menu.active { transform: translateX(0); }
                @media (max-width: 768px) {
                    .header__nav { display: none; }
                    .burger { display: flex; flex-direction: column; gap: 5px; }
                    .burger.active span:nth-child(2) { opacity: 0; }
                }"#}
            </style>
            <div class="header__inner container">
                <a href="#hero" class="header__logo">
                    <i data-lucide="hexagon"></i>
                    {"Octa-Cell"}
                </a>
                <nav class="header__nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a class="nav__link" href={*href}>{*label}</a>
                    }) }
                </nav>
                { burger.unwrap_or_default() }
            </div>
            {
                if let Some(open) = props.menu_open {
                    html! { <MobileMenu {open} on_link={props.on_nav_link.clone()} /> }
                } else {
                    html! {}
                }
            }
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_link: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    html! {
        <div id="mobile-menu" class={classes!("mobile-menu", props.open.then_some("active"))}>
            <nav class="mobile-nav">
                { for NAV_LINKS.iter().map(|(href, label)| {
                    let on_link = props.on_link.clone();
                    html! {
                        <a class="mobile-nav__link" href={*href} onclick={move |_| on_link.emit(())}>
                            {*label}
                        </a>
                    }
                }) }
            </nav>
        </div>
    }
}
