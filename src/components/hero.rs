use yew::prelude::*;

use crate::animation::HERO_TITLE_ID;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Without the title element the heading split animation has no target.
    pub with_title: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="container hero__inner">
                {
                    if props.with_title {
                        html! {
                            <h1 id={HERO_TITLE_ID} class="hero__title">
                                {"Intelligent bots and an AI blog for your business"}
                            </h1>
                        }
                    } else {
                        html! {}
                    }
                }
                <p class="hero__subtitle">
                    {"We design, train and ship conversational agents, and write about what we learn along the way."}
                </p>
                <div class="hero__actions">
                    <a href="#contact" class="btn btn--primary">
                        {"Start a project"}
                        <i data-lucide="arrow-right"></i>
                    </a>
                    <a href="#blog" class="btn btn--ghost">{"Read the blog"}</a>
                </div>
            </div>
        </section>
    }
}
