use yew::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    ("bot", "Custom bots", "Assistants for Telegram, WhatsApp and the web, trained on your own data."),
    ("brain-circuit", "Model tuning", "Prompt design and fine-tuning so answers stay on brand."),
    ("plug", "Integrations", "CRM, helpdesk and payment hooks wired into every conversation."),
];

const POSTS: &[(&str, &str)] = &[
    ("Retrieval without the hype", "What actually moves answer quality in production assistants."),
    ("Guardrails that users never notice", "Keeping a bot polite, factual and on topic."),
    ("From FAQ to agent", "A migration story in four small steps."),
];

const INNOVATIONS: &[&str] = &[
    "Voice agents with sub-second replies",
    "Self-updating knowledge bases",
    "Conversation analytics dashboards",
];

/// Static marketing content between the hero and the contact form.
#[function_component(Sections)]
pub fn sections() -> Html {
    html! {
        <>
            <section id="features" class="features">
                <div class="container">
                    <h2 class="section-title">{"What we build"}</h2>
                    <div class="features__grid">
                        { for FEATURES.iter().map(|(icon, title, text)| html! {
                            <article class="feature-card">
                                <i data-lucide={*icon}></i>
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </article>
                        }) }
                    </div>
                </div>
            </section>

            <section id="blog" class="blog">
                <div class="container">
                    <h2 class="section-title">{"From the AI blog"}</h2>
                    <div class="blog__grid">
                        { for POSTS.iter().map(|(title, teaser)| html! {
                            <article class="post-card">
                                <h3>{*title}</h3>
                                <p>{*teaser}</p>
                            </article>
                        }) }
                    </div>
                </div>
            </section>

            <section id="innovations" class="innovations">
                <div class="container innovations__wrapper">
                    <h2 class="section-title">{"Innovations"}</h2>
                    <p class="section-text">{"Things we are shipping next."}</p>
                    <ul class="feature-list">
                        { for INNOVATIONS.iter().map(|item| html! {
                            <li><i data-lucide="check"></i>{*item}</li>
                        }) }
                    </ul>
                </div>
            </section>
        </>
    }
}
