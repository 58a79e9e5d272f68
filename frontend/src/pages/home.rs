use leptos::prelude::*;
use leptos_router::components::A;
use portfolio_site::content;

use crate::components::tilt::TiltCard;

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = content::profile();
    let first_name = profile.first_name().to_string();

    view! {
        <div class="page-container">
            <div class="hero">
                <div class="hero-copy slide-in-left">
                    <p class="eyebrow">{profile.tagline}</p>
                    <h1 class="hero-title">
                        {first_name} " builds "
                        <span class="gradient-text">"joyful"</span>
                        " web experiences."
                    </h1>
                    <p class="hero-intro">
                        "Web Developer (Wix + HTML/CSS/JS) learning MERN. 200+ DSA problems. Focused on performance, UX, and animations."
                    </p>
                    <div class="cta-row">
                        <span class="button primary"><A href="/projects">"Explore Projects"</A></span>
                        <span class="button ghost"><A href="/contact">"Contact"</A></span>
                    </div>
                </div>
                <div class="portrait glass slide-in-right">
                    <div class="portrait-glow"></div>
                    <img src=profile.portrait_path alt=profile.name class="portrait-img"/>
                    <div class="blob blob-a"></div>
                    <div class="blob blob-b"></div>
                </div>
            </div>

            <section class="panel">
                <h2 class="panel-title">"🌟 My Skills & Highlights"</h2>
                <div class="highlight-grid">
                    {content::highlights()
                        .into_iter()
                        .enumerate()
                        .map(|(i, h)| view! {
                            <div class="rise" style=format!("animation-delay:{:.1}s", 0.2 * i as f64)>
                                <TiltCard class="highlight">
                                    <h3>{h.title}</h3>
                                    <p>{h.body}</p>
                                </TiltCard>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="panel centered rise">
                <h2 class="panel-title">"🚀 Want to Collaborate?"</h2>
                <p class="panel-copy">
                    "I'm always excited to work on interesting projects, solve challenging problems, and create amazing web experiences. Let's build something awesome together!"
                </p>
                <div class="cta-row centered">
                    <span class="button primary"><A href="/contact">"Get in Touch"</A></span>
                    <span class="button ghost"><A href="/projects">"View Projects"</A></span>
                </div>
            </section>
        </div>
    }
}
