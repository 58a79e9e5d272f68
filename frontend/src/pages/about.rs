use leptos::prelude::*;
use portfolio_site::content;

use crate::components::{section::SectionTitle, tilt::TiltCard};

#[component]
pub fn AboutPage() -> impl IntoView {
    let profile = content::profile();

    view! {
        <div class="page-container">
            <SectionTitle
                eyebrow="Who Am I"
                title="Crafting delightful, performant UIs"
                desc="I merge aesthetics with logic — animations that serve usability."
            />
            <div class="about-grid">
                <ol class="timeline slide-in-left">
                    {content::milestones()
                        .into_iter()
                        .enumerate()
                        .map(|(i, m)| view! {
                            <li class="timeline-item rise" style=format!("animation-delay:{:.1}s", 0.1 * i as f64)>
                                <div class="timeline-dot"></div>
                                <h4>{m.title}</h4>
                                <p class="timeline-period">{m.period}</p>
                                <p>{m.body}</p>
                            </li>
                        })
                        .collect_view()}
                </ol>
                <div class="slide-in-right">
                    <TiltCard>
                        <h3>"What I love"</h3>
                        <ul class="loves">
                            {profile.loves.into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}
                        </ul>
                        <div class="toolbox">
                            {profile
                                .toolbox
                                .into_iter()
                                .map(|t| view! { <div class="tool">{t}</div> })
                                .collect_view()}
                        </div>
                    </TiltCard>
                </div>
            </div>
        </div>
    }
}
