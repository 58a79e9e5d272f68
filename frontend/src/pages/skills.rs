use leptos::prelude::*;
use portfolio_site::content;

use crate::components::section::SectionTitle;

#[component]
pub fn SkillsPage() -> impl IntoView {
    view! {
        <div class="page-container">
            <SectionTitle
                title="Skills with motion"
                desc="A curated set of tools and technologies I rely on daily to craft interactive, high-performance, and visually engaging web experiences."
            />
            <div class="skill-grid">
                {content::skills()
                    .into_iter()
                    .enumerate()
                    .map(|(i, s)| {
                        let width = s.width();
                        view! {
                            <div class="skill glass rise" style=format!("animation-delay:{:.2}s", 0.05 * i as f64)>
                                <div class="skill-head">
                                    <span class="skill-name">{s.name}</span>
                                    <span class="skill-level">{width.clone()}</span>
                                </div>
                                <div class="skill-track">
                                    // Bar grows from zero to --level via CSS.
                                    <div class="skill-fill" style=format!("--level:{width}")></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
