use leptos::prelude::*;
use portfolio_site::content;

use crate::components::{section::SectionTitle, tilt::TiltCard};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let github = content::profile().github_url;

    view! {
        <div class="page-container">
            <SectionTitle eyebrow="My Projects" title="Projects with playful polish"/>
            <div class="project-grid">
                {content::projects()
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| view! {
                        <article class="rise" style=format!("animation-delay:{:.2}s", 0.06 * i as f64)>
                            <TiltCard>
                                <img src=p.image alt=p.title.clone() class="project-img"/>
                                <h3>{p.title}</h3>
                                <p>{p.description}</p>
                                <div class="tags">
                                    {p.tech.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                                </div>
                                <div class="card-actions">
                                    <a href=p.code_url target="_blank" rel="noopener" class="button outline">"Code"</a>
                                </div>
                            </TiltCard>
                        </article>
                    })
                    .collect_view()}
            </div>
            <div class="centered spaced">
                <a href=github target="_blank" rel="noopener" class="button primary large">"Visit My GitHub 🚀"</a>
            </div>
        </div>
    }
}
