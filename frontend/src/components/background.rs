use leptos::prelude::*;
use portfolio_site::motion::{orbs, sparkles};

/// Fixed aurora backdrop. All motion is CSS keyframes; Rust only lays out
/// the orbs and sparkles.
#[component]
pub fn AuroraBackground() -> impl IntoView {
    view! {
        <div aria-hidden="true" class="aurora-bg">
            <div class="aurora-base"></div>
            <div class="aurora-ribbons">
                <div class="aurora aurora-a"></div>
                <div class="aurora aurora-b"></div>
                <div class="aurora aurora-c"></div>
            </div>
            <div class="orbs">
                {orbs().into_iter().map(|o| view! { <span class="orb" style=o.css()></span> }).collect_view()}
            </div>
            <div class="sparkles">
                {sparkles()
                    .into_iter()
                    .map(|s| view! { <span class="sparkle" style=s.css()></span> })
                    .collect_view()}
            </div>
        </div>
    }
}
