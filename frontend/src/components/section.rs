use leptos::prelude::*;

#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] eyebrow: Option<&'static str>,
    #[prop(optional)] desc: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-title">
            {eyebrow.map(|e| view! { <p class="eyebrow">{e}</p> })}
            <h2 class="gradient-text">{title}</h2>
            {desc.map(|d| view! { <p class="section-desc">{d}</p> })}
        </div>
    }
}
