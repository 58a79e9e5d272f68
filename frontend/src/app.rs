use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    components::{A, Router},
    hooks::{use_location, use_navigate},
};
use portfolio_site::{Page, ROUTES, Resolution, content, resolve};

use crate::components::{background::AuroraBackground, magnetic::MagneticLink};
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, projects::ProjectsPage,
    skills::SkillsPage,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div id="app">
            <AuroraBackground/>
            <Router>
                <Navbar/>
                <CurrentPage/>
                <Footer/>
            </Router>
        </div>
    }
}

fn render(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Projects => view! { <ProjectsPage/> }.into_any(),
        Page::Skills => view! { <SkillsPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
    }
}

fn scroll_to_top() {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Picks the page for the router's current path and owns the two
/// navigation side effects: redirecting unknown paths and resetting scroll.
#[component]
fn CurrentPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let resolution = Memo::new(move |_| resolve(&location.pathname.get()));
    // Redirect(Home) -> Render(Home) must not remount the page.
    let page = Memo::new(move |_| resolution.get().page());

    Effect::new(move |_| {
        if let Resolution::Redirect(page) = resolution.get() {
            navigate(
                page.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    Effect::new(move |_| {
        location.pathname.track();
        scroll_to_top();
    });

    view! {
        <main class="page-shell">
            {move || render(page.get())}
        </main>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let profile = content::profile();
    view! {
        <header class="navbar">
            <nav class="glass">
                <A href="/">
                    <span class="brand">
                        <img src=profile.logo_path alt="Logo" class="brand-logo"/>
                        <span class="brand-name">{profile.name}</span>
                    </span>
                </A>
                <div class="nav-links">
                    {ROUTES
                        .iter()
                        .map(|r| view! { <MagneticLink to=r.path>{r.label}</MagneticLink> })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let profile = content::profile();
    let mailto = profile.mailto();
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <div class="footer-links">
                <a href=mailto>"Email"</a>
                <a href=profile.linkedin_url target="_blank" rel="noopener">"LinkedIn"</a>
                <a href=profile.github_url target="_blank" rel="noopener">"GitHub"</a>
            </div>
            <p>"© " {year} " " {profile.name}</p>
        </footer>
    }
}
