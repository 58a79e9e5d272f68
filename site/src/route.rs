use serde::{Deserialize, Serialize};

/// The five sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

/// A path-to-page association, with the label used in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    pub label: &'static str,
}

pub const ROUTES: [Route; 5] = [
    Route { path: "/", page: Page::Home, label: "Home" },
    Route { path: "/about", page: Page::About, label: "About" },
    Route { path: "/projects", page: Page::Projects, label: "Projects" },
    Route { path: "/skills", page: Page::Skills, label: "Skills" },
    Route { path: "/contact", page: Page::Contact, label: "Contact" },
];

impl Page {
    pub fn path(self) -> &'static str {
        self.route().path
    }

    pub fn label(self) -> &'static str {
        self.route().label
    }

    fn route(self) -> Route {
        // Every variant has exactly one entry in ROUTES.
        match self {
            Page::Home => ROUTES[0],
            Page::About => ROUTES[1],
            Page::Projects => ROUTES[2],
            Page::Skills => ROUTES[3],
            Page::Contact => ROUTES[4],
        }
    }

    /// Exact lookup. A single trailing slash is ignored; case matters.
    pub fn from_path(path: &str) -> Option<Page> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() && !trimmed.ends_with('/') => trimmed,
            _ => path,
        };
        ROUTES.iter().find(|r| r.path == path).map(|r| r.page)
    }
}

/// What the shell should do with a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    /// Unknown path: replace the history entry with this page's path.
    Redirect(Page),
}

impl Resolution {
    /// The page that ends up on screen either way.
    pub fn page(self) -> Page {
        match self {
            Resolution::Render(p) | Resolution::Redirect(p) => p,
        }
    }
}

/// Pick the page for `path`. Paths outside the table send the visitor home.
pub fn resolve(path: &str) -> Resolution {
    match Page::from_path(path) {
        Some(page) => Resolution::Render(page),
        None => {
            tracing::warn!(path, "no route for path, redirecting to /");
            Resolution::Redirect(Page::Home)
        }
    }
}
