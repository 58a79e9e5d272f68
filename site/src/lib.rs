//! Shared core of the portfolio site: content model, bundled copy, route
//! table and the contact-form state machine. Nothing here touches the DOM,
//! so the frontend and the CLI both build on it.

pub mod contact;
pub mod content;
pub mod model;
pub mod motion;
pub mod route;

pub use contact::{
    CONFIRMATION_WINDOW, ContactError, ContactForm, Field, FormState, SENT_MESSAGE, Ticket,
};
pub use content::SiteSnapshot;
pub use model::{Highlight, Milestone, Profile, Project, Skill};
pub use route::{Page, ROUTES, Resolution, Route, resolve};
