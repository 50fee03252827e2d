//! Static pages for Object Identifier.
//!
//! The About page is fixed content. The Contact page validates a
//! [`ContactForm`] and posts it as JSON through a [`ContactClient`];
//! [`ContactFormState`] tracks what the page shows around a submission.

mod about;
mod client;
mod form;
mod nav;
mod state;

pub use about::{ABOUT_TITLE, AboutPage, AboutSection};
pub use client::{ContactClient, DEFAULT_CONTACT_ENDPOINT};
pub use form::{ContactForm, ContactFormBuilder};
pub use nav::{NavLink, SITE_NAME, nav_links};
pub use state::{ContactFormState, SUBMIT_LABEL, SUBMITTING_LABEL, SUCCESS_MESSAGE};
