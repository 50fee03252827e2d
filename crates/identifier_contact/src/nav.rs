//! Site navigation.

/// Brand shown in the navigation bar.
pub const SITE_NAME: &str = "Object Identifier";

/// A navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// Target path
    pub href: &'static str,
}

/// Links shown on every page, in order.
pub fn nav_links() -> [NavLink; 3] {
    [
        NavLink {
            label: "Home",
            href: "/",
        },
        NavLink {
            label: "About",
            href: "/about",
        },
        NavLink {
            label: "Contact",
            href: "/contact",
        },
    ]
}
