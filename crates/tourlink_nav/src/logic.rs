// --- File: crates/tourlink_nav/src/logic.rs ---
//! Navigation link resolution.
//!
//! Pure over its inputs: a role's static link table plus the current path
//! produce the rendered link list. Active state is a prefix match, not an
//! exact match, so `/traveler/bookings` stays highlighted on
//! `/traveler/bookings/42`.

use serde::Serialize;

/// The two user roles the shell renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Traveler,
    Guide,
}

/// A static navigation entry: path and label, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// A link resolved against the current path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RenderedNavLink {
    pub href: String,
    pub label: String,
    pub active: bool,
}

const TRAVELER_LINKS: &[NavLink] = &[
    NavLink {
        href: "/traveler/search",
        label: "Find guides",
    },
    NavLink {
        href: "/traveler/bookings",
        label: "My trips",
    },
    NavLink {
        href: "/messages",
        label: "Messages",
    },
];

const GUIDE_LINKS: &[NavLink] = &[
    NavLink {
        href: "/guide/dashboard",
        label: "Dashboard",
    },
    NavLink {
        href: "/guide/schedule",
        label: "Schedule",
    },
    NavLink {
        href: "/guide/profile",
        label: "Guide profile",
    },
];

/// The static link table for a role.
pub fn links_for_role(role: Role) -> &'static [NavLink] {
    match role {
        Role::Traveler => TRAVELER_LINKS,
        Role::Guide => GUIDE_LINKS,
    }
}

/// Resolve a role's links against the current path.
pub fn resolve_nav(role: Role, current_path: &str) -> Vec<RenderedNavLink> {
    links_for_role(role)
        .iter()
        .map(|link| RenderedNavLink {
            href: link.href.to_string(),
            label: link.label.to_string(),
            active: current_path.starts_with(link.href),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_hrefs(links: &[RenderedNavLink]) -> Vec<&str> {
        links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href.as_str())
            .collect()
    }

    #[test]
    fn prefix_match_keeps_parent_link_active_on_detail_pages() {
        let links = resolve_nav(Role::Traveler, "/traveler/bookings/42");
        assert_eq!(active_hrefs(&links), vec!["/traveler/bookings"]);
    }

    #[test]
    fn unrelated_path_leaves_the_link_inactive() {
        let links = resolve_nav(Role::Traveler, "/traveler/search");
        assert_eq!(active_hrefs(&links), vec!["/traveler/search"]);
        assert!(!links.iter().any(|l| l.href == "/traveler/bookings" && l.active));
    }

    #[test]
    fn guide_links_resolve_independently_of_traveler_links() {
        let links = resolve_nav(Role::Guide, "/guide/schedule/week/12");
        assert_eq!(active_hrefs(&links), vec!["/guide/schedule"]);
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn foreign_path_marks_nothing_active() {
        let links = resolve_nav(Role::Guide, "/traveler/search");
        assert!(active_hrefs(&links).is_empty());
    }
}
