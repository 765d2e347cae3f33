// --- File: crates/tourlink_nav/src/notifications.rs ---
//! Notification indicator composed into the navigation shell.
//!
//! The shell only needs the unread count; the feed itself is the static
//! sample set the frontend ships until a real notification source exists.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Booking,
    Message,
    System,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: &'static str,
    pub kind: NotificationKind,
    pub title: &'static str,
    pub content: &'static str,
    pub read: bool,
}

/// The badge the shell renders next to the bell.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NotificationIndicator {
    pub unread_count: usize,
}

pub fn sample_feed() -> &'static [Notification] {
    const FEED: &[Notification] = &[
        Notification {
            id: "1",
            kind: NotificationKind::Booking,
            title: "Booking confirmed",
            content: "Your guide confirmed the tour on Tue 2.24.",
            read: false,
        },
        Notification {
            id: "2",
            kind: NotificationKind::Message,
            title: "New message",
            content: "Guide: the meeting point is exit 3 of Anguk station.",
            read: false,
        },
        Notification {
            id: "3",
            kind: NotificationKind::System,
            title: "Leave a review",
            content: "How was yesterday's tour? Write a review and earn points.",
            read: true,
        },
    ];
    FEED
}

/// Derive the indicator from a feed.
pub fn indicator(feed: &[Notification]) -> NotificationIndicator {
    NotificationIndicator {
        unread_count: feed.iter().filter(|n| !n.read).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_counts_only_unread_entries() {
        assert_eq!(indicator(sample_feed()).unread_count, 2);
        assert_eq!(indicator(&[]).unread_count, 0);
    }
}
