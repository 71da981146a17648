#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Mention,
    Hashtag,
    SavedPost,
    Follow,
    System,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceChange {
    pub from: u64,
    pub to: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative time such as `"2 minutes ago"` or `"1 day ago"`.
    pub timestamp: String,
    pub read: bool,
    /// Post opened when the notification is clicked.
    #[serde(default)]
    pub action_post_id: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub price_change: Option<PriceChange>,
    #[serde(default)]
    pub deleted: bool,
}

impl Notification {
    /// Whether the linked post can still be opened. A deleted post only
    /// offers similar listings.
    #[must_use]
    pub fn has_details(&self) -> bool {
        self.action_post_id.is_some() && !self.deleted
    }
}

/// Tabs across the top of the notifications page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationTab {
    #[default]
    All,
    Mentions,
    Hashtags,
    System,
}

impl NotificationTab {
    pub const ALL: [Self; 4] = [Self::All, Self::Mentions, Self::Hashtags, Self::System];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Mentions => "Mentions",
            Self::Hashtags => "Hashtags",
            Self::System => "System",
        }
    }

    #[must_use]
    pub fn matches(self, kind: NotificationKind) -> bool {
        match self {
            Self::All => true,
            Self::Mentions => kind == NotificationKind::Mention,
            Self::Hashtags => kind == NotificationKind::Hashtag,
            Self::System => kind == NotificationKind::System,
        }
    }
}

/// Section headings the list is grouped under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeGroup {
    Today,
    Yesterday,
    Earlier,
}

impl TimeGroup {
    /// Bucket a relative timestamp: minutes or hours are today, exactly one
    /// day is yesterday, anything else is earlier.
    #[must_use]
    pub fn of(timestamp: &str) -> Self {
        let lower = timestamp.to_lowercase();
        if lower.contains("minute") || lower.contains("hour") {
            return Self::Today;
        }
        let leading: String = lower.trim_start().chars().take_while(char::is_ascii_digit).collect();
        if lower.contains("day") && leading == "1" {
            return Self::Yesterday;
        }
        Self::Earlier
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Yesterday => "Yesterday",
            Self::Earlier => "Earlier",
        }
    }
}

/// Notifications page state.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub tab: NotificationTab,
}

impl NotificationsState {
    #[must_use]
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items, tab: NotificationTab::default() }
    }

    pub fn mark_read(&mut self, id: &str) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn delete(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    #[must_use]
    pub fn filtered(&self, tab: NotificationTab) -> Vec<&Notification> {
        self.items.iter().filter(|n| tab.matches(n.kind)).collect()
    }

    /// Visible notifications for `tab`, grouped by [`TimeGroup`] in order of
    /// first appearance.
    #[must_use]
    pub fn grouped(&self, tab: NotificationTab) -> Vec<(TimeGroup, Vec<Notification>)> {
        let mut groups: Vec<(TimeGroup, Vec<Notification>)> = Vec::new();
        for n in self.filtered(tab) {
            let group = TimeGroup::of(&n.timestamp);
            match groups.iter_mut().find(|(g, _)| *g == group) {
                Some((_, list)) => list.push(n.clone()),
                None => groups.push((group, vec![n.clone()])),
            }
        }
        groups
    }

    /// Handle a click: mark it read and return the post to open, if it
    /// still has one.
    pub fn open(&mut self, id: &str) -> Option<String> {
        self.mark_read(id);
        self.items
            .iter()
            .find(|n| n.id == id)
            .filter(|n| n.has_details())
            .and_then(|n| n.action_post_id.clone())
    }
}
