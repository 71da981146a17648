#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Seller;
use crate::util::format::{format_vnd, format_vnd_range};

/// Asking price of a post: one price or a range across variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Price {
    Single(u64),
    Range { min: u64, max: u64 },
}

impl Price {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Single(amount) => format_vnd(amount),
            Self::Range { min, max } => format_vnd_range(min, max),
        }
    }
}

/// A listing in the home feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub seller: Seller,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub price: Option<Price>,
    pub stock: u32,
    pub upvotes: u32,
    pub downvotes: u32,
    pub comments: u32,
    pub timestamp: String,
    #[serde(default)]
    pub upvoted: bool,
    #[serde(default)]
    pub downvoted: bool,
    #[serde(default)]
    pub saved: bool,
}

impl Post {
    /// Toggle an upvote. Upvoting clears an existing downvote.
    pub fn upvote(&mut self) {
        if self.upvoted {
            self.upvoted = false;
            self.upvotes = self.upvotes.saturating_sub(1);
        } else {
            self.upvoted = true;
            self.upvotes += 1;
            if self.downvoted {
                self.downvoted = false;
                self.downvotes = self.downvotes.saturating_sub(1);
            }
        }
    }

    /// Toggle a downvote. Downvoting clears an existing upvote.
    pub fn downvote(&mut self) {
        if self.downvoted {
            self.downvoted = false;
            self.downvotes = self.downvotes.saturating_sub(1);
        } else {
            self.downvoted = true;
            self.downvotes += 1;
            if self.upvoted {
                self.upvoted = false;
                self.upvotes = self.upvotes.saturating_sub(1);
            }
        }
    }

    pub fn toggle_saved(&mut self) {
        self.saved = !self.saved;
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    #[must_use]
    pub fn price_label(&self) -> Option<String> {
        self.price.map(Price::label)
    }
}

/// Feed ordering options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Best,
    Worst,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Best, Self::Worst];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Best => "best",
            Self::Worst => "worst",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Best => "Most upvoted",
            Self::Worst => "Most downvoted",
        }
    }

    /// Parse a `<select>` value; unknown values mean newest.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "best" => Self::Best,
            "worst" => Self::Worst,
            _ => Self::Newest,
        }
    }
}

/// Home feed state.
#[derive(Clone, Debug, Default)]
pub struct FeedState {
    pub posts: Vec<Post>,
    pub sort: SortOrder,
    pub category: Option<String>,
}

impl FeedState {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts, ..Self::default() }
    }

    /// Reorder the posts in place. Sorting is stable; newest leaves the
    /// current order alone.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        match sort {
            SortOrder::Newest => {}
            SortOrder::Best => self.posts.sort_by(|a, b| b.upvotes.cmp(&a.upvotes)),
            SortOrder::Worst => self.posts.sort_by(|a, b| b.downvotes.cmp(&a.downvotes)),
        }
    }

    /// Select a category, or clear the selection with `None`.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    pub fn post_mut(&mut self, id: &str) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }
}
