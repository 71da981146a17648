#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Seller;

/// Seller details shown on the product page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShopProfile {
    pub seller: Seller,
    pub rating: f32,
    pub total_ratings: u32,
    pub followers: u32,
    pub joined: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: String,
    pub upvotes: u32,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// Full listing shown on the product page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub price: u64,
    pub original_price: Option<u64>,
    pub stock: u32,
    pub sold: u32,
    pub tags: Vec<String>,
    pub shop: ShopProfile,
    pub upvotes: u32,
    pub downvotes: u32,
    pub comments: Vec<Comment>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommentSort {
    #[default]
    Top,
    Newest,
}

/// Actions on the product page that require an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductAction {
    AddToCart,
    BuyNow,
    Save,
    Follow,
    Comment,
}

/// Outcome of trying a [`ProductAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// The action ran.
    Allowed,
    /// The session may not do this; show the register prompt.
    PromptRegister,
    /// Nothing to do (e.g. an empty comment).
    Ignored,
}

/// Per-visit interaction state of the product page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductState {
    pub quantity: u32,
    pub image_index: usize,
    pub saved: bool,
    pub following: bool,
    pub comment: String,
    pub comment_sort: CommentSort,
    stock: u32,
    image_count: usize,
}

impl ProductState {
    #[must_use]
    pub fn new(detail: &ProductDetail) -> Self {
        Self {
            quantity: 1,
            image_index: 0,
            saved: false,
            following: false,
            comment: String::new(),
            comment_sort: CommentSort::default(),
            stock: detail.stock,
            image_count: detail.images.len(),
        }
    }

    /// Change the quantity by `delta`, ignoring changes that leave `1..=stock`.
    pub fn change_quantity(&mut self, delta: i32) {
        let next = i64::from(self.quantity) + i64::from(delta);
        if next >= 1 && next <= i64::from(self.stock) {
            self.quantity = u32::try_from(next).unwrap_or(self.quantity);
        }
    }

    pub fn next_image(&mut self) {
        if self.image_count > 0 {
            self.image_index = (self.image_index + 1) % self.image_count;
        }
    }

    pub fn prev_image(&mut self) {
        if self.image_count > 0 {
            self.image_index = (self.image_index + self.image_count - 1) % self.image_count;
        }
    }

    /// Run `action` for a session that is (`is_member`) or is not signed in.
    ///
    /// Anyone without an account is asked to register instead.
    pub fn attempt(&mut self, action: ProductAction, is_member: bool) -> Gate {
        if !is_member {
            return Gate::PromptRegister;
        }
        match action {
            ProductAction::AddToCart => log::info!("added {} item(s) to cart", self.quantity),
            ProductAction::BuyNow => log::info!("buy now: {} item(s)", self.quantity),
            ProductAction::Save => self.saved = !self.saved,
            ProductAction::Follow => self.following = !self.following,
            ProductAction::Comment => {
                if self.comment.trim().is_empty() {
                    return Gate::Ignored;
                }
                log::info!("comment posted ({} chars)", self.comment.trim().chars().count());
                self.comment.clear();
            }
        }
        Gate::Allowed
    }
}

/// Comments ordered for display.
#[must_use]
pub fn sorted_comments(comments: &[Comment], sort: CommentSort) -> Vec<Comment> {
    let mut out = comments.to_vec();
    if sort == CommentSort::Top {
        out.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
    }
    out
}
