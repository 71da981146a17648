use super::*;

fn comment(id: &str, upvotes: u32) -> Comment {
    Comment {
        id: id.to_owned(),
        author: "A".into(),
        content: "c".into(),
        timestamp: "now".into(),
        upvotes,
        replies: Vec::new(),
    }
}

fn detail(stock: u32, images: usize) -> ProductDetail {
    ProductDetail {
        id: "1".into(),
        title: "Phone".into(),
        description: String::new(),
        images: (0..images).map(|i| format!("img{i}")).collect(),
        price: 100,
        original_price: None,
        stock,
        sold: 0,
        tags: Vec::new(),
        shop: ShopProfile {
            seller: Seller::default(),
            rating: 4.8,
            total_ratings: 10,
            followers: 5,
            joined: "3 years ago".into(),
        },
        upvotes: 0,
        downvotes: 0,
        comments: vec![comment("1", 5), comment("2", 2)],
    }
}

// =============================================================
// Quantity
// =============================================================

#[test]
fn product_state_starts_at_one() {
    let state = ProductState::new(&detail(12, 2));
    assert_eq!(state.quantity, 1);
    assert_eq!(state.image_index, 0);
    assert!(!state.saved && !state.following);
}

#[test]
fn quantity_never_drops_below_one() {
    let mut state = ProductState::new(&detail(12, 1));
    state.change_quantity(-1);
    assert_eq!(state.quantity, 1);
}

#[test]
fn quantity_capped_at_stock() {
    let mut state = ProductState::new(&detail(3, 1));
    state.change_quantity(1);
    state.change_quantity(1);
    assert_eq!(state.quantity, 3);
    state.change_quantity(1);
    assert_eq!(state.quantity, 3);
    state.change_quantity(-1);
    assert_eq!(state.quantity, 2);
}

// =============================================================
// Gallery
// =============================================================

#[test]
fn gallery_wraps_both_ways() {
    let mut state = ProductState::new(&detail(1, 3));
    state.prev_image();
    assert_eq!(state.image_index, 2);
    state.next_image();
    assert_eq!(state.image_index, 0);
}

#[test]
fn gallery_without_images_stays_put() {
    let mut state = ProductState::new(&detail(1, 0));
    state.next_image();
    state.prev_image();
    assert_eq!(state.image_index, 0);
}

// =============================================================
// Gated actions
// =============================================================

#[test]
fn non_members_are_prompted_for_every_action() {
    let actions = [
        ProductAction::AddToCart,
        ProductAction::BuyNow,
        ProductAction::Save,
        ProductAction::Follow,
        ProductAction::Comment,
    ];
    let mut state = ProductState::new(&detail(5, 1));
    for action in actions {
        assert_eq!(state.attempt(action, false), Gate::PromptRegister);
    }
    assert!(!state.saved && !state.following);
}

#[test]
fn members_toggle_save_and_follow() {
    let mut state = ProductState::new(&detail(5, 1));
    assert_eq!(state.attempt(ProductAction::Save, true), Gate::Allowed);
    assert_eq!(state.attempt(ProductAction::Follow, true), Gate::Allowed);
    assert!(state.saved && state.following);
}

#[test]
fn empty_comment_is_ignored() {
    let mut state = ProductState::new(&detail(5, 1));
    state.comment = "   ".into();
    assert_eq!(state.attempt(ProductAction::Comment, true), Gate::Ignored);
    state.comment = "Nice!".into();
    assert_eq!(state.attempt(ProductAction::Comment, true), Gate::Allowed);
    assert!(state.comment.is_empty());
}

// =============================================================
// Comments
// =============================================================

#[test]
fn top_comments_sort_by_upvotes() {
    let comments = vec![comment("a", 1), comment("b", 9), comment("c", 4)];
    let top: Vec<String> =
        sorted_comments(&comments, CommentSort::Top).into_iter().map(|c| c.id).collect();
    assert_eq!(top, ["b", "c", "a"]);
    let newest: Vec<String> =
        sorted_comments(&comments, CommentSort::Newest).into_iter().map(|c| c.id).collect();
    assert_eq!(newest, ["a", "b", "c"]);
}
