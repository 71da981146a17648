//! Hardcoded marketplace data served by the simulated API.

use crate::net::types::Seller;
use crate::state::feed::{Post, Price};
use crate::state::notifications::{Notification, NotificationKind, PriceChange};
use crate::state::orders::{Order, OrderLine, OrderStatus, ShippingInfo, Timeline};
use crate::state::product::{Comment, ProductDetail, ShopProfile};

const PHONE_IMAGE: &str = "https://images.unsplash.com/photo-1598860237986-013eede8beae?w=1080";
const FASHION_IMAGE: &str = "https://images.unsplash.com/photo-1685464583257-66f61ea61380?w=1080";
const FOOD_IMAGE: &str = "https://images.unsplash.com/photo-1600555379885-08a02224726d?w=1080";

fn seller(id: &str, name: &str, verified: bool) -> Seller {
    Seller { id: id.to_owned(), name: name.to_owned(), avatar: String::new(), verified }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// A trending hashtag and how many posts use it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendingTag {
    pub tag: &'static str,
    pub count: u32,
}

/// A shop suggested in the home sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestedSeller {
    pub id: &'static str,
    pub name: &'static str,
    pub followers: &'static str,
    pub verified: bool,
}

#[must_use]
pub fn feed_posts() -> Vec<Post> {
    vec![
        Post {
            id: "1".into(),
            seller: seller("seller1", "TechStore VN", true),
            title: "iPhone 15 Pro Max 256GB - Official VN/A".into(),
            description:
                "Brand new, sealed, 12 month official Apple warranty. Natural Titanium, 256GB."
                    .into(),
            images: strings(&[PHONE_IMAGE]),
            tags: strings(&["iphone", "apple", "smartphone", "official"]),
            price: Some(Price::Single(29_990_000)),
            stock: 12,
            upvotes: 45,
            downvotes: 3,
            comments: 23,
            timestamp: "2 hours ago".into(),
            upvoted: false,
            downvoted: false,
            saved: false,
        },
        Post {
            id: "2".into(),
            seller: seller("seller2", "Fashion House", false),
            title: "Vintage crop top + pleated skirt set".into(),
            description:
                "Soft cotton vintage set, good for work or going out. Sizes S, M, L in stock."
                    .into(),
            images: strings(&[FASHION_IMAGE]),
            tags: strings(&["fashion", "vintage", "croptop", "skirt"]),
            price: Some(Price::Range { min: 299_000, max: 399_000 }),
            stock: 25,
            upvotes: 28,
            downvotes: 1,
            comments: 12,
            timestamp: "4 hours ago".into(),
            upvoted: true,
            downvoted: false,
            saved: true,
        },
        Post {
            id: "3".into(),
            seller: seller("seller3", "Foodie Corner", true),
            title: "Hanoi fish cake banh mi - delivered".into(),
            description:
                "Made from fresh fish with traditional spices. Delivered within 30 minutes."
                    .into(),
            images: strings(&[FOOD_IMAGE]),
            tags: strings(&["food", "banhmi", "hanoi", "delivery"]),
            price: Some(Price::Single(25_000)),
            stock: 50,
            upvotes: 67,
            downvotes: 2,
            comments: 34,
            timestamp: "1 day ago".into(),
            upvoted: false,
            downvoted: false,
            saved: false,
        },
    ]
}

#[must_use]
pub fn trending_tags() -> Vec<TrendingTag> {
    [("iphone", 234), ("fashion", 189), ("food", 156), ("vintage", 98), ("tech", 87)]
        .into_iter()
        .map(|(tag, count)| TrendingTag { tag, count })
        .collect()
}

#[must_use]
pub fn categories() -> Vec<&'static str> {
    vec!["Electronics", "Fashion", "Food", "Home", "Books", "Sports", "Beauty"]
}

#[must_use]
pub fn suggested_sellers() -> Vec<SuggestedSeller> {
    vec![
        SuggestedSeller { id: "1", name: "TechWorld VN", followers: "12.5K", verified: true },
        SuggestedSeller { id: "2", name: "Fashion Boutique", followers: "8.2K", verified: false },
        SuggestedSeller { id: "3", name: "Home Decor Plus", followers: "6.7K", verified: true },
    ]
}

/// Full detail for a feed post, built from its feed entry.
#[must_use]
pub fn product_detail(post_id: &str) -> Option<ProductDetail> {
    let post = feed_posts().into_iter().find(|p| p.id == post_id)?;
    let price = match post.price {
        Some(Price::Single(amount)) => amount,
        Some(Price::Range { min, .. }) => min,
        None => 0,
    };
    let original_price = (post.id == "1").then_some(32_990_000);
    Some(ProductDetail {
        id: post.id,
        title: post.title,
        description: post.description,
        images: vec![post.images.first().cloned().unwrap_or_default(); 2],
        price,
        original_price,
        stock: post.stock,
        sold: 128,
        tags: post.tags,
        shop: ShopProfile {
            seller: post.seller,
            rating: 4.8,
            total_ratings: 1250,
            followers: 15_400,
            joined: "Joined 3 years ago".into(),
        },
        upvotes: post.upvotes,
        downvotes: post.downvotes,
        comments: vec![
            Comment {
                id: "1".into(),
                author: "Nguyen Van A".into(),
                content: "Great quality, fast delivery. Recommended!".into(),
                timestamp: "2 hours ago".into(),
                upvotes: 5,
                replies: vec![Comment {
                    id: "1-1".into(),
                    author: "TechStore VN".into(),
                    content: "Thank you for trusting our shop!".into(),
                    timestamp: "1 hour ago".into(),
                    upvotes: 2,
                    replies: Vec::new(),
                }],
            },
            Comment {
                id: "2".into(),
                author: "Tran Thi B".into(),
                content: "Do you offer installments?".into(),
                timestamp: "5 hours ago".into(),
                upvotes: 2,
                replies: Vec::new(),
            },
        ],
    })
}

fn notification(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    timestamp: &str,
    read: bool,
) -> Notification {
    Notification {
        id: id.to_owned(),
        kind,
        title: title.to_owned(),
        message: message.to_owned(),
        timestamp: timestamp.to_owned(),
        read,
        action_post_id: None,
        count: None,
        price_change: None,
        deleted: false,
    }
}

#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            action_post_id: Some("1".into()),
            ..notification(
                "1",
                NotificationKind::Mention,
                "You were mentioned in a comment",
                "TechStore VN mentioned you on \"iPhone 15 Pro Max\"",
                "2 minutes ago",
                false,
            )
        },
        Notification {
            count: Some(3),
            ..notification(
                "2",
                NotificationKind::Hashtag,
                "New posts tagged #smartphone",
                "3 new posts with #smartphone, which you follow",
                "15 minutes ago",
                false,
            )
        },
        Notification {
            price_change: Some(PriceChange { from: 399_000, to: 299_000 }),
            action_post_id: Some("2".into()),
            ..notification(
                "3",
                NotificationKind::SavedPost,
                "A saved item was updated",
                "\"Vintage crop top + skirt set\" dropped in price",
                "1 hour ago",
                false,
            )
        },
        Notification {
            count: Some(3),
            ..notification(
                "4",
                NotificationKind::Follow,
                "New followers",
                "Fashion Lover and 2 others started following your shop",
                "2 hours ago",
                true,
            )
        },
        Notification {
            deleted: true,
            ..notification(
                "5",
                NotificationKind::SavedPost,
                "A saved item was removed",
                "\"Vintage hoodie\" was deleted by its seller",
                "3 hours ago",
                true,
            )
        },
        Notification {
            count: Some(5),
            ..notification(
                "6",
                NotificationKind::Hashtag,
                "New posts tagged #fashion",
                "5 new posts with #fashion, which you follow",
                "5 hours ago",
                true,
            )
        },
        notification(
            "7",
            NotificationKind::System,
            "Policy update",
            "We updated our privacy policy and terms of use.",
            "1 day ago",
            true,
        ),
    ]
}

fn line(id: &str, name: &str, variant: &str, quantity: u32, price: u64) -> OrderLine {
    OrderLine {
        id: id.to_owned(),
        name: name.to_owned(),
        image: PHONE_IMAGE.to_owned(),
        variant: variant.to_owned(),
        quantity,
        price,
    }
}

fn shipping(address: &str, recipient: &str, phone: &str) -> ShippingInfo {
    ShippingInfo {
        address: address.to_owned(),
        recipient: recipient.to_owned(),
        phone: phone.to_owned(),
    }
}

fn at(time: &str) -> Option<String> {
    Some(time.to_owned())
}

#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "1".into(),
            code: "ORD12345".into(),
            date: "15/03/2024".into(),
            seller: seller("s1", "TechStore VN", true),
            products: vec![
                line("p1", "iPhone 15 Pro Max 256GB", "Natural Titanium", 1, 29_990_000),
                line("p2", "AirPods Pro Gen 2", "USB-C", 1, 6_490_000),
            ],
            total: 36_480_000,
            status: OrderStatus::Completed,
            shipping: shipping("123 ABC Street, District 1, HCMC", "Nguyen Van A", "0901234567"),
            payment_method: "Cash on delivery".into(),
            timeline: Timeline {
                ordered: at("15/03/2024 10:30"),
                processing: at("15/03/2024 14:20"),
                shipping: at("16/03/2024 08:00"),
                completed: at("17/03/2024 15:45"),
                cancelled: None,
            },
        },
        Order {
            id: "2".into(),
            code: "ORD12346".into(),
            date: "18/03/2024".into(),
            seller: seller("s2", "Fashion House", false),
            products: vec![line("p3", "Premium men's jacket", "Size L - Black", 2, 850_000)],
            total: 1_700_000,
            status: OrderStatus::Shipping,
            shipping: shipping("456 DEF Street, District 3, HCMC", "Tran Thi B", "0907654321"),
            payment_method: "Bank transfer".into(),
            timeline: Timeline {
                ordered: at("18/03/2024 09:15"),
                processing: at("18/03/2024 11:00"),
                shipping: at("19/03/2024 07:30"),
                ..Timeline::default()
            },
        },
        Order {
            id: "3".into(),
            code: "ORD12347".into(),
            date: "20/03/2024".into(),
            seller: seller("s3", "Laptop Pro Store", true),
            products: vec![line("p4", "MacBook Air M2", "16GB RAM - 512GB SSD", 1, 32_990_000)],
            total: 32_990_000,
            status: OrderStatus::Processing,
            shipping: shipping("789 JKL Street, District 7, HCMC", "Le Van C", "0909876543"),
            payment_method: "E-wallet".into(),
            timeline: Timeline {
                ordered: at("20/03/2024 14:20"),
                processing: at("20/03/2024 16:00"),
                ..Timeline::default()
            },
        },
    ]
}
