#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Seller;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Processing,
    Shipping,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 4] = [Self::Processing, Self::Shipping, Self::Completed, Self::Cancelled];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Shipping => "shipping",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Shipping => "Shipping",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// CSS modifier for the status badge.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::Processing | Self::Completed => "badge--default",
            Self::Shipping => "badge--secondary",
            Self::Cancelled => "badge--destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    pub name: String,
    pub image: String,
    pub variant: String,
    pub quantity: u32,
    pub price: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub address: String,
    pub recipient: String,
    pub phone: String,
}

/// Timestamps of each lifecycle step the order has reached.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub ordered: Option<String>,
    pub processing: Option<String>,
    pub shipping: Option<String>,
    pub completed: Option<String>,
    pub cancelled: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub code: String,
    pub date: String,
    pub seller: Seller,
    pub products: Vec<OrderLine>,
    pub total: u64,
    pub status: OrderStatus,
    pub shipping: ShippingInfo,
    pub payment_method: String,
    pub timeline: Timeline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Done,
    Active,
    Upcoming,
}

/// One row of the order detail timeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineStep {
    pub label: &'static str,
    pub time: Option<String>,
    pub state: StepState,
}

impl Order {
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.products.iter().map(|p| p.quantity).sum()
    }

    /// Timeline rows for the detail modal. A cancelled order ends in a
    /// cancelled step instead of the completed one.
    #[must_use]
    pub fn timeline_steps(&self) -> Vec<TimelineStep> {
        let t = &self.timeline;
        let last = if self.status == OrderStatus::Cancelled {
            ("Cancelled", &t.cancelled, false)
        } else {
            ("Completed", &t.completed, false)
        };
        [
            ("Ordered", &t.ordered, false),
            (
                "Processing",
                &t.processing,
                self.status == OrderStatus::Processing && t.shipping.is_none(),
            ),
            (
                "Shipping",
                &t.shipping,
                self.status == OrderStatus::Shipping && t.completed.is_none(),
            ),
            last,
        ]
        .into_iter()
        .map(|(label, time, active)| TimelineStep {
            label,
            time: time.clone(),
            state: if active {
                StepState::Active
            } else if time.is_some() {
                StepState::Done
            } else {
                StepState::Upcoming
            },
        })
        .collect()
    }
}

/// Status dropdown value on the order history page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        OrderStatus::ALL.into_iter().find(|s| s.as_str() == raw).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn accepts(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(s) => s == status,
        }
    }
}

/// Orders matching the status filter whose code or seller name contains
/// `query`, ignoring case. An empty query matches everything.
#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], filter: StatusFilter, query: &str) -> Vec<&'a Order> {
    let needle = query.trim().to_lowercase();
    orders
        .iter()
        .filter(|o| filter.accepts(o.status))
        .filter(|o| {
            needle.is_empty()
                || o.code.to_lowercase().contains(&needle)
                || o.seller.name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Order history page state.
#[derive(Clone, Debug, Default)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    pub filter: StatusFilter,
    pub query: String,
    pub selected: Option<String>,
}

impl OrdersState {
    #[must_use]
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders, ..Self::default() }
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&Order> {
        filter_orders(&self.orders, self.filter, &self.query)
    }

    #[must_use]
    pub fn selected_order(&self) -> Option<&Order> {
        let id = self.selected.as_deref()?;
        self.orders.iter().find(|o| o.id == id)
    }
}
