use super::*;

fn order(id: &str, code: &str, seller: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_owned(),
        code: code.to_owned(),
        date: "15/03/2024".into(),
        seller: Seller { id: format!("s{id}"), name: seller.to_owned(), ..Seller::default() },
        products: vec![
            OrderLine {
                id: "p1".into(),
                name: "Item".into(),
                image: String::new(),
                variant: String::new(),
                quantity: 2,
                price: 100,
            },
            OrderLine {
                id: "p2".into(),
                name: "Other".into(),
                image: String::new(),
                variant: String::new(),
                quantity: 1,
                price: 50,
            },
        ],
        total: 250,
        status,
        shipping: ShippingInfo {
            address: String::new(),
            recipient: String::new(),
            phone: String::new(),
        },
        payment_method: "COD".into(),
        timeline: Timeline::default(),
    }
}

fn sample() -> Vec<Order> {
    vec![
        order("1", "ORD12345", "TechStore VN", OrderStatus::Completed),
        order("2", "ORD12346", "Fashion House", OrderStatus::Shipping),
        order("3", "ORD12347", "Laptop Pro Store", OrderStatus::Processing),
    ]
}

fn ids(orders: &[&Order]) -> Vec<String> {
    orders.iter().map(|o| o.id.clone()).collect()
}

// =============================================================
// StatusFilter
// =============================================================

#[test]
fn status_filter_parses_select_values() {
    assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
    assert_eq!(StatusFilter::parse("shipping"), StatusFilter::Only(OrderStatus::Shipping));
    assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    for status in OrderStatus::ALL {
        assert_eq!(
            StatusFilter::parse(StatusFilter::Only(status).as_str()),
            StatusFilter::Only(status)
        );
    }
}

// =============================================================
// filter_orders
// =============================================================

#[test]
fn filter_all_with_empty_query_returns_everything() {
    let orders = sample();
    assert_eq!(ids(&filter_orders(&orders, StatusFilter::All, "")), ["1", "2", "3"]);
}

#[test]
fn filter_by_status() {
    let orders = sample();
    let hits = filter_orders(&orders, StatusFilter::Only(OrderStatus::Shipping), "");
    assert_eq!(ids(&hits), ["2"]);
    assert!(filter_orders(&orders, StatusFilter::Only(OrderStatus::Cancelled), "").is_empty());
}

#[test]
fn search_matches_code_or_seller_ignoring_case() {
    let orders = sample();
    assert_eq!(ids(&filter_orders(&orders, StatusFilter::All, "ord12347")), ["3"]);
    assert_eq!(ids(&filter_orders(&orders, StatusFilter::All, "  fashion ")), ["2"]);
    assert!(filter_orders(&orders, StatusFilter::All, "nothing").is_empty());
}

#[test]
fn search_and_status_combine() {
    let orders = sample();
    assert!(
        filter_orders(&orders, StatusFilter::Only(OrderStatus::Completed), "fashion").is_empty()
    );
}

// =============================================================
// Order details
// =============================================================

#[test]
fn item_count_sums_quantities() {
    assert_eq!(sample()[0].item_count(), 3);
}

#[test]
fn timeline_marks_current_step_active() {
    let mut o = order("2", "ORD12346", "Fashion House", OrderStatus::Shipping);
    o.timeline = Timeline {
        ordered: Some("18/03 09:15".into()),
        processing: Some("18/03 11:00".into()),
        shipping: Some("19/03 07:30".into()),
        ..Timeline::default()
    };
    let states: Vec<StepState> = o.timeline_steps().iter().map(|s| s.state).collect();
    assert_eq!(states, [StepState::Done, StepState::Done, StepState::Active, StepState::Upcoming]);
}

#[test]
fn cancelled_order_ends_with_cancelled_step() {
    let mut o = order("9", "ORD9", "Shop", OrderStatus::Cancelled);
    o.timeline.ordered = Some("t0".into());
    o.timeline.cancelled = Some("t1".into());
    let steps = o.timeline_steps();
    assert_eq!(steps.last().map(|s| s.label), Some("Cancelled"));
    assert_eq!(steps.last().map(|s| s.state), Some(StepState::Done));
    assert_eq!(steps[1].state, StepState::Upcoming);
}

// =============================================================
// OrdersState
// =============================================================

#[test]
fn orders_state_selection() {
    let mut state = OrdersState::new(sample());
    assert!(state.selected_order().is_none());
    state.selected = Some("2".into());
    assert_eq!(state.selected_order().map(|o| o.code.as_str()), Some("ORD12346"));
    state.filter = StatusFilter::Only(OrderStatus::Processing);
    assert_eq!(ids(&state.visible()), ["3"]);
}
