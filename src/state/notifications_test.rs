use super::*;

fn notification(id: &str, kind: NotificationKind, timestamp: &str, read: bool) -> Notification {
    Notification {
        id: id.to_owned(),
        kind,
        title: format!("n{id}"),
        message: String::new(),
        timestamp: timestamp.to_owned(),
        read,
        action_post_id: None,
        count: None,
        price_change: None,
        deleted: false,
    }
}

fn sample() -> NotificationsState {
    let mut mention = notification("1", NotificationKind::Mention, "2 minutes ago", false);
    mention.action_post_id = Some("1".into());
    NotificationsState::new(vec![
        mention,
        notification("2", NotificationKind::Hashtag, "15 minutes ago", false),
        notification("3", NotificationKind::SavedPost, "1 hour ago", false),
        notification("4", NotificationKind::Follow, "2 hours ago", true),
        notification("6", NotificationKind::Hashtag, "1 day ago", true),
        notification("7", NotificationKind::System, "3 days ago", true),
    ])
}

// =============================================================
// Read state
// =============================================================

#[test]
fn unread_count_counts_unread() {
    assert_eq!(sample().unread_count(), 3);
}

#[test]
fn mark_read_and_mark_all() {
    let mut state = sample();
    state.mark_read("2");
    assert_eq!(state.unread_count(), 2);
    state.mark_read("missing");
    assert_eq!(state.unread_count(), 2);
    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn delete_removes_notification() {
    let mut state = sample();
    state.delete("3");
    assert_eq!(state.items.len(), 5);
    assert!(state.items.iter().all(|n| n.id != "3"));
}

#[test]
fn open_marks_read_and_returns_post() {
    let mut state = sample();
    assert_eq!(state.open("1"), Some("1".to_owned()));
    assert!(state.items[0].read);
    assert_eq!(state.open("2"), None);
    assert!(state.items[1].read);
}

// =============================================================
// Details and deleted posts
// =============================================================

#[test]
fn details_need_a_live_post() {
    let mut n = notification("9", NotificationKind::SavedPost, "1 hour ago", false);
    assert!(!n.has_details());
    n.action_post_id = Some("4".into());
    assert!(n.has_details());
    n.deleted = true;
    assert!(!n.has_details());
}

#[test]
fn opening_a_deleted_post_only_marks_read() {
    let mut gone = notification("9", NotificationKind::SavedPost, "1 hour ago", false);
    gone.action_post_id = Some("4".into());
    gone.deleted = true;
    let mut state = NotificationsState::new(vec![gone]);
    assert_eq!(state.open("9"), None);
    assert!(state.items[0].read);
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn tabs_filter_by_kind() {
    let state = sample();
    let ids = |tab| state.filtered(tab).iter().map(|n| n.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(NotificationTab::All).len(), 6);
    assert_eq!(ids(NotificationTab::Mentions), ["1"]);
    assert_eq!(ids(NotificationTab::Hashtags), ["2", "6"]);
    assert_eq!(ids(NotificationTab::System), ["7"]);
}

// =============================================================
// Time grouping
// =============================================================

#[test]
fn time_group_buckets() {
    assert_eq!(TimeGroup::of("2 minutes ago"), TimeGroup::Today);
    assert_eq!(TimeGroup::of("5 hours ago"), TimeGroup::Today);
    assert_eq!(TimeGroup::of("1 day ago"), TimeGroup::Yesterday);
    assert_eq!(TimeGroup::of("3 days ago"), TimeGroup::Earlier);
    assert_eq!(TimeGroup::of("last week"), TimeGroup::Earlier);
}

#[test]
fn grouped_preserves_order_within_groups() {
    let groups = sample().grouped(NotificationTab::All);
    let shape: Vec<(TimeGroup, usize)> = groups.iter().map(|(g, list)| (*g, list.len())).collect();
    assert_eq!(shape, [(TimeGroup::Today, 4), (TimeGroup::Yesterday, 1), (TimeGroup::Earlier, 1)]);
    assert_eq!(groups[0].1[0].id, "1");
    assert_eq!(groups[0].1[3].id, "4");
}
