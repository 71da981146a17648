use super::*;
use futures::executor::block_on;

// =============================================================
// TaskGroup
// =============================================================

#[test]
fn guarded_future_completes_when_not_cancelled() {
    let group = TaskGroup::new();
    let result = block_on(group.guard(async { 7 }));
    assert_eq!(result, Ok(7));
}

#[test]
fn cancel_aborts_pending_future() {
    let group = TaskGroup::new();
    let pending = group.guard(futures::future::pending::<()>());
    group.cancel_all();
    assert_eq!(block_on(pending), Err(MockApiError::Cancelled));
    assert!(group.is_cancelled());
}

#[test]
fn future_guarded_after_cancel_never_runs() {
    let group = TaskGroup::new();
    group.cancel_all();
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    let result = block_on(group.guard(async move { flag.store(true, Ordering::SeqCst) }));
    assert_eq!(result, Err(MockApiError::Cancelled));
    assert!(!ran.load(Ordering::SeqCst));
}

#[test]
fn clones_share_cancellation() {
    let group = TaskGroup::new();
    let view_copy = group.clone();
    let pending = view_copy.guard(futures::future::pending::<u8>());
    group.cancel_all();
    assert!(view_copy.is_cancelled());
    assert_eq!(block_on(pending), Err(MockApiError::Cancelled));
}

#[test]
fn finished_futures_release_their_handles() {
    let group = TaskGroup::new();
    for i in 0..1000 {
        assert_eq!(block_on(group.guard(async move { i })), Ok(i));
    }
    assert_eq!(group.pending(), 0);
}

#[test]
fn unfinished_futures_stay_tracked_until_resolved() {
    let group = TaskGroup::new();
    let first = group.guard(async { 1 });
    let second = group.guard(async { 2 });
    assert_eq!(group.pending(), 2);
    assert_eq!(block_on(first), Ok(1));
    assert_eq!(group.pending(), 1);
    assert_eq!(block_on(second), Ok(2));
    assert_eq!(group.pending(), 0);
}

#[test]
fn cancel_releases_every_handle() {
    let group = TaskGroup::new();
    let pending = group.guard(futures::future::pending::<()>());
    group.cancel_all();
    assert_eq!(group.pending(), 0);
    assert_eq!(block_on(pending), Err(MockApiError::Cancelled));
    assert_eq!(group.pending(), 0);
}

// =============================================================
// every
// =============================================================

#[test]
fn every_stops_when_callback_says_so() {
    let mut remaining = 3;
    let ticks = block_on(every(Duration::ZERO, || {
        remaining -= 1;
        remaining > 0
    }));
    assert_eq!(ticks, 3);
    assert_eq!(remaining, 0);
}
