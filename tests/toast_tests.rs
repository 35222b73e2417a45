use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reposcope::app::toast::DismissTimer;

fn flag() -> (Arc<AtomicBool>, impl FnOnce() + Send + 'static) {
    let fired = Arc::new(AtomicBool::new(false));
    let setter = {
        let fired = fired.clone();
        move || fired.store(true, Ordering::SeqCst)
    };
    (fired, setter)
}

#[tokio::test]
async fn test_timer_fires_after_delay() {
    let mut timer = DismissTimer::new(Duration::from_millis(30));
    let (fired, on_fire) = flag();

    timer.update(true, on_fire);
    assert!(!fired.load(Ordering::SeqCst));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(fired.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_clearing_error_cancels_pending_timer() {
    // Scenario D: error appears, then goes away before the timer fires.
    let mut timer = DismissTimer::new(Duration::from_millis(50));
    let (fired, on_fire) = flag();

    timer.update(true, on_fire);
    tokio::time::sleep(Duration::from_millis(10)).await;

    let (never, on_never) = flag();
    timer.update(false, on_never);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!fired.load(Ordering::SeqCst));
    assert!(!never.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_new_error_replaces_pending_timer() {
    let mut timer = DismissTimer::new(Duration::from_millis(50));
    let (first, on_first) = flag();
    let (second, on_second) = flag();

    timer.update(true, on_first);
    tokio::time::sleep(Duration::from_millis(10)).await;
    // A second error arrives; only its timer may fire.
    timer.update(true, on_second);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!first.load(Ordering::SeqCst));
    assert!(second.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_drop_cancels_pending_timer() {
    let (fired, on_fire) = flag();
    {
        let mut timer = DismissTimer::new(Duration::from_millis(30));
        timer.update(true, on_fire);
    }

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(!fired.load(Ordering::SeqCst));
}
