use super::*;
use std::sync::Arc;

fn counting() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    (calls, move || {
        c.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn fires_once_after_total_signals() {
    let (calls, cb) = counting();
    let t = CompletionTracker::new(3, cb);
    assert!(!t.on_item_finished());
    assert!(!t.on_item_finished());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(t.on_item_finished());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(t.is_complete());
    assert_eq!(t.finished(), 3);
}

#[test]
fn zero_total_fires_immediately() {
    let (calls, cb) = counting();
    let t = CompletionTracker::new(0, cb);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(t.is_complete());
    assert!(!t.on_item_finished());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn extra_signals_are_noops() {
    let (calls, cb) = counting();
    let t = CompletionTracker::new(2, cb);
    t.on_item_finished();
    t.on_item_finished();
    for _ in 0..5 {
        assert!(!t.on_item_finished());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(t.finished(), 2);
}

#[test]
fn concurrent_signals_fire_exactly_once() {
    let (calls, cb) = counting();
    let t = Arc::new(CompletionTracker::new(64, cb));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let t = Arc::clone(&t);
            std::thread::spawn(move || {
                for _ in 0..10 {
                    t.on_item_finished();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(t.finished(), 64);
}
