//! Tests for the process-wide index handle.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use super::common::CREE_WORDFORMS;
use skipdict::{AffixIndex, SharedIndex};

static LEMMAS: SharedIndex = SharedIndex::new();

#[test]
fn test_static_handle_initializes_once() {
    let builds = AtomicUsize::new(0);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let index = LEMMAS
                    .get_or_try_init(|| {
                        builds.fetch_add(1, Ordering::SeqCst);
                        AffixIndex::build(CREE_WORDFORMS)
                    })
                    .unwrap();
                assert_eq!(index.len(), CREE_WORDFORMS.len());
            });
        }
    });

    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert!(LEMMAS.is_initialized());
}

#[test]
fn test_readers_see_whole_snapshots_during_swaps() {
    let shared = SharedIndex::new();
    shared.replace(AffixIndex::build([("a0", 0), ("b0", 0)]).unwrap());

    thread::scope(|scope| {
        scope.spawn(|| {
            for generation in 1..50u64 {
                let key_a = format!("a{}", generation);
                let key_b = format!("b{}", generation);
                shared.replace(
                    AffixIndex::build([(key_a.as_str(), generation), (key_b.as_str(), generation)])
                        .unwrap(),
                );
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let snapshot: Arc<AffixIndex> = shared.get().unwrap();
                    // Both keys of a snapshot always carry the same generation.
                    let a = snapshot.search_by_prefix("a");
                    let b = snapshot.search_by_prefix("b");
                    assert_eq!(a, b);
                    assert_eq!(a.len(), 1);
                }
            });
        }
    });
}
