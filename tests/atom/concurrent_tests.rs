/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atom::Atom;
use std::sync::atomic::{
    AtomicUsize as StdAtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 1000;

// Test concurrent optimistic increments
#[test]
fn test_concurrent_swap() {
    let counter = Arc::new(Atom::new(0usize));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS_PER_THREAD {
                counter.swap(|v| v + 1);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.value(), NUM_THREADS * ITERATIONS_PER_THREAD);
}

// Test concurrent pessimistic increments
#[test]
fn test_concurrent_reset_with() {
    let counter = Arc::new(Atom::new(0usize));
    let calls = Arc::new(StdAtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let calls = calls.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                counter.reset_with(|v| {
                    calls.fetch_add(1, Ordering::Relaxed);
                    v + 1
                });
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let total = NUM_THREADS * ITERATIONS_PER_THREAD;
    assert_eq!(counter.value(), total);
    assert_eq!(calls.load(Ordering::Relaxed), total);
}

// Test concurrent in-place mutation
#[test]
fn test_concurrent_modify() {
    let items = Arc::new(Atom::new(Vec::new()));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let items = items.clone();
        let handle = thread::spawn(move || {
            for j in 0..100 {
                items.modify(|v| v.push(i * 100 + j));
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let mut result = items.value();
    result.sort_unstable();
    assert_eq!(result, (0..NUM_THREADS * 100).collect::<Vec<_>>());
}

// Test that exactly one of many racing CAS calls wins
#[test]
fn test_concurrent_cas_single_winner() {
    let atom = Arc::new(Atom::new(0usize));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let success_count = Arc::new(StdAtomicUsize::new(0));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let atom = atom.clone();
        let barrier = barrier.clone();
        let success_count = success_count.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            if atom.compare_and_set(&0, i + 1) {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(success_count.load(Ordering::Relaxed), 1);
    assert_ne!(atom.value(), 0);
}

// Test that a validator holds under concurrent writers
#[test]
fn test_concurrent_validated_withdrawals() {
    let balance = Arc::new(Atom::with_validator(1000i64, |v: &i64| *v >= 0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let balance = balance.clone();
        let handle = thread::spawn(move || {
            for _ in 0..50 {
                balance.reset_with(|v| v - 7);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let remaining = balance.value();
    assert!(remaining >= 0);
    assert!(remaining < 7);
    assert_eq!(remaining, 1000 % 7);
}

// Test that readers never see a torn value
#[test]
fn test_readers_see_consistent_pairs() {
    let atom = Arc::new(Atom::new((0u64, 0u64)));
    let barrier = Arc::new(Barrier::new(NUM_THREADS + 1));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let atom = atom.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS_PER_THREAD {
                assert!(atom.compare(|(a, b)| a == b));
                let (a, b) = atom.value();
                assert_eq!(a, b);
            }
        });
        handles.push(handle);
    }

    let writer = {
        let atom = atom.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS_PER_THREAD {
                atom.modify(|pair| {
                    pair.0 += 1;
                    pair.1 += 1;
                });
            }
        })
    };

    for handle in handles {
        handle.join().unwrap();
    }
    writer.join().unwrap();

    assert_eq!(
        atom.value(),
        (ITERATIONS_PER_THREAD as u64, ITERATIONS_PER_THREAD as u64)
    );
}

// Test that set is visible to other threads after it returns
#[test]
fn test_set_visibility() {
    let atom = Arc::new(Atom::new(0));
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let atom = atom.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
            atom.set(42);
            barrier.wait();
        })
    };

    barrier.wait();
    assert_eq!(atom.value(), 42);
    writer.join().unwrap();
}
