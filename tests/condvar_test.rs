/*!
 * Condition Variable Tests
 */

use holdfast::sync::{CondVar, Mutex};
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_basic_wait_and_signal() {
    let _ = env_logger::builder().is_test(true).try_init();

    let shared = Arc::new((Mutex::make(false).unwrap(), CondVar::make().unwrap()));

    let waiter = {
        let shared = shared.clone();
        thread::spawn(move || {
            let (mutex, cond) = &*shared;
            let mut ready = mutex.lock().unwrap();
            while !*ready {
                cond.wait(&mut ready).unwrap();
            }
        })
    };

    {
        let (mutex, cond) = &*shared;
        let mut ready = mutex.lock().unwrap();
        *ready = true;
        cond.signal(&ready).unwrap();
    }

    waiter.join().unwrap();
}

#[test]
fn test_producer_consumer_in_order() {
    const NUM_ITEMS: i32 = 100;

    let shared = Arc::new((
        Mutex::make(VecDeque::<i32>::new()).unwrap(),
        CondVar::make().unwrap(),
    ));

    let consumer = {
        let shared = shared.clone();
        thread::spawn(move || {
            let (mutex, cond) = &*shared;
            let mut consumed = Vec::new();
            while (consumed.len() as i32) < NUM_ITEMS {
                let mut queue = mutex.lock().unwrap();
                while queue.is_empty() {
                    cond.wait(&mut queue).unwrap();
                }
                consumed.push(queue.pop_front().unwrap());
            }
            consumed
        })
    };

    let producer = {
        let shared = shared.clone();
        thread::spawn(move || {
            let (mutex, cond) = &*shared;
            for i in 0..NUM_ITEMS {
                let mut queue = mutex.lock().unwrap();
                queue.push_back(i);
                cond.signal(&queue).unwrap();
            }
        })
    };

    producer.join().unwrap();
    let consumed = consumer.join().unwrap();

    // No loss, no duplication, original order
    assert_eq!(consumed, (0..NUM_ITEMS).collect::<Vec<_>>());
}

#[test]
fn test_broadcast_wakes_all_waiters() {
    const NUM_THREADS: usize = 5;

    let shared = Arc::new((Mutex::make(false).unwrap(), CondVar::make().unwrap()));
    let woken = Arc::new(AtomicUsize::new(0));

    let workers: Vec<_> = (0..NUM_THREADS)
        .map(|_| {
            let shared = shared.clone();
            let woken = woken.clone();
            thread::spawn(move || {
                let (mutex, cond) = &*shared;
                let mut ready = mutex.lock().unwrap();
                while !*ready {
                    cond.wait(&mut ready).unwrap();
                }
                woken.fetch_add(1, Ordering::SeqCst);
            })
        })
        .collect();

    // Let the workers reach their wait
    thread::sleep(Duration::from_millis(100));

    {
        let (mutex, cond) = &*shared;
        let mut ready = mutex.lock().unwrap();
        *ready = true;
        cond.broadcast(&ready).unwrap();
    }

    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(woken.load(Ordering::SeqCst), NUM_THREADS);
}

#[test]
fn test_signal_without_waiters_is_ok() {
    let mutex = Mutex::make(0).unwrap();
    let cond = CondVar::make().unwrap();

    let guard = mutex.lock().unwrap();
    assert!(cond.signal(&guard).is_ok());
    assert!(cond.broadcast(&guard).is_ok());
}

#[test]
fn test_condvar_usable_after_move() {
    let cond = CondVar::make().unwrap();
    let moved = cond; // handle address is stable across the move

    let shared = Arc::new((Mutex::make(false).unwrap(), moved));

    let waiter = {
        let shared = shared.clone();
        thread::spawn(move || {
            let (mutex, cond) = &*shared;
            let mut ready = mutex.lock().unwrap();
            while !*ready {
                cond.wait(&mut ready).unwrap();
            }
        })
    };

    {
        let (mutex, cond) = &*shared;
        let mut ready = mutex.lock().unwrap();
        *ready = true;
        cond.signal(&ready).unwrap();
    }

    waiter.join().unwrap();
}
