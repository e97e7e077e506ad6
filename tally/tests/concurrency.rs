use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Barrier,
    },
    thread,
    time::Duration,
};

use tally::{debugging::DebuggingSink, Counter, MeterKind};

const PRODUCERS: usize = 100;
const INCREMENTS_PER_PRODUCER: i64 = 1000;

#[test]
fn concurrent_increments_are_flushed_exactly_once() {
    let counter = Arc::new(Counter::new("requests"));
    let sink = Arc::new(DebuggingSink::new());
    let done = Arc::new(AtomicBool::new(false));

    let flusher = {
        let counter = Arc::clone(&counter);
        let sink = Arc::clone(&sink);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut flushes = 0usize;
            while !done.load(Ordering::Acquire) {
                counter.flush_reading(&sink);
                flushes += 1;
                thread::sleep(Duration::from_millis(2));
            }
            flushes
        })
    };

    let barrier = Arc::new(Barrier::new(PRODUCERS));
    let producers: Vec<_> = (0..PRODUCERS)
        .map(|_| {
            let counter = Arc::clone(&counter);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..INCREMENTS_PER_PRODUCER {
                    counter.inc(1);
                }
            })
        })
        .collect();

    for producer in producers {
        producer.join().expect("producer panicked");
    }
    done.store(true, Ordering::Release);
    let flushes = flusher.join().expect("flusher panicked");
    assert!(flushes > 0);

    let readings = sink.readings();
    assert!(readings.iter().all(|r| r.kind == MeterKind::Counter && r.name == "requests"));
    assert!(readings.iter().all(|r| r.value.as_i64() > 0));

    let flushed = sink.total_for(MeterKind::Counter, "requests");
    let remaining = counter.value();
    assert_eq!(flushed + remaining, PRODUCERS as i64 * INCREMENTS_PER_PRODUCER);
}

#[test]
fn mixed_updates_split_across_flush_windows() {
    let counter = Arc::new(Counter::new("balance"));
    let sink = Arc::new(DebuggingSink::new());

    thread::scope(|s| {
        for i in 0..8i64 {
            let counter = &counter;
            s.spawn(move || {
                for _ in 0..5000 {
                    if i % 2 == 0 {
                        counter.inc(3);
                    } else {
                        counter.dec(1);
                    }
                }
            });
        }

        let counter = &counter;
        let sink = &sink;
        s.spawn(move || {
            for _ in 0..200 {
                counter.flush_reading(sink);
                thread::yield_now();
            }
        });
    });

    let expected = 4 * 5000 * 3 - 4 * 5000;
    assert_eq!(sink.total_for(MeterKind::Counter, "balance") + counter.value(), expected);

    counter.flush_reading(&sink);
    assert_eq!(counter.value(), 0);
    assert_eq!(sink.total_for(MeterKind::Counter, "balance"), expected);
}
