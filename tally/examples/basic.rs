use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use tally::{debugging::DebuggingSink, flush_all, Counter, FanoutBuilder, Meter, MeterKind};
use tally_exporter_log::LogSinkBuilder;
use tracing::{info, Level};

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let requests = Arc::new(Counter::new("requests"));
    let in_flight = Arc::new(Counter::new("in_flight"));
    let meters: Vec<Arc<dyn Meter>> = vec![requests.clone(), in_flight.clone()];

    let totals = Arc::new(DebuggingSink::new());
    let sink = FanoutBuilder::default()
        .add_sink(LogSinkBuilder::default().prefix("basic").build())
        .add_sink(totals.clone())
        .build();

    let done = Arc::new(AtomicBool::new(false));
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let requests = requests.clone();
            let in_flight = in_flight.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    in_flight.inc(1);
                    requests.inc(1);
                    thread::sleep(Duration::from_micros(200));
                    in_flight.dec(1);
                }
            })
        })
        .collect();

    let flusher = {
        let done = done.clone();
        thread::spawn(move || {
            while !done.load(Ordering::Acquire) {
                flush_all(&meters, &sink);
                thread::sleep(Duration::from_millis(20));
            }
            flush_all(&meters, &sink);
        })
    };

    for worker in workers {
        let _ = worker.join();
    }
    done.store(true, Ordering::Release);
    let _ = flusher.join();

    info!(
        requests = totals.total_for(MeterKind::Counter, "requests"),
        in_flight = totals.total_for(MeterKind::Counter, "in_flight"),
        "server-side totals"
    );
}
