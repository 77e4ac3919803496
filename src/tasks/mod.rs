//! Fork-join task demonstration
//!
//! Spawns a fixed set of independent tasks, relays each task's report to the
//! caller as it arrives and returns only after every task has been joined.
//! Tasks share no mutable state; reports arrive in any order.

use rand::Rng;
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

/// What a task says when it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskReport {
    pub id: usize,
}

/// Summary of a completed fan-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelSummary {
    pub spawned: usize,
    pub reported: usize,
}

/// Run `task_count` tasks concurrently.
///
/// `on_report` is called on the calling thread once per report. If it fails,
/// the remaining reports are drained and dropped, every task is still joined,
/// and the first failure is returned.
pub fn run_parallel<F>(
    task_count: usize,
    max_delay: Duration,
    mut on_report: F,
) -> io::Result<ParallelSummary>
where
    F: FnMut(TaskReport) -> io::Result<()>,
{
    let (tx, rx) = mpsc::channel();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..task_count)
            .map(|id| {
                let tx = tx.clone();
                scope.spawn(move || {
                    let delay = random_delay(max_delay);
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    // The receiver lives until every task has been joined
                    let _ = tx.send(TaskReport { id });
                })
            })
            .collect();
        drop(tx);

        let mut reported = 0;
        let mut outcome = Ok(());
        for report in rx.iter() {
            debug!(task = report.id, "task reported");
            if outcome.is_ok() {
                outcome = on_report(report);
            }
            reported += 1;
        }

        for (id, handle) in handles.into_iter().enumerate() {
            if handle.join().is_err() {
                warn!(task = id, "task panicked");
            }
        }

        outcome.map(|()| ParallelSummary {
            spawned: task_count,
            reported,
        })
    })
}

fn random_delay(max_delay: Duration) -> Duration {
    let max_ms = u64::try_from(max_delay.as_millis()).unwrap_or(u64::MAX);
    if max_ms == 0 {
        return Duration::ZERO;
    }
    Duration::from_millis(rand::thread_rng().gen_range(0..=max_ms))
}
