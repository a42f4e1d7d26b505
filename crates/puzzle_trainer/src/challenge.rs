//! Timed challenges: solve as many puzzles as possible before the clock runs out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Challenge lengths offered to players, in seconds.
pub const CHALLENGE_OPTIONS: [u64; 3] = [60, 180, 300];

/// Clock and score of one timed challenge.
///
/// The stop flag is shared through [`StopHandle`], so a watcher thread can end
/// the challenge while the main loop is blocked on input.
#[derive(Debug)]
pub struct TimedChallenge {
    duration: Duration,
    started: Option<Instant>,
    stopped: Arc<AtomicBool>,
    solved: u32,
    attempted: u32,
}

/// Cloneable handle that ends a challenge from another thread.
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl TimedChallenge {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
            stopped: Arc::new(AtomicBool::new(false)),
            solved: 0,
            attempted: 0,
        }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start the clock and reset the score.
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
        self.solved = 0;
        self.attempted = 0;
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stopped))
    }

    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.started
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Time left; the full duration before the clock starts.
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed())
    }

    /// Whether the challenge has ended, by time or by a stop request.
    pub fn is_over(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }
        if self.is_started() && self.elapsed() >= self.duration {
            self.stopped.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Count a solved puzzle. Returns false, without scoring, once the
    /// challenge is over or before it has started.
    pub fn record_solved(&mut self) -> bool {
        if !self.is_started() || self.is_over() {
            return false;
        }
        self.solved += 1;
        self.attempted += 1;
        true
    }

    /// Count a failed or skipped puzzle.
    pub fn record_missed(&mut self) -> bool {
        if !self.is_started() || self.is_over() {
            return false;
        }
        self.attempted += 1;
        true
    }

    pub fn score(&self) -> u32 {
        self.solved
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }
}

/// Format seconds as `m:ss`.
pub fn format_clock(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
#[path = "challenge_tests.rs"]
mod challenge_tests;
