//! Progress reporting for chain enumeration.

use log::{debug, info};

/// Receives progress updates while links are enumerated.
pub trait ProgressObserver {
    /// Called once before the first link with the exact number of links.
    fn start(&mut self, total: usize);

    /// Called once per enumerated link.
    fn advance(&mut self);

    /// Called once after the last link.
    fn finish(&mut self) {}
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn start(&mut self, _total: usize) {}

    fn advance(&mut self) {}
}

/// Logs progress at every tenth of the total.
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: String,
    total: usize,
    current: usize,
    next_step: usize,
}

impl LogProgress {
    /// Create a reporter that prefixes each message with `label`.
    pub fn new<S: Into<String>>(label: S) -> Self {
        LogProgress {
            label: label.into(),
            total: 0,
            current: 0,
            next_step: 1,
        }
    }

    /// Number of updates received so far.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Total announced by [`ProgressObserver::start`].
    pub fn total(&self) -> usize {
        self.total
    }
}

impl ProgressObserver for LogProgress {
    fn start(&mut self, total: usize) {
        self.total = total;
        self.current = 0;
        self.next_step = 1;
        info!("{}: 0/{}", self.label, total);
    }

    fn advance(&mut self) {
        self.current += 1;
        if self.total == 0 {
            return;
        }
        // Log when crossing the next 10% boundary.
        if self.current * 10 >= self.next_step * self.total {
            info!(
                "{}: {}/{} ({}%)",
                self.label,
                self.current,
                self.total,
                self.current * 100 / self.total
            );
            while self.next_step <= 10 && self.current * 10 >= self.next_step * self.total {
                self.next_step += 1;
            }
        }
    }

    fn finish(&mut self) {
        debug!("{}: finished after {} steps", self.label, self.current);
    }
}

/// Counts updates without logging.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CountingProgress {
    pub total: Option<usize>,
    pub advanced: usize,
    pub finished: bool,
}

impl ProgressObserver for CountingProgress {
    fn start(&mut self, total: usize) {
        self.total = Some(total);
    }

    fn advance(&mut self) {
        self.advanced += 1;
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_progress_counts() {
        let mut progress = LogProgress::new("Generating graph");
        progress.start(25);
        for _ in 0..25 {
            progress.advance();
        }
        progress.finish();

        assert_eq!(progress.total(), 25);
        assert_eq!(progress.current(), 25);
        assert_eq!(progress.next_step, 11);
    }

    #[test]
    fn test_log_progress_zero_total() {
        let mut progress = LogProgress::new("Generating graph");
        progress.start(0);
        progress.finish();
        assert_eq!(progress.current(), 0);
    }

    #[test]
    fn test_counting_progress() {
        let mut progress = CountingProgress::default();
        progress.start(3);
        progress.advance();
        progress.advance();
        progress.finish();

        assert_eq!(progress.total, Some(3));
        assert_eq!(progress.advanced, 2);
        assert!(progress.finished);
    }
}
