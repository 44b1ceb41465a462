//! Per-connection message throttle for the WebSocket receive loop.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

/// Sliding-window limit on inbound messages
#[derive(Debug)]
pub struct MessageThrottle {
    /// Arrival times inside the current window, oldest first
    arrivals: VecDeque<Instant>,
    limit: usize,
    window: Duration,
}

impl MessageThrottle {
    /// # Example
    ///
    /// ```
    /// use ttt_server::api::throttle::MessageThrottle;
    /// use std::time::Duration;
    ///
    /// let mut throttle = MessageThrottle::new(2, Duration::from_secs(1));
    /// assert!(throttle.allow());
    /// assert!(throttle.allow());
    /// assert!(!throttle.allow());
    /// ```
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            arrivals: VecDeque::with_capacity(limit),
            limit,
            window,
        }
    }

    /// `limit` messages per second
    pub fn per_second(limit: usize) -> Self {
        Self::new(limit, Duration::from_secs(1))
    }

    /// Record a message arriving now; `false` means drop it
    pub fn allow(&mut self) -> bool {
        self.allow_at(Instant::now())
    }

    /// Record a message arriving at `now`; `false` means drop it
    pub fn allow_at(&mut self, now: Instant) -> bool {
        while self
            .arrivals
            .front()
            .is_some_and(|oldest| now.saturating_duration_since(*oldest) >= self.window)
        {
            self.arrivals.pop_front();
        }

        if self.arrivals.len() >= self.limit {
            return false;
        }
        self.arrivals.push_back(now);
        true
    }

    /// Messages counted in the current window
    pub fn in_window(&self) -> usize {
        self.arrivals.len()
    }
}
