//! Delayed request queue: cross-frame scheduling for view transitions.
//!
//! Views cannot act on the app directly from inside a callback; they enqueue
//! [`Request`]s instead. Each request carries a timeout that delays the
//! requests behind it (a 750 ms quit transition holds the actual quit until
//! the animation has run), and a blocking request additionally drops any
//! request that arrives while it is in flight.

use std::collections::VecDeque;

use tracing::{debug, error};

use crate::error::{FrontError, FrontResult};
use crate::view::ViewId;

/// One deferred instruction for the frame driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Switch the active view.
    ChangeView(ViewId),
    /// Play a sound effect by media reference.
    PlaySound(String),
    /// Run the fade-in transition.
    TransitionIn {
        /// Transition length in milliseconds.
        duration_ms: u32,
    },
    /// Run the fade-out transition.
    TransitionOut {
        /// Transition length in milliseconds.
        duration_ms: u32,
    },
    /// Shut the application down.
    Quit,
}

#[derive(Debug, Clone)]
struct Pending {
    request: Request,
    timeout_ms: u32,
    blocking: bool,
}

/// FIFO of [`Request`]s with per-request delays.
///
/// [`Self::process`] activates at most one request per call: the active
/// request's timeout must fully elapse before the next one starts.
#[derive(Debug)]
pub struct RequestQueue {
    max_size: usize,
    blocked: bool,
    queue: VecDeque<Pending>,
    in_process: Option<Pending>,
    countdown_ms: f32,
}

impl Default for RequestQueue {
    fn default() -> Self {
        Self::new(100)
    }
}

impl RequestQueue {
    /// Creates a queue that drops requests beyond `max_size`.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            blocked: false,
            queue: VecDeque::new(),
            in_process: None,
            countdown_ms: 0.0,
        }
    }

    /// Whether a blocking request is currently in flight.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Number of requests waiting (not counting the one in flight).
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is waiting or in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty() && self.in_process.is_none()
    }

    /// Enqueues a request with no delay.
    pub fn add(&mut self, request: Request) {
        self.push(Pending { request, timeout_ms: 0, blocking: false });
    }

    /// Enqueues a request whose timeout delays the requests behind it.
    pub fn add_delayed(&mut self, request: Request, timeout_ms: u32) {
        self.push(Pending { request, timeout_ms, blocking: false });
    }

    /// Enqueues a blocking request: while it is in flight, every incoming
    /// request is dropped.
    ///
    /// # Errors
    ///
    /// [`FrontError::InvalidTimeout`] when `timeout_ms` is zero; a blocking
    /// request with no duration would block nothing.
    pub fn add_blocking(&mut self, request: Request, timeout_ms: u32) -> FrontResult<()> {
        if timeout_ms == 0 {
            return Err(FrontError::InvalidTimeout {
                millis: timeout_ms,
                reason: "blocking requests need a positive timeout",
            });
        }
        self.push(Pending { request, timeout_ms, blocking: true });
        Ok(())
    }

    /// Advances the queue by `dt_ms` and activates the next request when the
    /// current one's timeout has elapsed.
    ///
    /// The returned request must be applied by the caller this frame; its
    /// timeout starts counting immediately.
    pub fn process(&mut self, dt_ms: f32) -> Option<Request> {
        if self.countdown_ms > 0.0 {
            self.countdown_ms -= dt_ms;
            return None;
        }

        if let Some(finished) = self.in_process.take() {
            if finished.blocking {
                self.blocked = false;
            }
        }

        let next = self.queue.pop_front()?;
        if next.blocking {
            self.blocked = true;
        }
        self.countdown_ms = next.timeout_ms as f32;
        let request = next.request.clone();
        self.in_process = Some(next);
        Some(request)
    }

    fn push(&mut self, pending: Pending) {
        if self.queue.len() >= self.max_size {
            error!("request queue is full, an incoming request has been ignored");
            return;
        }
        if self.blocked {
            debug!(request = ?pending.request, "an incoming request has been blocked");
            return;
        }
        self.queue.push_back(pending);
    }
}
