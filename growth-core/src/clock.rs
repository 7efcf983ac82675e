/// "Run me again before the next paint" capability.
///
/// The host answers a request by calling
/// [`GrowthScheduler::tick`](crate::scheduler::GrowthScheduler::tick)
/// exactly once before it paints the next frame.
pub trait FrameClock {
    fn request_frame(&mut self);
}

/// A clock that latches a single outstanding request.
///
/// Repeated requests before [`FrameRequest::take`] collapse into one, so
/// each request is delivered at most once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    pending: bool,
    total: u64,
}

impl FrameRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consumes the outstanding request, returning whether there was one.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Total number of requests received, including collapsed ones.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl FrameClock for FrameRequest {
    fn request_frame(&mut self) {
        self.pending = true;
        self.total += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_delivered_once() {
        let mut clock = FrameRequest::new();
        assert!(!clock.take());

        clock.request_frame();
        assert!(clock.is_pending());
        assert!(clock.take());
        assert!(!clock.take());
        assert_eq!(clock.total(), 1);
    }

    #[test]
    fn repeated_requests_collapse() {
        let mut clock = FrameRequest::new();
        clock.request_frame();
        clock.request_frame();

        assert!(clock.take());
        assert!(!clock.is_pending());
        assert_eq!(clock.total(), 2);
    }
}
