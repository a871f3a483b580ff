//! Depth limiting for recursive name computation.
//!
//! Resolved descriptors are finite trees, so a naming pass cannot loop; it
//! can only nest. [`DepthCounter`] bounds that nesting so an absurdly deep
//! descriptor fails with an error instead of overflowing the stack.
//!
//! # Usage
//!
//! ```ignore
//! let mut counter = DepthCounter::new(MAX_TYPE_NAME_DEPTH);
//!
//! if !counter.enter() {
//!     return Err(NamingError::DepthExceeded { limit: counter.max_depth() });
//! }
//! let result = name_children();
//! counter.leave();
//! result
//! ```

/// A depth-only guard (no cycle detection).
///
/// # Debug-mode safety
///
/// In debug builds (`#[cfg(debug_assertions)]`):
/// - Dropping a counter with depth > 0 panics, catching forgotten `leave()` calls.
/// - Calling `leave()` at depth 0 panics.
#[derive(Debug)]
pub struct DepthCounter {
    depth: u32,
    max_depth: u32,
}

impl DepthCounter {
    pub fn new(max_depth: u32) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    /// Try to enter a deeper level.
    ///
    /// Returns `false` once the limit is reached; the depth is then **not**
    /// incremented and `leave()` must not be called.
    #[inline]
    pub fn enter(&mut self) -> bool {
        if self.depth >= self.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    /// Leave the current level. Must follow every successful `enter()`.
    #[inline]
    pub fn leave(&mut self) {
        debug_assert!(
            self.depth > 0,
            "DepthCounter::leave() called at depth 0 without a matching enter()"
        );
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

#[cfg(debug_assertions)]
impl Drop for DepthCounter {
    fn drop(&mut self) {
        if !std::thread::panicking() && self.depth > 0 {
            panic!(
                "DepthCounter dropped at depth {}: enter() without matching leave()",
                self.depth
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave_track_depth() {
        let mut counter = DepthCounter::new(2);
        assert!(counter.enter());
        assert!(counter.enter());
        assert_eq!(counter.depth(), 2);
        assert!(!counter.enter());
        assert_eq!(counter.depth(), 2);
        counter.leave();
        counter.leave();
        assert_eq!(counter.depth(), 0);
        assert!(counter.enter());
        counter.leave();
    }

    #[test]
    fn zero_limit_rejects_immediately() {
        let mut counter = DepthCounter::new(0);
        assert!(!counter.enter());
        assert_eq!(counter.max_depth(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "enter() without matching leave()")]
    fn leaked_enter_panics_on_drop() {
        let mut counter = DepthCounter::new(4);
        assert!(counter.enter());
    }
}
