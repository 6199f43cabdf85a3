//! Provider call and token usage tracking for one session.

use crate::TokenUsage;

/// Cumulative provider usage for a session.
///
/// Lives beside the transcript, not inside it: clearing the chat does not
/// reset these counters.
#[derive(Debug, Clone, Default)]
pub struct UsageTracker {
    total: TokenUsage,
    call_count: u64,
    failed_calls: u64,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful call and the tokens it reported.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    /// Record a call that ended in a provider error.
    pub fn record_failure(&mut self) {
        self.call_count += 1;
        self.failed_calls += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn failed_calls(&self) -> u64 {
        self.failed_calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accumulates() {
        let mut tracker = UsageTracker::new();
        tracker.record(&TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
        });
        tracker.record(&TokenUsage {
            input_tokens: 1,
            output_tokens: 2,
        });
        assert_eq!(tracker.total().input_tokens, 11);
        assert_eq!(tracker.total().output_tokens, 7);
        assert_eq!(tracker.total_tokens(), 18);
        assert_eq!(tracker.call_count(), 2);
        assert_eq!(tracker.failed_calls(), 0);
    }

    #[test]
    fn failures_count_as_calls() {
        let mut tracker = UsageTracker::new();
        tracker.record_failure();
        assert_eq!(tracker.call_count(), 1);
        assert_eq!(tracker.failed_calls(), 1);
        assert_eq!(tracker.total_tokens(), 0);
    }
}
