//! Step budgets and cooperative cancellation for search.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// How often (in search steps) the cancellation flag is polled.
pub const CANCEL_CHECK_INTERVAL: u64 = 1024;

/// A shared flag for cooperatively cancelling a running search.
///
/// Clones share the same flag. An interactive host keeps one clone and hands
/// the other to the search via [`SearchBudget::with_cancel_token`]; the
/// search polls the flag every [`CANCEL_CHECK_INTERVAL`] steps, so a long
/// search never starves the caller.
///
/// # Examples
///
/// ```
/// use logicgrid_solver::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of any search holding a clone of this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Resource limits for a single search invocation.
///
/// Ordinary 9×9 boards resolve in a small number of steps under the
/// minimum-remaining-candidates heuristic; the budget exists so adversarial
/// or malformed inputs cannot block the caller indefinitely.
///
/// The default step cap is [`SearchBudget::DEFAULT_MAX_STEPS`], far above
/// what any generator-produced board needs.
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    max_steps: Option<u64>,
    cancel: Option<CancelToken>,
}

impl SearchBudget {
    /// Default step cap applied by [`SearchBudget::default`].
    pub const DEFAULT_MAX_STEPS: u64 = 10_000_000;

    /// Creates a budget with the default step cap and no cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the step cap.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Returns the effective step cap.
    #[must_use]
    pub fn max_steps(&self) -> u64 {
        self.max_steps.unwrap_or(Self::DEFAULT_MAX_STEPS)
    }

    /// Reports that a search has taken `steps` steps so far and aborts it if
    /// the budget is exhausted.
    ///
    /// Search loops call this once per node expanded, with their own running
    /// step count; the cancellation flag is only polled every
    /// [`CANCEL_CHECK_INTERVAL`] steps to keep the common path cheap.
    ///
    /// # Errors
    ///
    /// Returns [`SearchInterrupted::BudgetExceeded`] once `steps` passes the
    /// step cap, or [`SearchInterrupted::Cancelled`] when a poll observes a
    /// triggered [`CancelToken`].
    pub fn check(&self, steps: u64) -> Result<(), SearchInterrupted> {
        if steps > self.max_steps() {
            return Err(SearchInterrupted::BudgetExceeded { steps });
        }
        if steps % CANCEL_CHECK_INTERVAL == 0
            && let Some(token) = &self.cancel
            && token.is_cancelled()
        {
            return Err(SearchInterrupted::Cancelled);
        }
        Ok(())
    }
}

/// A bounded search aborted without reaching a definitive answer.
///
/// This is a soft failure: the caller may retry with a larger budget or
/// surface it to the user. It is deliberately a separate type from the
/// "no solution" outcome so the two can never be confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchInterrupted {
    /// The step cap was reached before the search finished.
    #[display("search budget exceeded after {steps} steps")]
    BudgetExceeded {
        /// Steps taken when the search gave up.
        steps: u64,
    },
    /// The cancellation token was triggered.
    #[display("search cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_budget_check_steps() {
        let budget = SearchBudget::new().with_max_steps(10);
        assert_eq!(budget.check(10), Ok(()));
        assert_eq!(
            budget.check(11),
            Err(SearchInterrupted::BudgetExceeded { steps: 11 })
        );
    }

    #[test]
    fn test_budget_polls_cancellation_at_interval() {
        let token = CancelToken::new();
        let budget = SearchBudget::new().with_cancel_token(token.clone());
        token.cancel();

        // Between poll points the flag is not observed.
        assert_eq!(budget.check(CANCEL_CHECK_INTERVAL + 1), Ok(()));
        assert_eq!(
            budget.check(CANCEL_CHECK_INTERVAL),
            Err(SearchInterrupted::Cancelled)
        );
    }

    #[test]
    fn test_default_budget_is_generous() {
        let budget = SearchBudget::default();
        assert_eq!(budget.max_steps(), SearchBudget::DEFAULT_MAX_STEPS);
        assert_eq!(budget.check(1), Ok(()));
    }
}
