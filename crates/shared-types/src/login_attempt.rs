/// Guard for the one login that may be in flight at a time.
///
/// The login form holds one of these for the duration of the deferred
/// check. While an attempt is pending the submit control is disabled and
/// further submits are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginAttempt {
    pending: bool,
}

impl LoginAttempt {
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start an attempt. Returns false, changing nothing, if one is already pending.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Settle the current attempt, whatever its verdict.
    pub fn finish(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_idle() {
        assert!(!LoginAttempt::default().is_pending());
    }

    #[test]
    fn second_begin_while_pending_is_rejected() {
        let mut attempt = LoginAttempt::default();
        assert!(attempt.begin());
        assert!(!attempt.begin());
        assert!(attempt.is_pending());
    }

    #[test]
    fn finish_allows_a_retry() {
        let mut attempt = LoginAttempt::default();
        assert!(attempt.begin());
        attempt.finish();
        assert_eq!(attempt, LoginAttempt::default());
        assert!(attempt.begin());
    }
}
