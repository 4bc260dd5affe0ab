//! Property tests for recap-retry: total backoff and attempt counts.

use std::cell::Cell;
use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;

use recap_core::errors::ProviderError;
use recap_retry::{RecordingSleeper, RetryPolicy};

proptest! {
    #[test]
    fn always_failing_call_sleeps_geometric_sum(
        max_attempts in 1u32..8,
        base_ms in 0u64..2_000,
    ) {
        let sleeper = Arc::new(RecordingSleeper::new());
        let base = Duration::from_millis(base_ms);
        let policy = RetryPolicy::new(max_attempts, base).with_sleeper(sleeper.clone());
        let calls = Cell::new(0u32);

        let out: Result<(), ProviderError> = policy.execute("prop", |_| {
            calls.set(calls.get() + 1);
            Err(ProviderError::Timeout { reason: "slow".into() })
        });

        prop_assert!(out.is_err());
        prop_assert_eq!(calls.get(), max_attempts);
        let expected: Duration = (0..max_attempts - 1).map(|i| base * 2u32.pow(i)).sum();
        prop_assert_eq!(sleeper.total(), expected);
    }
}

proptest! {
    #[test]
    fn fatal_status_never_sleeps(
        max_attempts in 1u32..8,
        status in prop::sample::select(vec![400u16, 401, 403, 404, 413, 422]),
    ) {
        let sleeper = Arc::new(RecordingSleeper::new());
        let policy = RetryPolicy::new(max_attempts, Duration::from_millis(10))
            .with_sleeper(sleeper.clone());

        let out: Result<(), ProviderError> = policy.execute("prop", |_| {
            Err(ProviderError::Status { status, body: "rejected".into() })
        });

        prop_assert!(out.is_err());
        prop_assert!(sleeper.recorded().is_empty());
    }
}
