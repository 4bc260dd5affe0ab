//! Property tests for recap-pipeline: a job interrupted at any call and
//! then resumed produces the same result as an uninterrupted run, and never
//! repeats a call whose success was checkpointed.

#[path = "../support/mod.rs"]
mod support;

use std::sync::Arc;

use proptest::prelude::*;

use recap_core::errors::ProviderError;

use support::{engine, keyed_source, FakeProvider};

const BUDGET: usize = 24;

fn fatal() -> ProviderError {
    ProviderError::Status {
        status: 400,
        body: "rejected".to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn interrupted_job_resumes_to_the_same_answer(
        segments in 1usize..10,
        fail_at in 0usize..24,
    ) {
        let baseline_dir = tempfile::tempdir().unwrap();
        let (baseline, _) = engine(baseline_dir.path(), BUDGET, Arc::new(FakeProvider::new()), 1);
        let expected = baseline.run(&keyed_source(segments, "job")).unwrap();

        let tmp = tempfile::tempdir().unwrap();
        let source = keyed_source(segments, "job");
        let failing = Arc::new(FakeProvider::failing_at(&[fail_at], fatal()));
        let (first, _) = engine(tmp.path(), BUDGET, failing.clone(), 1);
        let first_run = first.run(&source);

        if fail_at >= expected.calls {
            // The failure point was never reached.
            prop_assert_eq!(first_run.unwrap().text, expected.text.clone());
            return Ok(());
        }
        prop_assert!(first_run.is_err());

        let healthy = Arc::new(FakeProvider::new());
        let (second, _) = engine(tmp.path(), BUDGET, healthy.clone(), 1);
        let resumed = second.run(&source).unwrap();

        prop_assert_eq!(&resumed.text, &expected.text);
        // Every summary finished before the failure is reused, not re-requested.
        let first_requests = failing.requests();
        let summarized_before: Vec<&String> = first_requests[..fail_at]
            .iter()
            .filter(|r| !r.starts_with(support::MERGE_PREFIX))
            .collect();
        for request in summarized_before {
            prop_assert!(!healthy.requests().contains(request));
        }
    }
}
