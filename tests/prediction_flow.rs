use salescope::application::session::SessionState;
use salescope::application::ml::PredictionOrchestrator;
use salescope::domain::errors::PredictionError;
use salescope::domain::ml::feature_registry::encode;
use salescope::domain::prediction::{PredictionInput, ProfitCategory};
use salescope::infrastructure::mock::{StubFailure, StubModelStore};
use std::sync::Arc;

fn default_input() -> PredictionInput {
    PredictionInput {
        quantity: 5,
        discount: 0.1,
        month: 6,
        quarter: 2,
    }
}

#[test]
fn test_scenario_high_profit_prediction() {
    let store = Arc::new(StubModelStore::new(1234.56, 1));
    let orchestrator = PredictionOrchestrator::with_store(store.clone());

    let input = default_input();
    assert_eq!(encode(&input).as_slice(), &[5.0, 0.1, 2024.0, 6.0, 2.0]);

    let result = orchestrator.predict(&input).expect("prediction should succeed");
    assert_eq!(result.sales_estimate, 1234.56);
    assert_eq!(result.profit_category, ProfitCategory::High);

    // The scaler saw the encoded vector, year included
    assert_eq!(store.last_features(), Some(vec![5.0, 0.1, 2024.0, 6.0, 2.0]));
}

#[test]
fn test_scenario_low_profit_prediction() {
    let orchestrator = PredictionOrchestrator::with_store(Arc::new(StubModelStore::new(88.0, 0)));
    let result = orchestrator.predict(&default_input()).unwrap();
    assert_eq!(result.profit_category, ProfitCategory::Low);
}

#[test]
fn test_scenario_out_of_range_rejected_before_models() {
    let store = Arc::new(StubModelStore::new(1234.56, 1));
    let orchestrator = PredictionOrchestrator::with_store(store.clone());

    let input = PredictionInput {
        quantity: 101,
        ..default_input()
    };

    match orchestrator.predict(&input) {
        Err(PredictionError::InvalidInput { field, .. }) => assert_eq!(field, "quantity"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
    assert_eq!(store.calls(), 0, "no model stage may run for invalid input");
}

#[test]
fn test_prediction_is_deterministic() {
    let orchestrator = PredictionOrchestrator::with_store(Arc::new(StubModelStore::new(512.0, 1)));
    let input = PredictionInput {
        quantity: 42,
        discount: 0.35,
        month: 11,
        quarter: 4,
    };

    let first = orchestrator.predict(&input).unwrap();
    let second = orchestrator.predict(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_model_failures_become_prediction_failed() {
    let failures = [
        StubFailure::ScalerError("scaler exploded".to_string()),
        StubFailure::RegressionError("regressor exploded".to_string()),
        StubFailure::ClassificationPanic("classifier exploded".to_string()),
    ];

    for failure in failures {
        let orchestrator =
            PredictionOrchestrator::with_store(Arc::new(StubModelStore::failing(failure.clone())));

        match orchestrator.predict(&default_input()) {
            Err(PredictionError::PredictionFailed { reason }) => {
                assert!(reason.contains("exploded"), "reason should carry the cause: {}", reason)
            }
            other => panic!("expected PredictionFailed for {:?}, got {:?}", failure, other),
        }
    }
}

#[test]
fn test_run_replaces_prediction_and_keeps_it_on_failure() {
    let mut session = SessionState::new();
    let high = PredictionOrchestrator::with_store(Arc::new(StubModelStore::new(1000.0, 1)));
    let low = PredictionOrchestrator::with_store(Arc::new(StubModelStore::new(10.0, 0)));

    high.run(&mut session, default_input()).unwrap();
    let replacement = PredictionInput {
        quantity: 9,
        ..default_input()
    };
    low.run(&mut session, replacement).unwrap();

    let stored = session.prediction().unwrap();
    assert_eq!(stored.result.profit_category, ProfitCategory::Low);
    assert_eq!(stored.input.quantity, 9);

    // A rejected run leaves the last successful record in place
    let bad = PredictionInput {
        month: 0,
        ..default_input()
    };
    assert!(low.run(&mut session, bad).is_err());
    assert_eq!(session.prediction().unwrap().input.quantity, 9);
}
