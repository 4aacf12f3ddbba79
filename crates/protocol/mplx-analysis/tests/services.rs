//! Integration tests for the analysis services using MockAccountSource.
//!
//! These exercise the services end to end against in-memory chain state:
//! constraint checks on recipes and escrows, lock status lookups, the fee
//! schedule, and repeatability of every call.

use mplx_analysis::{checks, HybridServices};
use mplx_test_utils::{
    address, asset, escrow, program_with, recipe, recipe_address, MockAccountSource,
};
use mplx_types::{Operation, RecipeV1};

fn services(source: &MockAccountSource) -> HybridServices {
    HybridServices::new(program_with(source))
}

fn store_recipe(source: &MockAccountSource, recipe: &RecipeV1) {
    source.insert(recipe_address(&recipe.collection), recipe);
}

// =============================================================================
// Recipe Analysis
// =============================================================================

#[tokio::test]
async fn test_valid_recipes_have_no_issues() {
    let source = MockAccountSource::new();
    let services = services(&source);

    let cases = [(1u64, 0u64, 1u64, 0.0, 0.0), (100, 99, 5, 0.5, 2.0), (u64::MAX, 0, 1, 0.0, 0.001)];
    for (i, (max, min, amount, fee, sol_fee)) in cases.into_iter().enumerate() {
        let collection = address(i as u8 + 1);
        let mut r = recipe(collection);
        r.max = max;
        r.min = min;
        r.amount = amount;
        r.fee_amount_capture = fee;
        r.fee_amount_release = fee;
        r.sol_fee_amount_capture = sol_fee;
        r.sol_fee_amount_release = sol_fee;
        store_recipe(&source, &r);

        let analysis = services.recipes.analyze(&collection.to_string()).await.unwrap();
        assert!(analysis.is_valid, "case {i} should be valid");
        assert!(analysis.issues.is_empty());
        assert_eq!(analysis.max, max);
        assert_eq!(analysis.amount, amount);
    }
}

#[tokio::test]
async fn test_max_not_above_min_always_reported() {
    let source = MockAccountSource::new();
    let services = services(&source);

    for (i, (max, min)) in [(0u64, 0u64), (5, 5), (1, 9)].into_iter().enumerate() {
        let collection = address(i as u8 + 30);
        let mut r = recipe(collection);
        r.max = max;
        r.min = min;
        store_recipe(&source, &r);

        let analysis = services.recipes.analyze(&collection.to_string()).await.unwrap();
        assert!(!analysis.is_valid);
        assert_eq!(analysis.issues, vec![checks::MAX_NOT_ABOVE_MIN.to_string()]);
        assert_eq!(analysis.name, r.name);
    }
}

#[tokio::test]
async fn test_recipe_all_issues_in_order() {
    let source = MockAccountSource::new();
    let collection = address(40);
    let mut r = recipe(collection);
    r.max = 1;
    r.min = 2;
    r.amount = 0;
    r.fee_amount_capture = -1.0;
    r.sol_fee_amount_release = -1.0;
    store_recipe(&source, &r);

    let analysis = services(&source)
        .recipes
        .analyze(&collection.to_string())
        .await
        .unwrap();

    assert_eq!(
        analysis.issues,
        vec![
            checks::MAX_NOT_ABOVE_MIN.to_string(),
            checks::AMOUNT_NOT_POSITIVE.to_string(),
            checks::NEGATIVE_FEES.to_string(),
            checks::NEGATIVE_SOL_FEES.to_string(),
        ]
    );
    assert_eq!(analysis.fee_amount_capture, -1.0);
}

#[tokio::test]
async fn test_recipe_transport_failure_is_single_issue() {
    let source = MockAccountSource::new().with_failure("connection refused");
    let analysis = services(&source)
        .recipes
        .analyze(&address(1).to_string())
        .await
        .unwrap();

    assert!(!analysis.is_valid);
    assert_eq!(
        analysis.issues,
        vec!["Failed to analyze recipe: transport error: connection refused".to_string()]
    );
    assert_eq!(analysis.count, 0);
    assert_eq!(analysis.sol_fee_amount_release, 0.0);
}

#[tokio::test]
async fn test_recipe_decode_failure_is_captured() {
    let source = MockAccountSource::new();
    let collection = address(1);
    // An escrow sitting where the recipe should be.
    source.insert(recipe_address(&collection), &escrow(collection, address(2)));

    let analysis = services(&source)
        .recipes
        .analyze(&collection.to_string())
        .await
        .unwrap();

    assert!(!analysis.is_valid);
    assert_eq!(analysis.issues.len(), 1);
    assert!(analysis.issues[0].starts_with("Failed to analyze recipe: failed to decode account"));
}

// =============================================================================
// Escrow Validation
// =============================================================================

#[tokio::test]
async fn test_escrow_issue_texts() {
    let source = MockAccountSource::new();
    let mut e = escrow(address(1), address(2));
    e.max = 0;
    e.min = 0;
    e.amount = 0;
    e.fee_amount = -0.01;
    e.sol_fee_amount = -0.01;
    source.insert(address(50), &e);

    let validation = services(&source)
        .escrows
        .validate_escrow(&address(1).to_string(), &address(50).to_string())
        .await
        .unwrap();

    assert!(!validation.is_valid);
    assert_eq!(
        validation.issues,
        vec![
            "Max value must be greater than min value".to_string(),
            "Amount must be greater than 0".to_string(),
            "Fee amount cannot be negative".to_string(),
            "SOL fee amount cannot be negative".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_escrow_fetch_failure_prefix() {
    let source = MockAccountSource::new().with_failure("timeout");
    let validation = services(&source)
        .escrows
        .validate_escrow(&address(1).to_string(), &address(50).to_string())
        .await
        .unwrap();

    assert_eq!(
        validation.issues,
        vec!["Failed to validate escrow: transport error: timeout".to_string()]
    );
    assert_eq!(validation.amount, 0);
    assert!(validation.uri.is_empty());
}

// =============================================================================
// Conversion Status
// =============================================================================

#[tokio::test]
async fn test_unlocked_asset_has_no_escrow_fields() {
    let source = MockAccountSource::new();
    source.insert(address(20), &asset(address(7)));
    // Escrow for a different asset.
    source.insert(address(50), &escrow(address(1), address(21)));

    let status = services(&source)
        .escrows
        .check_conversion_status(&address(20).to_string())
        .await
        .unwrap();

    assert!(!status.is_locked);
    assert_eq!(status.current_owner, address(7).to_string());
    assert!(status.escrow_account.is_none());
    assert!(status.token_amount.is_none());
    assert!(status.last_operation.is_none());
    assert!(status.timestamp.is_none());
    assert!(status.issues.is_none());
}

#[tokio::test]
async fn test_locked_asset_copies_first_escrow() {
    let source = MockAccountSource::new();
    source.insert(address(20), &asset(address(50)));

    let mut first = escrow(address(1), address(20));
    first.amount = 777;
    first.last_operation = Some(Operation::Release);
    first.timestamp = 1_650_000_000;
    source.insert(address(50), &first);

    let mut second = escrow(address(1), address(20));
    second.amount = 1;
    source.insert(address(51), &second);

    let status = services(&source)
        .escrows
        .check_conversion_status(&address(20).to_string())
        .await
        .unwrap();

    assert!(status.is_locked);
    assert_eq!(status.current_owner, address(50).to_string());
    assert_eq!(status.escrow_account, Some(address(50).to_string()));
    assert_eq!(status.token_amount, Some(777));
    assert_eq!(status.last_operation, Some(Operation::Release));
    assert_eq!(status.timestamp, Some(1_650_000_000));
    assert!(status.issues.is_none());
}

#[tokio::test]
async fn test_status_listing_failure() {
    let source = MockAccountSource::new();
    source.insert(address(20), &asset(address(7)));
    source.set_fail_listings(Some("too many requests"));

    let status = services(&source)
        .escrows
        .check_conversion_status(&address(20).to_string())
        .await
        .unwrap();

    assert!(!status.is_locked);
    assert_eq!(status.current_owner, "");
    assert_eq!(
        status.issues,
        Some(vec![
            "Failed to check conversion status: transport error: too many requests".to_string()
        ])
    );
}

#[tokio::test]
async fn test_status_malformed_asset_is_err() {
    let source = MockAccountSource::new();
    let result = services(&source).escrows.check_conversion_status("abc").await;
    assert!(result.is_err());
    assert_eq!(source.fetch_calls(), 0);
}

// =============================================================================
// Fees
// =============================================================================

#[tokio::test]
async fn test_fee_example_values() {
    let source = MockAccountSource::new();
    store_recipe(&source, &recipe(address(1)));
    source.insert(address(50), &escrow(address(1), address(20)));
    let services = services(&source);

    let capture = services.fees.calculate_fees(Operation::Capture, 1000.0).await;
    assert_eq!(capture.token_fees.total, 11.0);
    assert!((capture.sol_fees.total - 0.00101).abs() < 1e-12);

    let release = services.fees.calculate_fees(Operation::Release, 1000.0).await;
    assert_eq!(release.token_fees.total, 16.0);
    assert!((release.sol_fees.total - 0.00151).abs() < 1e-12);
}

#[tokio::test]
async fn test_fee_totals_are_sums() {
    let source = MockAccountSource::new();
    store_recipe(&source, &recipe(address(1)));
    let services = services(&source);

    for amount in [0.5, 1.0, 3.3, 12345.678] {
        let fees = services.fees.calculate_fees(Operation::Capture, amount).await;
        assert!(fees.is_valid);
        assert_eq!(fees.token_fees.total, fees.token_fees.protocol + fees.token_fees.project);
        assert_eq!(fees.sol_fees.total, fees.sol_fees.protocol + fees.sol_fees.project);
    }
}

#[tokio::test]
async fn test_first_listed_configuration_sets_rates() {
    let source = MockAccountSource::new();

    let mut first_recipe = recipe(address(1));
    first_recipe.fee_amount_capture = 0.02;
    let mut second_recipe = recipe(address(2));
    second_recipe.fee_amount_capture = 0.5;
    store_recipe(&source, &first_recipe);
    store_recipe(&source, &second_recipe);

    let mut first_escrow = escrow(address(1), address(20));
    first_escrow.fee_amount = 0.03;
    let mut second_escrow = escrow(address(2), address(21));
    second_escrow.fee_amount = 0.9;
    source.insert(address(50), &first_escrow);
    source.insert(address(51), &second_escrow);

    let services = services(&source);

    let capture = services.fees.calculate_fees(Operation::Capture, 1000.0).await;
    assert!(capture.is_valid);
    assert!((capture.token_fees.project - 20.0).abs() < 1e-9);

    let release = services.fees.calculate_fees(Operation::Release, 1000.0).await;
    assert!(release.is_valid);
    assert!((release.token_fees.project - 30.0).abs() < 1e-9);
}

// =============================================================================
// Repeatability
// =============================================================================

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let source = MockAccountSource::new();
    let collection = address(1);
    store_recipe(&source, &recipe(collection));
    source.insert(address(20), &asset(address(50)));
    source.insert(address(50), &escrow(collection, address(20)));
    let services = services(&source);

    let c = collection.to_string();
    let e = address(50).to_string();
    let a = address(20).to_string();

    let first = serde_json::to_vec(&services.recipes.analyze(&c).await.unwrap()).unwrap();
    let second = serde_json::to_vec(&services.recipes.analyze(&c).await.unwrap()).unwrap();
    assert_eq!(first, second);

    let first = serde_json::to_vec(&services.escrows.validate_escrow(&c, &e).await.unwrap()).unwrap();
    let second = serde_json::to_vec(&services.escrows.validate_escrow(&c, &e).await.unwrap()).unwrap();
    assert_eq!(first, second);

    let first = serde_json::to_vec(&services.escrows.check_conversion_status(&a).await.unwrap()).unwrap();
    let second = serde_json::to_vec(&services.escrows.check_conversion_status(&a).await.unwrap()).unwrap();
    assert_eq!(first, second);

    let first = serde_json::to_vec(&services.fees.calculate_fees(Operation::Release, 42.0).await).unwrap();
    let second = serde_json::to_vec(&services.fees.calculate_fees(Operation::Release, 42.0).await).unwrap();
    assert_eq!(first, second);
}
