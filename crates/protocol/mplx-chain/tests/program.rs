//! Integration tests for the typed `Program` view using MockAccountSource.
//!
//! These cover fetching and decoding single accounts, listing with the
//! automatic discriminator filter, and memcmp lookups of escrows by asset.

use mplx_chain::{account_discriminator, AccountFilter, ChainError};
use mplx_test_utils::{address, asset, escrow, program_with, recipe, MockAccountSource};
use mplx_types::{AssetV1, EscrowV1, RecipeV1, ESCROW_ASSET_OFFSET};

// =============================================================================
// Fetch
// =============================================================================

#[tokio::test]
async fn test_fetch_decodes_recipe() {
    let source = MockAccountSource::new();
    let stored = recipe(address(10));
    source.insert(address(1), &stored);

    let program = program_with(&source);
    let fetched: RecipeV1 = program.fetch(&address(1)).await.unwrap();
    assert_eq!(fetched, stored);
}

#[tokio::test]
async fn test_fetch_missing_account() {
    let source = MockAccountSource::new();
    let program = program_with(&source);

    let err = program.fetch::<RecipeV1>(&address(1)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_fetch_wrong_type_is_decode_error() {
    let source = MockAccountSource::new();
    source.insert(address(1), &escrow(address(10), address(20)));

    let program = program_with(&source);
    let err = program.fetch::<RecipeV1>(&address(1)).await.unwrap_err();
    assert!(matches!(err, ChainError::Decode(_)));
}

#[tokio::test]
async fn test_fetch_asset() {
    let source = MockAccountSource::new();
    source.insert(address(5), &asset(address(6)));

    let program = program_with(&source);
    let fetched: AssetV1 = program.fetch(&address(5)).await.unwrap();
    assert_eq!(fetched.owner, address(6));
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_all_only_returns_requested_type() {
    let source = MockAccountSource::new();
    source.insert(address(1), &recipe(address(10)));
    source.insert(address(2), &escrow(address(10), address(20)));
    source.insert(address(3), &recipe(address(11)));

    let program = program_with(&source);
    let recipes = program.all::<RecipeV1>(Vec::new()).await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].address, address(1));
    assert_eq!(recipes[1].address, address(3));

    let listings = source.listings();
    assert_eq!(
        listings[0],
        vec![AccountFilter::memcmp(0, account_discriminator("RecipeV1").to_vec())]
    );
}

#[tokio::test]
async fn test_escrow_lookup_by_asset() {
    let source = MockAccountSource::new();
    source.insert(address(1), &escrow(address(10), address(20)));
    source.insert(address(2), &escrow(address(10), address(21)));

    let program = program_with(&source);
    let found = program
        .all::<EscrowV1>(vec![AccountFilter::memcmp_address(
            ESCROW_ASSET_OFFSET,
            &address(21),
        )])
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].address, address(2));
    assert_eq!(found[0].account.asset, address(21));
}

#[tokio::test]
async fn test_listing_failure_propagates() {
    let source = MockAccountSource::new();
    source.set_fail_listings(Some("rate limited"));

    let program = program_with(&source);
    let err = program.all::<EscrowV1>(Vec::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "transport error: rate limited");
}
