//! Constraint checks shared by the recipe and escrow services.
//!
//! Each check returns the issues it found, in a fixed order. An empty list
//! means the configuration is valid.

use mplx_types::{EscrowV1, RecipeV1};

/// `max` must be strictly greater than `min`.
pub const MAX_NOT_ABOVE_MIN: &str = "Max value must be greater than min value";

/// `amount` must be positive.
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than 0";

/// Recipe capture or release token fee is negative.
pub const NEGATIVE_FEES: &str = "Fee amounts cannot be negative";

/// Recipe capture or release SOL fee is negative.
pub const NEGATIVE_SOL_FEES: &str = "SOL fee amounts cannot be negative";

/// Escrow token fee is negative.
pub const NEGATIVE_FEE: &str = "Fee amount cannot be negative";

/// Escrow SOL fee is negative.
pub const NEGATIVE_SOL_FEE: &str = "SOL fee amount cannot be negative";

fn check_bounds(max: u64, min: u64, amount: u64, issues: &mut Vec<String>) {
    if max <= min {
        issues.push(MAX_NOT_ABOVE_MIN.to_string());
    }
    if amount == 0 {
        issues.push(AMOUNT_NOT_POSITIVE.to_string());
    }
}

/// Validate a recipe's bounds and both fee pairs.
pub fn check_recipe(recipe: &RecipeV1) -> Vec<String> {
    let mut issues = Vec::new();
    check_bounds(recipe.max, recipe.min, recipe.amount, &mut issues);

    if recipe.fee_amount_capture < 0.0 || recipe.fee_amount_release < 0.0 {
        issues.push(NEGATIVE_FEES.to_string());
    }
    if recipe.sol_fee_amount_capture < 0.0 || recipe.sol_fee_amount_release < 0.0 {
        issues.push(NEGATIVE_SOL_FEES.to_string());
    }

    issues
}

/// Validate an escrow's bounds and its single fee pair.
pub fn check_escrow(escrow: &EscrowV1) -> Vec<String> {
    let mut issues = Vec::new();
    check_bounds(escrow.max, escrow.min, escrow.amount, &mut issues);

    if escrow.fee_amount < 0.0 {
        issues.push(NEGATIVE_FEE.to_string());
    }
    if escrow.sol_fee_amount < 0.0 {
        issues.push(NEGATIVE_SOL_FEE.to_string());
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use mplx_types::{Address, Operation};

    fn recipe() -> RecipeV1 {
        RecipeV1 {
            collection: Address::new([1; 32]),
            authority: Address::new([2; 32]),
            token: Address::new([3; 32]),
            fee_location: Address::new([4; 32]),
            name: "r".to_string(),
            uri: "u".to_string(),
            max: 10,
            min: 1,
            amount: 100,
            fee_amount_capture: 0.01,
            sol_fee_amount_capture: 0.001,
            fee_amount_release: 0.015,
            sol_fee_amount_release: 0.0015,
            count: 0,
            path: 0,
            bump: 255,
        }
    }

    fn escrow() -> EscrowV1 {
        EscrowV1 {
            asset: Address::new([9; 32]),
            collection: Address::new([1; 32]),
            authority: Address::new([2; 32]),
            token: Address::new([3; 32]),
            fee_location: Address::new([4; 32]),
            name: "e".to_string(),
            uri: "u".to_string(),
            max: 10,
            min: 1,
            amount: 100,
            fee_amount: 0.015,
            sol_fee_amount: 0.0015,
            count: 0,
            path: 0,
            last_operation: Some(Operation::Release),
            timestamp: 0,
            bump: 254,
        }
    }

    #[test]
    fn test_valid_recipe_has_no_issues() {
        assert!(check_recipe(&recipe()).is_empty());
    }

    #[test]
    fn test_equal_bounds_rejected() {
        let mut r = recipe();
        r.max = 5;
        r.min = 5;
        assert_eq!(check_recipe(&r), vec![MAX_NOT_ABOVE_MIN.to_string()]);
    }

    #[test]
    fn test_recipe_issue_order() {
        let mut r = recipe();
        r.max = 0;
        r.min = 3;
        r.amount = 0;
        r.fee_amount_release = -0.5;
        r.sol_fee_amount_capture = -1.0;

        assert_eq!(
            check_recipe(&r),
            vec![
                MAX_NOT_ABOVE_MIN.to_string(),
                AMOUNT_NOT_POSITIVE.to_string(),
                NEGATIVE_FEES.to_string(),
                NEGATIVE_SOL_FEES.to_string(),
            ]
        );
    }

    #[test]
    fn test_zero_fees_are_allowed() {
        let mut r = recipe();
        r.fee_amount_capture = 0.0;
        r.sol_fee_amount_release = 0.0;
        assert!(check_recipe(&r).is_empty());
    }

    #[test]
    fn test_escrow_uses_singular_messages() {
        let mut e = escrow();
        e.fee_amount = -0.1;
        e.sol_fee_amount = -0.1;

        assert_eq!(
            check_escrow(&e),
            vec![NEGATIVE_FEE.to_string(), NEGATIVE_SOL_FEE.to_string()]
        );
    }

    #[test]
    fn test_escrow_zero_amount() {
        let mut e = escrow();
        e.amount = 0;
        assert_eq!(check_escrow(&e), vec![AMOUNT_NOT_POSITIVE.to_string()]);
    }
}
