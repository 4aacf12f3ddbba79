//! Result records returned by the analysis services.
//!
//! Every record is built fresh per call. Failed records are fully zeroed
//! so no field can leak from an earlier success. Records serialize with
//! camelCase keys; absent optional fields are omitted.

use serde::{Deserialize, Serialize};

use crate::{Address, EscrowV1, Operation, RecipeV1};

// =============================================================================
// Recipe
// =============================================================================

/// Outcome of analysing a collection's recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeAnalysis {
    pub collection: String,
    pub name: String,
    pub uri: String,
    pub max: u64,
    pub min: u64,
    pub amount: u64,
    pub fee_amount_capture: f64,
    pub fee_amount_release: f64,
    pub sol_fee_amount_capture: f64,
    pub sol_fee_amount_release: f64,
    pub path: u16,
    pub count: u64,
    pub is_valid: bool,
    pub issues: Vec<String>,
}

impl RecipeAnalysis {
    /// Populate from a fetched recipe. Validity follows `issues`.
    pub fn from_recipe(collection: &str, recipe: &RecipeV1, issues: Vec<String>) -> Self {
        Self {
            collection: collection.to_string(),
            name: recipe.name.clone(),
            uri: recipe.uri.clone(),
            max: recipe.max,
            min: recipe.min,
            amount: recipe.amount,
            fee_amount_capture: recipe.fee_amount_capture,
            fee_amount_release: recipe.fee_amount_release,
            sol_fee_amount_capture: recipe.sol_fee_amount_capture,
            sol_fee_amount_release: recipe.sol_fee_amount_release,
            path: recipe.path,
            count: recipe.count,
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Zeroed, invalid record carrying a single issue.
    pub fn failed(collection: &str, issue: String) -> Self {
        Self {
            collection: collection.to_string(),
            name: String::new(),
            uri: String::new(),
            max: 0,
            min: 0,
            amount: 0,
            fee_amount_capture: 0.0,
            fee_amount_release: 0.0,
            sol_fee_amount_capture: 0.0,
            sol_fee_amount_release: 0.0,
            path: 0,
            count: 0,
            is_valid: false,
            issues: vec![issue],
        }
    }
}

// =============================================================================
// Escrow
// =============================================================================

/// Outcome of validating one escrow for a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowValidation {
    pub collection: String,
    pub escrow: String,
    pub name: String,
    pub uri: String,
    pub max: u64,
    pub min: u64,
    pub amount: u64,
    pub fee_amount: f64,
    pub sol_fee_amount: f64,
    pub path: u16,
    pub count: u64,
    pub is_valid: bool,
    pub issues: Vec<String>,
}

impl EscrowValidation {
    /// Populate from a fetched escrow. Validity follows `issues`.
    pub fn from_escrow(
        collection: &str,
        escrow_address: &str,
        escrow: &EscrowV1,
        issues: Vec<String>,
    ) -> Self {
        Self {
            collection: collection.to_string(),
            escrow: escrow_address.to_string(),
            name: escrow.name.clone(),
            uri: escrow.uri.clone(),
            max: escrow.max,
            min: escrow.min,
            amount: escrow.amount,
            fee_amount: escrow.fee_amount,
            sol_fee_amount: escrow.sol_fee_amount,
            path: escrow.path,
            count: escrow.count,
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Zeroed, invalid record carrying a single issue.
    pub fn failed(collection: &str, escrow_address: &str, issue: String) -> Self {
        Self {
            collection: collection.to_string(),
            escrow: escrow_address.to_string(),
            name: String::new(),
            uri: String::new(),
            max: 0,
            min: 0,
            amount: 0,
            fee_amount: 0.0,
            sol_fee_amount: 0.0,
            path: 0,
            count: 0,
            is_valid: false,
            issues: vec![issue],
        }
    }
}

// =============================================================================
// Conversion status
// =============================================================================

/// Whether an asset is currently locked in an escrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStatus {
    pub asset: String,
    pub is_locked: bool,
    pub current_owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escrow_account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_operation: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
}

impl ConversionStatus {
    /// Asset held by its owner, no escrow involved.
    pub fn unlocked(asset: &str, owner: &Address) -> Self {
        Self {
            asset: asset.to_string(),
            is_locked: false,
            current_owner: owner.to_string(),
            escrow_account: None,
            token_amount: None,
            last_operation: None,
            timestamp: None,
            issues: None,
        }
    }

    /// Asset locked in `escrow_address`.
    pub fn locked(asset: &str, owner: &Address, escrow_address: &Address, escrow: &EscrowV1) -> Self {
        Self {
            asset: asset.to_string(),
            is_locked: true,
            current_owner: owner.to_string(),
            escrow_account: Some(escrow_address.to_string()),
            token_amount: Some(escrow.amount),
            last_operation: escrow.last_operation,
            timestamp: Some(escrow.timestamp),
            issues: None,
        }
    }

    /// Status could not be determined.
    pub fn failed(asset: &str, issue: String) -> Self {
        Self {
            asset: asset.to_string(),
            is_locked: false,
            current_owner: String::new(),
            escrow_account: None,
            token_amount: None,
            last_operation: None,
            timestamp: None,
            issues: Some(vec![issue]),
        }
    }
}

// =============================================================================
// Fees
// =============================================================================

/// Protocol / project split of a single fee currency.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub protocol: f64,
    pub project: f64,
    pub total: f64,
}

impl FeeBreakdown {
    /// Build a breakdown; `total` is always `protocol + project`.
    pub fn new(protocol: f64, project: f64) -> Self {
        Self {
            protocol,
            project,
            total: protocol + project,
        }
    }

    /// All-zero breakdown.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Fees owed for one capture or release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeCalculation {
    pub operation: Operation,
    pub amount: f64,
    pub token_fees: FeeBreakdown,
    pub sol_fees: FeeBreakdown,
    pub is_valid: bool,
    pub issues: Vec<String>,
}

impl FeeCalculation {
    /// Successful calculation.
    pub fn computed(
        operation: Operation,
        amount: f64,
        token_fees: FeeBreakdown,
        sol_fees: FeeBreakdown,
    ) -> Self {
        Self {
            operation,
            amount,
            token_fees,
            sol_fees,
            is_valid: true,
            issues: Vec::new(),
        }
    }

    /// All-zero, invalid calculation carrying a single issue.
    pub fn rejected(operation: Operation, amount: f64, issue: String) -> Self {
        Self {
            operation,
            amount,
            token_fees: FeeBreakdown::zero(),
            sol_fees: FeeBreakdown::zero(),
            is_valid: false,
            issues: vec![issue],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_breakdown_total() {
        let fees = FeeBreakdown::new(1.0, 10.0);
        assert_eq!(fees.total, 11.0);
        assert_eq!(FeeBreakdown::zero().total, 0.0);
    }

    #[test]
    fn test_failed_recipe_is_zeroed() {
        let analysis = RecipeAnalysis::failed("abc", "boom".to_string());
        assert!(!analysis.is_valid);
        assert_eq!(analysis.issues, vec!["boom".to_string()]);
        assert_eq!(analysis.max, 0);
        assert_eq!(analysis.fee_amount_release, 0.0);
        assert!(analysis.name.is_empty());
    }

    #[test]
    fn test_unlocked_status_omits_escrow_fields() {
        let status = ConversionStatus::unlocked("asset", &Address::default());
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["isLocked"], false);
        assert!(json.get("escrowAccount").is_none());
        assert!(json.get("tokenAmount").is_none());
        assert!(json.get("issues").is_none());
    }

    #[test]
    fn test_fee_calculation_json_keys() {
        let calc = FeeCalculation::rejected(Operation::Capture, 0.0, "nope".to_string());
        let json = serde_json::to_value(&calc).unwrap();

        assert_eq!(json["operation"], "capture");
        assert_eq!(json["isValid"], false);
        assert_eq!(json["tokenFees"]["total"], 0.0);
        assert_eq!(json["solFees"]["protocol"], 0.0);
    }
}
