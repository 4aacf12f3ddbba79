//! MCP tool input/output types.
//!
//! Defines the request and response types for the hybrid and docs tools.
//! Hybrid tool results are the analysis records from `mplx-types`,
//! serialized as they are.

use rmcp::schemars;
use rmcp::schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// analyze_recipe Tool
// ============================================================================

/// Input for the `analyze_recipe` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeRecipeInput {
    /// Collection address (base58). The recipe is derived from it.
    pub collection: String,
}

// ============================================================================
// validate_escrow Tool
// ============================================================================

/// Input for the `validate_escrow` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ValidateEscrowInput {
    /// Collection address (base58).
    pub collection: String,

    /// Escrow account address (base58).
    pub escrow: String,
}

// ============================================================================
// check_conversion_status Tool
// ============================================================================

/// Input for the `check_conversion_status` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CheckConversionStatusInput {
    /// Asset address (base58).
    pub asset: String,
}

// ============================================================================
// calculate_fees Tool
// ============================================================================

/// Input for the `calculate_fees` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculateFeesInput {
    /// Swap direction: `capture` (tokens for NFT) or `release` (NFT for tokens).
    pub operation: String,

    /// Token amount being swapped.
    pub amount: f64,
}

// ============================================================================
// derive_recipe_address Tool
// ============================================================================

/// Input for the `derive_recipe_address` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeriveRecipeAddressInput {
    /// Collection address (base58).
    pub collection: String,
}

/// Output from the `derive_recipe_address` tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeriveRecipeAddressOutput {
    /// Collection the recipe belongs to.
    pub collection: String,

    /// Recipe account address.
    pub recipe: String,

    /// Bump seed of the derived address.
    pub bump: u8,

    /// Program the address was derived under.
    pub program_id: String,
}

// ============================================================================
// get_repo Tool
// ============================================================================

/// Input for the `get_repo` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetRepoInput {
    /// Repository name inside the Metaplex organisation.
    /// Defaults to the configured default repository.
    #[serde(default)]
    pub repo: Option<String>,
}

/// Output from the `get_repo` tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RepoSummary {
    /// Repository name.
    pub name: String,

    /// Repository description, if set.
    pub description: Option<String>,

    /// Stargazer count.
    pub stars: u64,

    /// Fork count.
    pub forks: u64,

    /// Browser URL.
    pub url: String,
}

// ============================================================================
// search_code Tool
// ============================================================================

/// Input for the `search_code` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchCodeInput {
    /// Code search query.
    pub query: String,

    /// Restrict to one repository. Searches the whole organisation when omitted.
    #[serde(default)]
    pub repo: Option<String>,
}

/// A single code search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CodeSearchHit {
    /// File path within the repository.
    pub path: String,

    /// Repository full name (`owner/name`).
    pub repository: String,

    /// Browser URL of the file.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fees_input_deserialization() {
        let json = r#"{"operation": "capture", "amount": 1000}"#;
        let input: CalculateFeesInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.operation, "capture");
        assert_eq!(input.amount, 1000.0);
    }

    #[test]
    fn test_get_repo_input_repo_optional() {
        let input: GetRepoInput = serde_json::from_str("{}").unwrap();
        assert!(input.repo.is_none());

        let input: GetRepoInput = serde_json::from_str(r#"{"repo": "mpl-core"}"#).unwrap();
        assert_eq!(input.repo.as_deref(), Some("mpl-core"));
    }

    #[test]
    fn test_search_input_requires_query() {
        let result: Result<SearchCodeInput, _> = serde_json::from_str(r#"{"repo": "mpl-core"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_output_camel_case() {
        let output = DeriveRecipeAddressOutput {
            collection: "c".to_string(),
            recipe: "r".to_string(),
            bump: 254,
            program_id: "p".to_string(),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["programId"], "p");
        assert_eq!(json["bump"], 254);
    }
}
