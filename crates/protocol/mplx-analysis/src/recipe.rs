//! Recipe analysis.
//!
//! A collection's recipe lives at the `["recipe", collection]` PDA of the
//! MPL-Hybrid program. The analyzer derives that address, fetches the
//! recipe and runs the recipe constraint checks.

use mplx_chain::Program;
use mplx_types::{find_program_address, Address, RecipeAnalysis, RecipeV1, RECIPE_SEED};
use tracing::{debug, info, warn};

use crate::checks::check_recipe;
use crate::error::AnalysisResult;

/// Prefix for issues raised when the recipe cannot be read.
pub const RECIPE_FAILURE_PREFIX: &str = "Failed to analyze recipe: ";

/// Analyzes collection recipes.
#[derive(Clone)]
pub struct RecipeAnalyzer {
    program: Program,
}

impl RecipeAnalyzer {
    pub fn new(program: Program) -> Self {
        Self { program }
    }

    /// Derive the recipe address and bump for a collection.
    pub fn recipe_address(&self, collection: &str) -> AnalysisResult<(Address, u8)> {
        let collection: Address = collection.parse()?;
        Ok(find_program_address(
            &[RECIPE_SEED, collection.as_ref()],
            self.program.program_id(),
        )?)
    }

    /// Fetch and validate the recipe for `collection`.
    ///
    /// Malformed input is an `Err`. Failures reading the recipe come back
    /// as an invalid, zeroed record with a single issue.
    pub async fn analyze(&self, collection: &str) -> AnalysisResult<RecipeAnalysis> {
        let (recipe_address, bump) = self.recipe_address(collection)?;
        debug!(collection, recipe = %recipe_address, bump, "Analyzing recipe");

        let recipe = match self.program.fetch::<RecipeV1>(&recipe_address).await {
            Ok(recipe) => recipe,
            Err(e) => {
                warn!(collection, error = %e, "Recipe fetch failed");
                return Ok(RecipeAnalysis::failed(
                    collection,
                    format!("{}{}", RECIPE_FAILURE_PREFIX, e),
                ));
            }
        };

        let issues = check_recipe(&recipe);
        info!(
            collection,
            name = %recipe.name,
            issues = issues.len(),
            "Recipe analyzed"
        );

        Ok(RecipeAnalysis::from_recipe(collection, &recipe, issues))
    }
}
