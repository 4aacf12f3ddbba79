//! Derive a collection's recipe address.

use mplx_mcp::tools::DeriveRecipeAddressOutput;

use crate::context::HybridContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the derive command.
///
/// Purely local: nothing is fetched from the chain.
pub fn derive(ctx: &HybridContext, format: OutputFormat, collection: &str) -> CliResult<String> {
    let (recipe, bump) = ctx.services.recipes.recipe_address(collection)?;

    let output = DeriveRecipeAddressOutput {
        collection: collection.to_string(),
        recipe: recipe.to_string(),
        bump,
        program_id: ctx.program_id.clone(),
    };

    Ok(output.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mplx_test_utils::{address, program_with, recipe_address, MockAccountSource};

    #[test]
    fn test_derive_matches_fixture_pda() {
        let source = MockAccountSource::new();
        let ctx = HybridContext::new(program_with(&source));
        let collection = address(3);

        let output = derive(&ctx, OutputFormat::Json, &collection.to_string()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["recipe"], recipe_address(&collection).to_string());
        assert_eq!(source.fetch_calls(), 0);
    }
}
