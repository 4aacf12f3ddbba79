//! Analyze a collection's recipe.

use tracing::info;

use crate::context::HybridContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the recipe command.
pub async fn recipe(ctx: &HybridContext, format: OutputFormat, collection: &str) -> CliResult<String> {
    let analysis = ctx.services.recipes.analyze(collection).await?;
    info!(collection = %collection, valid = analysis.is_valid, "Recipe analyzed");
    Ok(analysis.render(format))
}
