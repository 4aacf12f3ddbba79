//! Check whether an asset is locked in an escrow.

use tracing::info;

use crate::context::HybridContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the status command.
pub async fn status(ctx: &HybridContext, format: OutputFormat, asset: &str) -> CliResult<String> {
    let status = ctx.services.escrows.check_conversion_status(asset).await?;
    info!(asset = %asset, locked = status.is_locked, "Conversion status checked");
    Ok(status.render(format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mplx_test_utils::{address, asset as asset_fixture, escrow, program_with, MockAccountSource};

    #[tokio::test]
    async fn test_locked_asset() {
        colored::control::set_override(false);
        let source = MockAccountSource::new();
        source.insert(address(20), &asset_fixture(address(7)));
        source.insert(address(50), &escrow(address(1), address(20)));
        let ctx = HybridContext::new(program_with(&source));

        let output = status(&ctx, OutputFormat::Human, &address(20).to_string())
            .await
            .unwrap();

        assert!(output.contains("Status: locked in escrow"));
        assert!(output.contains(&format!("Escrow: {}", address(50))));
        assert!(output.contains("Last operation: capture"));
    }

    #[tokio::test]
    async fn test_unlocked_asset_json_omits_escrow_fields() {
        let source = MockAccountSource::new();
        source.insert(address(20), &asset_fixture(address(7)));
        let ctx = HybridContext::new(program_with(&source));

        let output = status(&ctx, OutputFormat::Json, &address(20).to_string())
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["isLocked"], false);
        assert_eq!(json["currentOwner"], address(7).to_string());
        assert!(json.get("escrowAccount").is_none());
    }
}
