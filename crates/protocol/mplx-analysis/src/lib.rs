//! Analysis services for the MPL-Hybrid program.
//!
//! Three stateless services, each holding a [`Program`] over an injected
//! account source:
//!
//! - [`RecipeAnalyzer`]: derive a collection's recipe address, fetch the
//!   recipe and check its constraints
//! - [`EscrowValidator`]: check an escrow's configuration and find out
//!   whether an asset is locked in one
//! - [`FeeCalculator`]: protocol and project fees for a capture or release
//!
//! # Error model
//!
//! Malformed input (a bad address, an unknown operation name) is returned
//! as [`AnalysisError`]. Anything that goes wrong while reading the chain is
//! captured in the returned record as a single issue, with every other
//! field zeroed.
//!
//! # Example
//!
//! ```rust,ignore
//! use mplx_analysis::HybridServices;
//!
//! let services = HybridServices::new(program);
//! let analysis = services.recipes.analyze("<collection>").await?;
//! if !analysis.is_valid {
//!     for issue in &analysis.issues {
//!         eprintln!("{}", issue);
//!     }
//! }
//! ```

pub mod checks;
mod error;
mod escrow;
mod fees;
mod recipe;

pub use error::{AnalysisError, AnalysisResult};
pub use escrow::{EscrowValidator, ESCROW_FAILURE_PREFIX, STATUS_FAILURE_PREFIX};
pub use fees::{FeeCalculator, FEE_CONFIG_FAILURE_PREFIX, NO_FEE_CONFIG};
pub use recipe::{RecipeAnalyzer, RECIPE_FAILURE_PREFIX};

use mplx_chain::Program;

/// The three services sharing one program handle.
#[derive(Clone)]
pub struct HybridServices {
    pub recipes: RecipeAnalyzer,
    pub escrows: EscrowValidator,
    pub fees: FeeCalculator,
}

impl HybridServices {
    pub fn new(program: Program) -> Self {
        Self {
            recipes: RecipeAnalyzer::new(program.clone()),
            escrows: EscrowValidator::new(program.clone()),
            fees: FeeCalculator::new(program),
        }
    }
}
