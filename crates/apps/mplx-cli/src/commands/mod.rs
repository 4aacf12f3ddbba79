//! CLI command implementations.

pub mod derive;
pub mod docs_server;
pub mod escrow;
pub mod fees;
pub mod hybrid_server;
pub mod recipe;
pub mod status;

// Re-export command handlers
pub use derive::derive;
pub use docs_server::docs_server;
pub use escrow::escrow;
pub use fees::fees;
pub use hybrid_server::hybrid_server;
pub use recipe::recipe;
pub use status::status;
