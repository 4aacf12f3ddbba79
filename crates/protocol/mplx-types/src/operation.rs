//! Swap operations recorded by escrows and priced by the fee schedule.

use std::fmt;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::error::UnknownOperation;

/// A hybrid swap direction.
///
/// Stored on chain as a one-byte variant index in declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Tokens in, NFT out.
    Capture,
    /// NFT in, tokens out.
    Release,
}

impl Operation {
    /// Lowercase name as used on the wire and in tool arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Capture => "capture",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "capture" => Ok(Self::Capture),
            "release" => Ok(Self::Release),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Capture".parse::<Operation>().unwrap(), Operation::Capture);
        assert_eq!(" release ".parse::<Operation>().unwrap(), Operation::Release);
        assert!("burn".parse::<Operation>().is_err());
    }

    #[test]
    fn test_borsh_variant_index() {
        assert_eq!(borsh::to_vec(&Operation::Capture).unwrap(), vec![0]);
        assert_eq!(borsh::to_vec(&Operation::Release).unwrap(), vec![1]);
        assert!(borsh::from_slice::<Operation>(&[7]).is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Operation::Release).unwrap();
        assert_eq!(json, "\"release\"");
    }
}
