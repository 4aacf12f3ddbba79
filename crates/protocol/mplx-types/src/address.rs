//! Account addresses and program-derived address derivation.
//!
//! An [`Address`] is a 32-byte ed25519 public key, written as base58.
//!
//! Program-derived addresses follow the Solana scheme:
//! ```text
//! candidate = H(seed_0 || ... || seed_n || bump || program_id || "ProgramDerivedAddress")
//! ```
//! with `bump` searched from 255 down to 0. The first candidate that is
//! *not* a valid curve point is the derived address, so no private key
//! can ever sign for it.

use std::fmt;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use curve25519_dalek::edwards::CompressedEdwardsY;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::error::AddressError;

/// Maximum length of a single seed in bytes
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds (excluding the bump)
pub const MAX_SEEDS: usize = 16;

/// Marker appended to every PDA hash input
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// A 32-byte account address.
///
/// Borsh encodes it as the raw 32 bytes.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, BorshSerialize, BorshDeserialize,
)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Create an address from raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes of the address.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Base58 form of the address.
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }

    /// Whether these bytes decompress to a point on the ed25519 curve.
    pub fn is_on_curve(&self) -> bool {
        CompressedEdwardsY(self.0).decompress().is_some()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

        if decoded.len() != 32 {
            return Err(AddressError::InvalidLength(decoded.len()));
        }

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_base58())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = <String as Deserialize>::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        } else {
            let bytes: Vec<u8> = <Vec<u8> as Deserialize>::deserialize(deserializer)?;
            if bytes.len() != 32 {
                return Err(de::Error::custom(format!(
                    "Address must be 32 bytes, got {}",
                    bytes.len()
                )));
            }
            let mut arr = [0u8; 32];
            arr.copy_from_slice(&bytes);
            Ok(Address(arr))
        }
    }
}

/// Compute a program address for an exact seed list (bump included).
///
/// # Errors
/// - `SeedTooLong` / `TooManySeeds` if the seed limits are exceeded
/// - `OnCurve` if the hash is a valid curve point
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<Address, AddressError> {
    if seeds.len() > MAX_SEEDS {
        return Err(AddressError::TooManySeeds {
            count: seeds.len(),
            max: MAX_SEEDS,
        });
    }

    let mut hasher = Sha256::new();
    for seed in seeds {
        if seed.len() > MAX_SEED_LEN {
            return Err(AddressError::SeedTooLong {
                len: seed.len(),
                max: MAX_SEED_LEN,
            });
        }
        hasher.update(seed);
    }
    hasher.update(program_id.0);
    hasher.update(PDA_MARKER);

    let candidate = Address(hasher.finalize().into());
    if candidate.is_on_curve() {
        return Err(AddressError::OnCurve);
    }

    Ok(candidate)
}

/// Find the canonical program-derived address and its bump seed.
///
/// Deterministic: the same seeds and program always yield the same
/// `(address, bump)` pair.
///
/// # Example
/// ```
/// use mplx_types::{find_program_address, Address};
///
/// let program = Address::new([7u8; 32]);
/// let (pda, bump) = find_program_address(&[b"recipe", &[1u8; 32]], &program).unwrap();
/// assert!(!pda.is_on_curve());
/// let (again, bump_again) = find_program_address(&[b"recipe", &[1u8; 32]], &program).unwrap();
/// assert_eq!((pda, bump), (again, bump_again));
/// ```
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<(Address, u8), AddressError> {
    // The bump occupies one seed slot
    if seeds.len() >= MAX_SEEDS {
        return Err(AddressError::TooManySeeds {
            count: seeds.len() + 1,
            max: MAX_SEEDS,
        });
    }

    for bump in (0..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut with_bump: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
        with_bump.extend_from_slice(seeds);
        with_bump.push(&bump_seed);

        match create_program_address(&with_bump, program_id) {
            Ok(address) => return Ok((address, bump)),
            Err(AddressError::OnCurve) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(AddressError::NoViableBump)
}
