//! Binary account layouts.
//!
//! Anchor accounts start with an 8-byte discriminator followed by
//! Borsh-encoded fields:
//!
//! ```text
//! [discriminator: 8 bytes]   # sha256("account:<Name>")[..8]
//! [fields...]                # borsh, declaration order
//! ```
//!
//! MPL-Core assets use a single key byte instead of a discriminator.
//!
//! Escrow layout (the asset comes first so it sits at offset 8):
//! ```text
//! asset | collection | authority | token | fee_location     # 5 x 32 bytes
//! name: string | uri: string
//! max: u64 | min: u64 | amount: u64
//! fee_amount: f64 | sol_fee_amount: f64
//! count: u64 | path: u16
//! last_operation: option<u8> | timestamp: i64 | bump: u8
//! ```

use borsh::{BorshDeserialize, BorshSerialize};
use mplx_types::{AssetV1, EscrowV1, RecipeV1, ASSET_V1_KEY, DISCRIMINATOR_LEN};
use sha2::{Digest, Sha256};

use crate::error::DecodeError;

/// Compute the Anchor discriminator for an account type name.
///
/// `sha256("account:" || name)[..8]`
pub fn account_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(b"account:");
    hasher.update(name.as_bytes());
    let hash: [u8; 32] = hasher.finalize().into();

    let mut disc = [0u8; DISCRIMINATOR_LEN];
    disc.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    disc
}

/// A typed account that can be read from and written to raw bytes.
///
/// The body is plain Borsh; implementors only name the type prefix.
pub trait AccountLayout: BorshSerialize + BorshDeserialize {
    /// Account type name (used for discriminators and error messages).
    const NAME: &'static str;

    /// Leading bytes identifying this account type, matchable with a
    /// memcmp filter at offset 0.
    fn type_prefix() -> Vec<u8>;

    /// Error for data whose prefix is not [`type_prefix`](Self::type_prefix).
    fn prefix_mismatch(_found: &[u8]) -> DecodeError {
        DecodeError::DiscriminatorMismatch(Self::NAME)
    }

    /// Decode from raw account data (including the type prefix).
    ///
    /// Trailing bytes after the known fields are ignored.
    fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let prefix = Self::type_prefix();
        if data.len() < prefix.len() {
            return Err(DecodeError::TooShort {
                needed: prefix.len(),
                remaining: data.len(),
            });
        }

        let (head, mut body) = data.split_at(prefix.len());
        if head != prefix.as_slice() {
            return Err(Self::prefix_mismatch(head));
        }

        Self::deserialize(&mut body).map_err(|e| DecodeError::Borsh {
            account: Self::NAME,
            message: e.to_string(),
        })
    }

    /// Encode to raw account data (including the type prefix).
    fn encode(&self) -> std::io::Result<Vec<u8>> {
        let mut data = Self::type_prefix();
        self.serialize(&mut data)?;
        Ok(data)
    }
}

// =============================================================================
// Layouts
// =============================================================================

impl AccountLayout for RecipeV1 {
    const NAME: &'static str = "RecipeV1";

    fn type_prefix() -> Vec<u8> {
        account_discriminator(Self::NAME).to_vec()
    }
}

impl AccountLayout for EscrowV1 {
    const NAME: &'static str = "EscrowV1";

    fn type_prefix() -> Vec<u8> {
        account_discriminator(Self::NAME).to_vec()
    }
}

impl AccountLayout for AssetV1 {
    const NAME: &'static str = "AssetV1";

    fn type_prefix() -> Vec<u8> {
        vec![ASSET_V1_KEY]
    }

    fn prefix_mismatch(found: &[u8]) -> DecodeError {
        DecodeError::KeyMismatch {
            expected: ASSET_V1_KEY,
            actual: found.first().copied().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mplx_types::{Address, Operation, UpdateAuthority, ESCROW_ASSET_OFFSET};

    fn escrow(asset: Address) -> EscrowV1 {
        EscrowV1 {
            asset,
            collection: Address::new([2u8; 32]),
            authority: Address::new([3u8; 32]),
            token: Address::new([4u8; 32]),
            fee_location: Address::new([5u8; 32]),
            name: "Escrow".to_string(),
            uri: "https://example.com/escrow.json".to_string(),
            max: 100,
            min: 1,
            amount: 10,
            fee_amount: 0.015,
            sol_fee_amount: 0.0015,
            count: 5,
            path: 1,
            last_operation: Some(Operation::Release),
            timestamp: 1_234_567_890,
            bump: 254,
        }
    }

    #[test]
    fn test_discriminator_is_stable_and_distinct() {
        assert_eq!(
            account_discriminator("EscrowV1"),
            account_discriminator("EscrowV1")
        );
        assert_ne!(
            account_discriminator("EscrowV1"),
            account_discriminator("RecipeV1")
        );
    }

    #[test]
    fn test_escrow_asset_at_fixed_offset() {
        let asset = Address::new([9u8; 32]);
        let data = escrow(asset).encode().unwrap();
        assert_eq!(
            &data[ESCROW_ASSET_OFFSET..ESCROW_ASSET_OFFSET + 32],
            asset.as_bytes()
        );
    }

    #[test]
    fn test_escrow_decodes_what_it_encodes() {
        let original = escrow(Address::new([1u8; 32]));
        let decoded = EscrowV1::decode(&original.encode().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_escrow_without_last_operation() {
        let mut original = escrow(Address::new([1u8; 32]));
        original.last_operation = None;
        let decoded = EscrowV1::decode(&original.encode().unwrap()).unwrap();
        assert_eq!(decoded.last_operation, None);
    }

    #[test]
    fn test_wrong_discriminator_rejected() {
        let data = escrow(Address::new([1u8; 32])).encode().unwrap();
        let result = RecipeV1::decode(&data);
        assert_eq!(result, Err(DecodeError::DiscriminatorMismatch("RecipeV1")));
    }

    #[test]
    fn test_truncated_data_rejected() {
        let data = escrow(Address::new([1u8; 32])).encode().unwrap();
        let result = EscrowV1::decode(&data[..40]);
        assert!(matches!(
            result,
            Err(DecodeError::Borsh {
                account: "EscrowV1",
                ..
            })
        ));

        let result = EscrowV1::decode(&data[..4]);
        assert_eq!(
            result,
            Err(DecodeError::TooShort {
                needed: 8,
                remaining: 4
            })
        );
    }

    #[test]
    fn test_asset_owner_follows_key() {
        let asset = AssetV1 {
            owner: Address::new([8u8; 32]),
            update_authority: UpdateAuthority::Collection(Address::new([2u8; 32])),
            name: "Hybrid #1".to_string(),
            uri: "https://example.com/1.json".to_string(),
        };
        let data = asset.encode().unwrap();
        assert_eq!(data[0], ASSET_V1_KEY);
        assert_eq!(&data[1..33], asset.owner.as_bytes());
        assert_eq!(AssetV1::decode(&data).unwrap(), asset);
    }

    #[test]
    fn test_asset_wrong_key() {
        let result = AssetV1::decode(&[7u8; 40]);
        assert_eq!(
            result,
            Err(DecodeError::KeyMismatch {
                expected: 1,
                actual: 7
            })
        );
    }

    #[test]
    fn test_escrow_option_and_enum_bytes() {
        let mut account = escrow(Address::new([1u8; 32]));
        let timestamp_and_bump = 8 + 1;

        let data = account.encode().unwrap();
        let tail = data.len() - timestamp_and_bump;
        // Some(Release)
        assert_eq!(&data[tail - 2..tail], &[1, 1]);

        account.last_operation = None;
        let data = account.encode().unwrap();
        let tail = data.len() - timestamp_and_bump;
        assert_eq!(data[tail - 1], 0);
    }

    #[test]
    fn test_bad_option_tag_rejected() {
        let mut data = escrow(Address::new([1u8; 32])).encode().unwrap();
        let tag_at = data.len() - (8 + 1) - 2;
        data[tag_at] = 5;

        let err = EscrowV1::decode(&data).unwrap_err();
        assert!(matches!(err, DecodeError::Borsh { account: "EscrowV1", .. }));
    }

    #[test]
    fn test_asset_ignores_trailing_plugins() {
        let asset = AssetV1 {
            owner: Address::new([8u8; 32]),
            update_authority: UpdateAuthority::None,
            name: "Hybrid #2".to_string(),
            uri: "https://example.com/2.json".to_string(),
        };
        let mut data = asset.encode().unwrap();
        data.extend_from_slice(&[0, 0, 0, 0, 9, 9]);

        assert_eq!(AssetV1::decode(&data).unwrap(), asset);
    }
}
