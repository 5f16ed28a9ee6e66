//! Contains the order model: its EIP-712 struct hash and the binary order UID
//! derived from it.

pub mod eip712;
pub mod order;
pub mod order_uid;
pub mod serialization;

use {
    alloy_primitives::{Address, B256, U256, keccak256},
    eip712::Eip712Word,
    std::{fmt, str::FromStr, sync::LazyLock},
};

#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct DomainSeparator(pub [u8; 32]);

impl FromStr for DomainSeparator {
    type Err = const_hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = [0u8; 32];
        const_hex::decode_to_slice(s.strip_prefix("0x").unwrap_or(s), &mut value)?;
        Ok(Self(value))
    }
}

impl fmt::Debug for DomainSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&const_hex::encode(self.0))
    }
}

impl DomainSeparator {
    pub fn new(chain_id: u64, contract_address: Address) -> Self {
        /// The EIP-712 domain name used for computing the domain separator.
        static DOMAIN_NAME: LazyLock<B256> = LazyLock::new(|| keccak256(b"Gnosis Protocol"));

        /// The EIP-712 domain version used for computing the domain separator.
        static DOMAIN_VERSION: LazyLock<B256> = LazyLock::new(|| keccak256(b"v2"));

        /// The EIP-712 domain type used computing the domain separator.
        static DOMAIN_TYPE_HASH: LazyLock<B256> = LazyLock::new(|| {
            keccak256(
                b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)",
            )
        });

        let mut hash_data = [0u8; 160];
        hash_data[0..32].copy_from_slice(DOMAIN_TYPE_HASH.as_slice());
        hash_data[32..64].copy_from_slice(DOMAIN_NAME.as_slice());
        hash_data[64..96].copy_from_slice(DOMAIN_VERSION.as_slice());
        hash_data[96..128].copy_from_slice(&U256::from(chain_id).to_word());
        hash_data[128..160].copy_from_slice(&contract_address.to_word());
        Self(keccak256(hash_data).0)
    }
}

/// Returns the EIP-712 message digest `keccak256("\x19\x01" ‖ domainSeparator ‖
/// hashStruct(message))`.
pub fn hashed_eip712_message(domain_separator: &DomainSeparator, struct_hash: &B256) -> B256 {
    let mut message = [0u8; 66];
    message[0..2].copy_from_slice(&[0x19, 0x01]);
    message[2..34].copy_from_slice(&domain_separator.0);
    message[34..66].copy_from_slice(struct_hash.as_slice());
    keccak256(message)
}
