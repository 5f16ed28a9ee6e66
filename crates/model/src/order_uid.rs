//! The order UID: a 56 byte identifier made of the order digest, the owner
//! address and the order's expiry.

use {
    alloy_primitives::{Address, B256},
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
    std::{
        fmt::{self, Display},
        str::FromStr,
    },
};

/// Length of an encoded order UID: 32 bytes for the order digest, 20 for the
/// owner address and 4 for `validTo`.
pub const ORDER_UID_LENGTH: usize = 32 + 20 + 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum OrderUidError {
    #[error("uid buffer overflow: expected 56 bytes but target has {len}")]
    BufferOverflow { len: usize },
    #[error("invalid uid: expected 56 bytes but got {len}")]
    InvalidUid { len: usize },
}

/// Packs the order UID parameters into `target`.
///
/// Fails without writing anything if `target` is not exactly
/// [`ORDER_UID_LENGTH`] bytes long.
pub fn pack_order_uid_params(
    target: &mut [u8],
    order_digest: B256,
    owner: Address,
    valid_to: u32,
) -> Result<(), OrderUidError> {
    let len = target.len();
    let target: &mut [u8; ORDER_UID_LENGTH] = target
        .try_into()
        .map_err(|_| OrderUidError::BufferOverflow { len })?;
    write_parts(target, order_digest, owner, valid_to);
    Ok(())
}

/// Extracts the order digest, owner and `validTo` from an encoded order UID.
pub fn extract_order_uid_params(uid: &[u8]) -> Result<(B256, Address, u32), OrderUidError> {
    Ok(OrderUid::try_from(uid)?.parts())
}

fn write_parts(
    uid: &mut [u8; ORDER_UID_LENGTH],
    order_digest: B256,
    owner: Address,
    valid_to: u32,
) {
    uid[0..32].copy_from_slice(order_digest.as_slice());
    uid[32..52].copy_from_slice(owner.as_slice());
    uid[52..56].copy_from_slice(&valid_to.to_be_bytes());
}

// uid as 56 bytes: 32 for orderDigest, 20 for ownerAddress and 4 for validTo
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct OrderUid(pub [u8; ORDER_UID_LENGTH]);

impl OrderUid {
    /// Create a UID from its parts.
    pub fn from_parts(order_digest: B256, owner: Address, valid_to: u32) -> Self {
        let mut uid = [0; ORDER_UID_LENGTH];
        write_parts(&mut uid, order_digest, owner, valid_to);
        Self(uid)
    }

    /// Splits an order UID into its parts.
    pub fn parts(&self) -> (B256, Address, u32) {
        let [.., a, b, c, d] = self.0;
        (
            B256::from_slice(&self.0[0..32]),
            Address::from_slice(&self.0[32..52]),
            u32::from_be_bytes([a, b, c, d]),
        )
    }

    pub fn order_digest(&self) -> B256 {
        self.parts().0
    }

    pub fn owner(&self) -> Address {
        self.parts().1
    }

    pub fn valid_to(&self) -> u32 {
        self.parts().2
    }
}

impl Default for OrderUid {
    fn default() -> Self {
        Self([0u8; ORDER_UID_LENGTH])
    }
}

impl AsRef<[u8]> for OrderUid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for OrderUid {
    type Error = OrderUidError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let uid: [u8; ORDER_UID_LENGTH] = bytes
            .try_into()
            .map_err(|_| OrderUidError::InvalidUid { len: bytes.len() })?;
        Ok(Self(uid))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseOrderUidError {
    #[error("uid is not valid hex: {0}")]
    Hex(#[from] const_hex::FromHexError),
    #[error(transparent)]
    Uid(#[from] OrderUidError),
}

impl FromStr for OrderUid {
    type Err = ParseOrderUidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_without_prefix = s.strip_prefix("0x").unwrap_or(s);
        let bytes = const_hex::decode(s_without_prefix)?;
        Ok(Self::try_from(bytes.as_slice())?)
    }
}

impl Display for OrderUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&const_hex::encode_prefixed(self.0))
    }
}

impl fmt::Debug for OrderUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Serialize for OrderUid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

impl<'de> Deserialize<'de> for OrderUid {
    fn deserialize<D>(deserializer: D) -> Result<OrderUid, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor {}
        impl de::Visitor<'_> for Visitor {
            type Value = OrderUid;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an uid with orderDigest_owner_validTo")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if !s.starts_with("0x") {
                    return Err(de::Error::custom(format!(
                        "{s:?} can't be decoded as hex uid because it does not start with '0x'"
                    )));
                }
                s.parse().map_err(|err| {
                    de::Error::custom(format!("failed to decode {s:?} as hex uid: {err}"))
                })
            }
        }

        deserializer.deserialize_str(Visitor {})
    }
}
