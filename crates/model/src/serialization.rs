use {
    alloy_primitives::U256,
    serde::{Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
    std::fmt,
};

/// Serializes a [`U256`] as a decimal string and deserializes it from either a
/// decimal or a `0x` prefixed hex string.
pub struct HexOrDecimalU256;

impl SerializeAs<U256> for HexOrDecimalU256 {
    fn serialize_as<S: Serializer>(source: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&source.to_string())
    }
}

impl<'de> DeserializeAs<'de, U256> for HexOrDecimalU256 {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = U256;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a u256 encoded either as 0x hex prefixed or decimal encoded string"
                )
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let trimmed = s.trim();
                let (digits, radix) = match trimmed.strip_prefix("0x") {
                    Some(hex) => (hex, 16),
                    None => (trimmed, 10),
                };
                if digits.is_empty() {
                    return Err(E::custom(format!("{s:?} contains no digits")));
                }
                U256::from_str_radix(digits, radix).map_err(|err| {
                    E::custom(format!("failed to decode {s:?} as base {radix} u256: {err}"))
                })
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
