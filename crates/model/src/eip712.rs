//! Typed structured data hashing primitives as defined by EIP-712.
//!
//! https://eips.ethereum.org/EIPS/eip-712

use alloy_primitives::{Address, B256, U256, keccak256};

/// A single member of a struct type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub ty: &'static str,
}

impl Field {
    pub const fn new(ty: &'static str, name: &'static str) -> Self {
        Self { name, ty }
    }
}

/// Static description of a struct type whose members are all atomic types,
/// i.e. the type references no other struct types.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl TypeDescriptor {
    /// Returns `encodeType` of the struct, for example
    /// `Mail(address from,address to,string contents)`.
    ///
    /// https://eips.ethereum.org/EIPS/eip-712#definition-of-encodetype
    pub fn encode_type(&self) -> String {
        let mut encoded = String::with_capacity(self.name.len() + 32 * self.fields.len());
        encoded.push_str(self.name);
        encoded.push('(');
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                encoded.push(',');
            }
            encoded.push_str(field.ty);
            encoded.push(' ');
            encoded.push_str(field.name);
        }
        encoded.push(')');
        encoded
    }

    /// Returns `typeHash`, the keccak256 hash of [`Self::encode_type`].
    pub fn type_hash(&self) -> B256 {
        keccak256(self.encode_type())
    }

    /// Size in bytes of the buffer that gets hashed by `hashStruct`: the type
    /// hash followed by one 32 byte word per field.
    pub const fn hash_data_len(&self) -> usize {
        32 * (1 + self.fields.len())
    }
}

/// A value that is encoded as exactly one 32 byte word by `encodeData`.
pub trait Eip712Word {
    fn to_word(&self) -> [u8; 32];
}

impl Eip712Word for Address {
    fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(self.as_slice());
        word
    }
}

impl Eip712Word for U256 {
    fn to_word(&self) -> [u8; 32] {
        self.to_be_bytes()
    }
}

impl Eip712Word for u32 {
    fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[28..].copy_from_slice(&self.to_be_bytes());
        word
    }
}

impl Eip712Word for u8 {
    fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[31] = *self;
        word
    }
}

impl Eip712Word for B256 {
    fn to_word(&self) -> [u8; 32] {
        self.0
    }
}

impl Eip712Word for bool {
    fn to_word(&self) -> [u8; 32] {
        u8::from(*self).to_word()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, hex_literal::hex};

    const MAIL: TypeDescriptor = TypeDescriptor {
        name: "Mail",
        fields: &[
            Field::new("address", "from"),
            Field::new("address", "to"),
            Field::new("string", "contents"),
        ],
    };

    #[test]
    fn encodes_type_signature() {
        assert_eq!(
            MAIL.encode_type(),
            "Mail(address from,address to,string contents)"
        );
        assert_eq!(MAIL.hash_data_len(), 128);
    }

    const CANCELLATION: TypeDescriptor = TypeDescriptor {
        name: "OrderCancellation",
        fields: &[Field::new("bytes", "orderUid")],
    };

    #[test]
    fn hashes_type_signature() {
        // keccak256("OrderCancellation(bytes orderUid)")
        assert_eq!(
            CANCELLATION.encode_type(),
            "OrderCancellation(bytes orderUid)"
        );
        assert_eq!(
            CANCELLATION.type_hash().0,
            hex!("7b41b3a6e2b3cae020a3b2f9cdc997e0d420643957e7fea81747e984e47c88ec"),
        );
    }

    #[test]
    fn empty_struct_type() {
        const EMPTY: TypeDescriptor = TypeDescriptor {
            name: "Empty",
            fields: &[],
        };
        assert_eq!(EMPTY.encode_type(), "Empty()");
        assert_eq!(EMPTY.hash_data_len(), 32);
    }

    #[test]
    fn address_is_left_padded() {
        let address = Address::repeat_byte(0x42);
        let word = address.to_word();
        assert_eq!(word[..12], [0u8; 12]);
        assert_eq!(word[12..], [0x42; 20]);
    }

    #[test]
    fn integers_are_big_endian() {
        assert_eq!(
            0x01020304_u32.to_word(),
            hex!("0000000000000000000000000000000000000000000000000000000001020304"),
        );
        assert_eq!(
            U256::from(0x0102_u64).to_word(),
            hex!("0000000000000000000000000000000000000000000000000000000000000102"),
        );
        assert_eq!(U256::MAX.to_word(), [0xff; 32]);
        assert_eq!(7_u8.to_word()[31], 7);
    }

    #[test]
    fn booleans() {
        assert_eq!(false.to_word(), [0u8; 32]);
        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(true.to_word(), one);
    }
}
