//! Contains the order type and its EIP-712 struct hash.

use {
    crate::{
        DomainSeparator,
        eip712::{Eip712Word, Field, TypeDescriptor},
        hashed_eip712_message,
        order_uid::OrderUid,
        serialization::HexOrDecimalU256,
    },
    alloy_primitives::{Address, B256, U256, b256, keccak256},
    serde::{Deserialize, Serialize},
    serde_with::serde_as,
    strum::{AsRefStr, EnumString},
};

/// The order struct type. The field order is part of the hash and must not
/// change.
pub const ORDER_TYPE: TypeDescriptor = TypeDescriptor {
    name: "Order",
    fields: &[
        Field::new("address", "sellToken"),
        Field::new("address", "buyToken"),
        Field::new("address", "receiver"),
        Field::new("uint256", "sellAmount"),
        Field::new("uint256", "buyAmount"),
        Field::new("uint32", "validTo"),
        Field::new("bytes32", "appData"),
        Field::new("uint256", "feeAmount"),
        Field::new("uint8", "kind"),
        Field::new("bool", "partiallyFillable"),
    ],
};

const HASH_DATA_LEN: usize = ORDER_TYPE.hash_data_len();

/// The complete order data.
///
/// These are the exact fields that get hashed into the order digest.
#[serde_as]
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub sell_token: Address,
    pub buy_token: Address,
    pub receiver: Address,
    #[serde_as(as = "HexOrDecimalU256")]
    pub sell_amount: U256,
    #[serde_as(as = "HexOrDecimalU256")]
    pub buy_amount: U256,
    pub valid_to: u32,
    pub app_data: B256,
    #[serde_as(as = "HexOrDecimalU256")]
    pub fee_amount: U256,
    pub kind: OrderKind,
    pub partially_fillable: bool,
}

impl OrderData {
    // keccak256 of `ORDER_TYPE.encode_type()`
    pub const TYPE_HASH: B256 =
        b256!("3744b199e00cda8d3c6b584dda7e1f3bf01083405c1c001ad8183b5e805d7746");

    pub fn type_hash() -> B256 {
        Self::TYPE_HASH
    }

    /// Returns the value of hashStruct() over the order data as defined by
    /// EIP-712.
    ///
    /// https://eips.ethereum.org/EIPS/eip-712#definition-of-hashstruct
    pub fn hash_struct(&self) -> B256 {
        let words = [
            self.sell_token.to_word(),
            self.buy_token.to_word(),
            self.receiver.to_word(),
            self.sell_amount.to_word(),
            self.buy_amount.to_word(),
            self.valid_to.to_word(),
            self.app_data.to_word(),
            self.fee_amount.to_word(),
            self.kind.to_word(),
            self.partially_fillable.to_word(),
        ];

        let mut hash_data = [0u8; HASH_DATA_LEN];
        hash_data[0..32].copy_from_slice(Self::TYPE_HASH.as_slice());
        for (slot, word) in hash_data[32..].chunks_exact_mut(32).zip(words) {
            slot.copy_from_slice(&word);
        }
        keccak256(hash_data)
    }

    /// The EIP-712 message digest of the order for the given domain.
    pub fn signing_digest(&self, domain: &DomainSeparator) -> B256 {
        hashed_eip712_message(domain, &self.hash_struct())
    }

    /// The UID of the order placed by `owner`, keyed by the order's struct hash.
    pub fn uid(&self, owner: Address) -> OrderUid {
        OrderUid::from_parts(self.hash_struct(), owner, self.valid_to)
    }
}

#[derive(
    Eq, PartialEq, Clone, Copy, Debug, Default, Deserialize, Serialize, Hash, EnumString, AsRefStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    #[default]
    Sell,
    Buy,
}

impl OrderKind {
    /// The value the kind is encoded as in the `uint8 kind` field.
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Sell => 0,
            Self::Buy => 1,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Sell),
            1 => Some(Self::Buy),
            _ => None,
        }
    }
}

impl Eip712Word for OrderKind {
    fn to_word(&self) -> [u8; 32] {
        self.ordinal().to_word()
    }
}

#[derive(Clone, Default, Debug)]
pub struct OrderBuilder(OrderData);

impl OrderBuilder {
    pub fn with_sell_token(mut self, sell_token: Address) -> Self {
        self.0.sell_token = sell_token;
        self
    }

    pub fn with_buy_token(mut self, buy_token: Address) -> Self {
        self.0.buy_token = buy_token;
        self
    }

    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.0.receiver = receiver;
        self
    }

    pub fn with_sell_amount(mut self, sell_amount: U256) -> Self {
        self.0.sell_amount = sell_amount;
        self
    }

    pub fn with_buy_amount(mut self, buy_amount: U256) -> Self {
        self.0.buy_amount = buy_amount;
        self
    }

    pub fn with_valid_to(mut self, valid_to: u32) -> Self {
        self.0.valid_to = valid_to;
        self
    }

    pub fn with_app_data(mut self, app_data: B256) -> Self {
        self.0.app_data = app_data;
        self
    }

    pub fn with_fee_amount(mut self, fee_amount: U256) -> Self {
        self.0.fee_amount = fee_amount;
        self
    }

    pub fn with_kind(mut self, kind: OrderKind) -> Self {
        self.0.kind = kind;
        self
    }

    pub fn with_partially_fillable(mut self, partially_fillable: bool) -> Self {
        self.0.partially_fillable = partially_fillable;
        self
    }

    pub fn build(self) -> OrderData {
        self.0
    }
}
