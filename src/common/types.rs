use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

use std::fmt;
use std::ops::{Add, Sub};

pub type OfferIdString = String;

/// Amount of the base currency in its smallest unit (satoshi). Signed so that
/// malformed requests carrying negative values can be represented and rejected.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct Coin(i64);

impl Coin {
    pub const ZERO: Coin = Coin(0);
    pub const SATOSHI: Coin = Coin(1);
    const SATOSHIS_PER_COIN: i64 = 100_000_000;

    pub const fn from_sat(value: i64) -> Self {
        Coin(value)
    }

    pub const fn to_sat(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Coin {
    type Output = Coin;

    fn add(self, rhs: Coin) -> Coin {
        Coin(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Coin {
    type Output = Coin;

    fn sub(self, rhs: Coin) -> Coin {
        Coin(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_coin = Self::SATOSHIS_PER_COIN as u64;
        write!(f, "{}{}.{:08} BTC", sign, abs / per_coin, abs % per_coin)
    }
}

/// Trade price in minor units of the counter currency.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Default)]
pub struct Price(i64);

impl Price {
    pub const fn from_minor_units(value: i64) -> Self {
        Price(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Price(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Debug)]
pub struct NodeAddress {
    pub host_name: String,
    pub port: u16,
}

impl NodeAddress {
    pub fn new(host_name: impl Into<String>, port: u16) -> Self {
        Self {
            host_name: host_name.into(),
            port,
        }
    }

    pub fn full_address(&self) -> String {
        format!("{}:{}", self.host_name, self.port)
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.full_address())
    }
}

/// Direction of the offer from the maker's point of view, in the base currency.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, EnumString, Display, IntoStaticStr,
)]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn mirror(self) -> Direction {
        match self {
            Direction::Buy => Direction::Sell,
            Direction::Sell => Direction::Buy,
        }
    }
}

// Payment rails an offer can settle the counter currency with.
// Trade limits and risk categories are left to the account layer.

#[derive(
    PartialEq, Eq, Hash, Clone, Debug, Serialize, Deserialize, EnumString, Display, IntoStaticStr,
)]
pub enum PaymentMethod {
    Uphold,
    MoneyBeam,
    PopMoney,
    Revolut,
    PerfectMoney,
    Sepa,
    SepaInstant,
    FasterPayments,
    NationalBank,
    JapanBank,
    AustraliaPayID,
    Swish,
    AliPay,
    WeChatPay,
    Zelle,
    InteracETransfer,
    USPostalMoneyOrder,
    CashDeposit,
    MoneyGram,
    WesternUnion,
    FaceToFace,
    HalCash,
    Blockchains,
    PromptPay,
    AdvancedCash,
    TransferWise,
    Paysera,
    Paxum,
    NEFT,
    RTGS,
    IMPS,
    UPI,
    Paytm,
    Pix,
    AmazonGiftCard,
    CashByMail,
    Strike,
    SWIFT,
    ACHTransfer,
    DomesticWireTransfer,
    CashApp,
    Venmo,
}
