use super::payment::PaymentScheme;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitOr, BitOrAssign, Sub};

/// Represents an account balance with fixed-point precision.
///
/// This is a wrapper around `rust_decimal::Decimal`. There is no floor at zero:
/// an approved debit larger than the balance leaves it negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true when the balance is at least `amount`.
    pub fn covers(&self, amount: Decimal) -> bool {
        self.0 >= amount
    }

    /// Subtracts `amount`, or returns `None` if the result leaves the `Decimal` range.
    pub fn checked_sub(&self, amount: Decimal) -> Option<Self> {
        self.0.checked_sub(amount).map(Self)
    }
}

impl Sub<Decimal> for Balance {
    type Output = Self;
    fn sub(self, rhs: Decimal) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
pub enum AccountStatus {
    #[default]
    Live,
    Disabled,
    InboundPaymentsOnly,
}

/// Bit-flag set of the schemes an account may be debited through.
///
/// Membership is a bitwise test, so an account allowing Bacs and Chaps
/// satisfies a Bacs check on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllowedPaymentSchemes(u8);

impl AllowedPaymentSchemes {
    pub const NONE: Self = Self(0);
    pub const FASTER_PAYMENTS: Self = Self(1 << 0);
    pub const BACS: Self = Self(1 << 1);
    pub const CHAPS: Self = Self(1 << 2);
    pub const ALL: Self = Self(Self::BACS.0 | Self::FASTER_PAYMENTS.0 | Self::CHAPS.0);

    /// Builds a set from a raw bitmask. Returns `None` if any bit outside
    /// the known schemes is set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        (bits & !Self::ALL.0 == 0).then_some(Self(bits))
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn allows(&self, scheme: PaymentScheme) -> bool {
        self.contains(scheme.into())
    }

    /// Schemes in the set, in declaration order.
    pub fn schemes(&self) -> impl Iterator<Item = PaymentScheme> + '_ {
        PaymentScheme::ALL
            .into_iter()
            .filter(move |scheme| self.allows(*scheme))
    }
}

impl From<PaymentScheme> for AllowedPaymentSchemes {
    fn from(scheme: PaymentScheme) -> Self {
        match scheme {
            PaymentScheme::Bacs => Self::BACS,
            PaymentScheme::FasterPayments => Self::FASTER_PAYMENTS,
            PaymentScheme::Chaps => Self::CHAPS,
        }
    }
}

impl BitOr for AllowedPaymentSchemes {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AllowedPaymentSchemes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for AllowedPaymentSchemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.schemes().map(PaymentScheme::name).collect();
        f.write_str(&names.join("|"))
    }
}

// Written as `Bacs|Chaps`. Reads either that form or the raw bitmask, as a
// number or a string of digits.
impl Serialize for AllowedPaymentSchemes {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct AllowedPaymentSchemesVisitor;

impl AllowedPaymentSchemesVisitor {
    fn from_mask<E: de::Error>(mask: u64) -> std::result::Result<AllowedPaymentSchemes, E> {
        u8::try_from(mask)
            .ok()
            .and_then(AllowedPaymentSchemes::from_bits)
            .ok_or_else(|| E::custom(format!("unknown payment scheme bits in {}", mask)))
    }
}

impl<'de> Visitor<'de> for AllowedPaymentSchemesVisitor {
    type Value = AllowedPaymentSchemes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("payment scheme names separated by '|', or a scheme bitmask")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        Self::from_mask(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        let mask = u64::try_from(v)
            .map_err(|_| E::custom(format!("negative payment scheme bitmask {}", v)))?;
        Self::from_mask(mask)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        let raw = v.trim();
        if let Ok(mask) = raw.parse::<u64>() {
            return Self::from_mask(mask);
        }

        let mut allowed = AllowedPaymentSchemes::NONE;
        for name in raw.split('|').map(str::trim).filter(|name| !name.is_empty()) {
            let scheme = PaymentScheme::from_name(name)
                .ok_or_else(|| E::custom(format!("unknown payment scheme '{}'", name)))?;
            allowed |= AllowedPaymentSchemes::from(scheme);
        }
        Ok(allowed)
    }
}

impl<'de> Deserialize<'de> for AllowedPaymentSchemes {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AllowedPaymentSchemesVisitor)
    }
}

/// A bank account as held by an account store.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Account {
    /// The account number; may be empty.
    pub account_number: String,
    pub balance: Balance,
    pub status: AccountStatus,
    /// Schemes this account may be debited through.
    pub allowed_payment_schemes: AllowedPaymentSchemes,
}

impl Account {
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            ..Self::default()
        }
    }

    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.balance = Balance::new(balance);
        self
    }

    pub fn with_status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_allowed_schemes(mut self, allowed: AllowedPaymentSchemes) -> Self {
        self.allowed_payment_schemes = allowed;
        self
    }

    /// Subtracts `amount` from the balance. There is no floor at zero.
    ///
    /// Fails without touching the balance if the result is out of range.
    pub fn debit(&mut self, amount: Decimal) -> Result<()> {
        self.balance = self.balance.checked_sub(amount).ok_or_else(|| {
            PaymentError::Overflow(format!(
                "debiting {} from account '{}' overflows its balance",
                amount, self.account_number
            ))
        })?;
        Ok(())
    }
}
