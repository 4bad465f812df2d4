use std::fmt;
use std::str::FromStr;
use bigdecimal::BigDecimal;
use bigdecimal::num_bigint::BigInt;
use crate::api::Coded;
use crate::errors::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CoinbaseCurrency {
    Btc,
    Ltc,
    Eth,
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    Jpy,
    Unrecognized(String),
}

impl CoinbaseCurrency {
    /**
     * Number of fractional digits in the smallest unit, e.g. satoshis for BTC.
     */
    pub fn decimals(&self) -> Option<u32> {
        match self {
            CoinbaseCurrency::Btc | CoinbaseCurrency::Ltc | CoinbaseCurrency::Eth => Some(8),
            CoinbaseCurrency::Usd
            | CoinbaseCurrency::Eur
            | CoinbaseCurrency::Gbp
            | CoinbaseCurrency::Cad
            | CoinbaseCurrency::Aud => Some(2),
            CoinbaseCurrency::Jpy => Some(0),
            CoinbaseCurrency::Unrecognized(_) => None,
        }
    }
}

impl Coded for CoinbaseCurrency {
    fn from_code(raw: &str) -> Option<Self> {
        match raw {
            "BTC" => Some(CoinbaseCurrency::Btc),
            "LTC" => Some(CoinbaseCurrency::Ltc),
            "ETH" => Some(CoinbaseCurrency::Eth),
            "USD" => Some(CoinbaseCurrency::Usd),
            "EUR" => Some(CoinbaseCurrency::Eur),
            "GBP" => Some(CoinbaseCurrency::Gbp),
            "CAD" => Some(CoinbaseCurrency::Cad),
            "AUD" => Some(CoinbaseCurrency::Aud),
            "JPY" => Some(CoinbaseCurrency::Jpy),
            _ => None,
        }
    }

    fn unrecognized(raw: String) -> Self {
        CoinbaseCurrency::Unrecognized(raw)
    }

    fn code(&self) -> &str {
        match self {
            CoinbaseCurrency::Btc => "BTC",
            CoinbaseCurrency::Ltc => "LTC",
            CoinbaseCurrency::Eth => "ETH",
            CoinbaseCurrency::Usd => "USD",
            CoinbaseCurrency::Eur => "EUR",
            CoinbaseCurrency::Gbp => "GBP",
            CoinbaseCurrency::Cad => "CAD",
            CoinbaseCurrency::Aud => "AUD",
            CoinbaseCurrency::Jpy => "JPY",
            CoinbaseCurrency::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for CoinbaseCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/**
 * An exact amount in one currency.
 *
 * Equality compares the decimal value, so `BTC 7.10000000` equals `BTC 7.1`,
 * while `Display` keeps the scale the amount was received with.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct CoinbaseMoney {
    pub amount: BigDecimal,
    pub currency: CoinbaseCurrency,
}

impl CoinbaseMoney {
    pub fn new(currency: CoinbaseCurrency, amount: BigDecimal) -> Self {
        CoinbaseMoney { amount, currency }
    }

    /**
     * Scales an integer count of minor units. `None` when the currency's precision is unknown.
     */
    pub fn from_cents(currency: CoinbaseCurrency, cents: i64) -> Option<Self> {
        let decimals = currency.decimals()?;
        Some(CoinbaseMoney {
            amount: BigDecimal::new(BigInt::from(cents), i64::from(decimals)),
            currency,
        })
    }

    pub fn scale(&self) -> i64 {
        let (_, scale) = self.amount.as_bigint_and_exponent();
        scale
    }
}

/**
 * Parses a plain decimal string. Exponents and bare leading or trailing points are rejected.
 */
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty()
        || digits.starts_with('.')
        || digits.ends_with('.')
        || !digits.chars().all(|c| c.is_ascii_digit() || c == '.')
    {
        return None;
    }
    BigDecimal::from_str(raw).ok()
}

/**
 * Splits a compound `"CODE AMOUNT"` literal.
 */
pub fn split_compound(raw: &str) -> Option<(&str, &str)> {
    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(code), Some(amount), None) => Some((code, amount)),
        _ => None,
    }
}

impl FromStr for CoinbaseMoney {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || -> Error {
            ErrorKind::SchemaMismatch("$".to_owned(), format!("invalid money literal '{}'", s)).into()
        };
        let (code, amount) = split_compound(s).ok_or_else(invalid)?;
        let amount = parse_amount(amount).ok_or_else(invalid)?;
        let currency = CoinbaseCurrency::from_code(code)
            .unwrap_or_else(|| CoinbaseCurrency::unrecognized(code.to_owned()));
        Ok(CoinbaseMoney { amount, currency })
    }
}

impl fmt::Display for CoinbaseMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
