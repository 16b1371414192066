use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Blackjack payout multiplier as a ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    pub const SIX_TO_FIVE: Self = Self {
        numerator: 6,
        denominator: 5,
    };
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    pub fn new(numerator: u16, denominator: u16) -> Result<Self, Error> {
        if denominator == 0 {
            return Err(Error::InvalidPayout(
                "denominator cannot be zero".to_string(),
            ));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Winnings for `bet`, truncated toward zero. `None` if the result does
    /// not fit in an `i64`.
    pub fn calculate_payout(&self, bet: i64) -> Option<i64> {
        let payout = i128::from(bet)
            .checked_mul(i128::from(self.numerator))?
            .checked_div(i128::from(self.denominator))?;
        i64::try_from(payout).ok()
    }

    fn reduced(numerator: u32, denominator: u32) -> Result<Self, Error> {
        let g = gcd(numerator, denominator).max(1);
        let (n, d) = (numerator / g, denominator / g);
        let n = u16::try_from(n).map_err(|_| Error::InvalidPayout(format!("{n}/{d}")))?;
        let d = u16::try_from(d).map_err(|_| Error::InvalidPayout(format!("{n}/{d}")))?;
        Self::new(n, d)
    }
}

impl Default for PayoutRatio {
    fn default() -> Self {
        Self::THREE_TO_TWO
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Accepts `"N:D"` ratios (`"3:2"`) or decimal multipliers (`"1.5"`).
impl FromStr for PayoutRatio {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || Error::InvalidPayout(s.to_string());

        // Integer parsing would otherwise accept a sign on either part.
        if s.contains(['+', '-']) {
            return Err(invalid());
        }

        if let Some((num, den)) = s.split_once(':') {
            let num: u16 = num.trim().parse().map_err(|_| invalid())?;
            let den: u16 = den.trim().parse().map_err(|_| invalid())?;
            return Self::new(num, den);
        }

        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if frac.len() > 4 || (whole.is_empty() && frac.is_empty()) {
            return Err(invalid());
        }
        let whole: u32 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac_value: u32 = if frac.is_empty() {
            0
        } else {
            frac.parse().map_err(|_| invalid())?
        };
        let denominator = 10u32.pow(frac.len() as u32);
        let numerator = whole
            .checked_mul(denominator)
            .and_then(|n| n.checked_add(frac_value))
            .ok_or_else(invalid)?;
        Self::reduced(numerator, denominator)
    }
}

impl TryFrom<String> for PayoutRatio {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayoutRatio> for String {
    fn from(ratio: PayoutRatio) -> Self {
        ratio.to_string()
    }
}

impl fmt::Display for PayoutRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}
