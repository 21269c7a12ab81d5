//! Two-decimal efficiency ratios.

/// Ratio of successful actions to all actions, rounded to two decimals.
///
/// Stored as whole hundredths so two computations from the same counters
/// always compare equal. Serialized as a plain decimal number (`0.75`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "f64", from = "f64"))]
pub struct Effectiveness(u32);

impl Effectiveness {
    pub const ZERO: Self = Self(0);

    /// Computes `numerator / denominator` as a float and rounds it to two
    /// decimals.
    ///
    /// Rounding looks at the exact binary value of the quotient, so
    /// `1 / 40` (stored as 0.025000000000000001) becomes 0.03 while `1 / 8`
    /// (exactly 0.125) ties to even and becomes 0.12.
    ///
    /// A zero denominator yields exactly [`Effectiveness::ZERO`].
    pub fn ratio(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        Self(round_hundredths(numerator as f64 / denominator as f64))
    }

    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub const fn hundredths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl From<Effectiveness> for f64 {
    fn from(value: Effectiveness) -> Self {
        value.as_f64()
    }
}

impl From<f64> for Effectiveness {
    fn from(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }
        Self(round_hundredths(value))
    }
}

/// Rounds a finite, non-negative float to whole hundredths, half to even,
/// using the exact value of its binary representation.
fn round_hundredths(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1 << 52) - 1);
    // value == mantissa * 2^exponent
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };

    let scaled = u128::from(mantissa) * 100;
    if exponent >= 0 {
        let shifted = scaled.checked_shl(exponent as u32).unwrap_or(u128::MAX);
        return u32::try_from(shifted).unwrap_or(u32::MAX);
    }
    let shift = exponent.unsigned_abs();
    if shift >= 128 {
        return 0;
    }
    let quotient = scaled >> shift;
    let remainder = scaled & ((1u128 << shift) - 1);
    let half = 1u128 << (shift - 1);
    let rounded = if remainder > half || (remainder == half && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    };
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

impl core::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_plain_decimal() {
        assert_eq!(serde_json::to_string(&Effectiveness::ratio(3, 4)).unwrap(), "0.75");
        assert_eq!(serde_json::to_string(&Effectiveness::ZERO).unwrap(), "0.0");
        let parsed: Effectiveness = serde_json::from_str("0.29").unwrap();
        assert_eq!(parsed.hundredths(), 29);
        let negative: Effectiveness = serde_json::from_str("-1.5").unwrap();
        assert_eq!(negative, Effectiveness::ZERO);
    }
}
