use soroban_fixed_point_math::FixedPoint;

use crate::PERCENT_DENOMINATOR;

/// Whole percent value, 1% - 1, 100% - 100.
/// All conversions round towards zero.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Percent(u32);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const HUNDRED: Percent = Percent(100);

    pub const fn new(value: u32) -> Percent {
        Percent(value)
    }

    /// Returns inner value
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// Calculates `floor(amount * self / 100)`
    pub fn mul_int<T: Into<i128>>(self, amount: T) -> Option<i128> {
        let amount: i128 = amount.into();
        amount.fixed_mul_floor(i128::from(self.0), PERCENT_DENOMINATOR)
    }

    /// Calculates `floor(amount * 100 / self)`, e.g. the amount this percentage was taken from
    pub fn recip_mul_int<T: Into<i128>>(self, amount: T) -> Option<i128> {
        if self.0 == 0 {
            return None;
        }

        let amount: i128 = amount.into();
        amount.fixed_div_floor(i128::from(self.0), PERCENT_DENOMINATOR)
    }

    /// Calculates `floor(nom * 100 / denom)` as a plain integer
    pub fn ratio<N: Into<i128>, D: Into<i128>>(nom: N, denom: D) -> Option<i128> {
        let denom: i128 = denom.into();
        if denom == 0 {
            return None;
        }

        let nom: i128 = nom.into();
        nom.fixed_div_floor(denom, PERCENT_DENOMINATOR)
    }

    /// Returns true if self is zero
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}
