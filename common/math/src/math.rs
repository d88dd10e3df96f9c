#![no_std]

use core::cmp::Ordering;

use common_constants::{RAY, RAY_PRECISION, WAD, WAD_PRECISION};

multiversx_sc::imports!();

/// Fixed point helpers shared by the rate model and the leverage contract.
///
/// Every operation names its rounding direction. Conversions that pay a user round down,
/// conversions that compute what a user owes round up. Only the interest scalar rounds
/// half up.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    /// `a * b` truncated at `precision`.
    fn mul_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();
        let scaled = BigUint::from(10u64).pow(precision as u32);

        self.to_decimal(product / scaled, precision)
    }

    /// `a * b` rounded away from zero at `precision`.
    fn mul_ceil(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();
        let scaled = BigUint::from(10u64).pow(precision as u32);

        self.to_decimal(self.div_ceil_raw(product, &scaled), precision)
    }

    /// `a / b` truncated at `precision`. `b` must be non-zero.
    fn div_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;

        self.to_decimal(numerator / scaled_b.into_raw_units(), precision)
    }

    /// `a / b` rounded away from zero at `precision`. `b` must be non-zero.
    fn div_ceil(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;

        self.to_decimal(
            self.div_ceil_raw(numerator, scaled_b.into_raw_units()),
            precision,
        )
    }

    fn div_ceil_raw(&self, numerator: BigUint, denominator: &BigUint) -> BigUint {
        let quotient = &numerator / denominator;
        if &quotient * denominator == numerator {
            quotient
        } else {
            quotient + 1u64
        }
    }

    /// Integer part of a decimal.
    fn floor_to_int(&self, value: &ManagedDecimal<Self::Api, NumDecimals>) -> BigUint {
        let factor = BigUint::from(10u64).pow(value.scale() as u32);
        value.into_raw_units() / &factor
    }

    /// Smallest integer not below the decimal.
    fn ceil_to_int(&self, value: &ManagedDecimal<Self::Api, NumDecimals>) -> BigUint {
        let factor = BigUint::from(10u64).pow(value.scale() as u32);
        self.div_ceil_raw(value.into_raw_units().clone(), &factor)
    }

    /// `a - b`, clamped at zero. Both operands are read at `precision`.
    fn sub_or_zero(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);
        if scaled_a <= scaled_b {
            return self.to_decimal(BigUint::zero(), precision);
        }

        scaled_a - scaled_b
    }

    /// Linear interpolation of `x` on the line through `(x_min, y_min)` and `(x_max, y_max)`.
    ///
    /// Exact at both endpoints. When the x bounds coincide the lower endpoint `y_min` is
    /// returned. Results that would be negative are clamped to zero. Output is WAD based.
    fn interpolate(
        &self,
        x: &ManagedDecimal<Self::Api, NumDecimals>,
        x_min: &ManagedDecimal<Self::Api, NumDecimals>,
        y_min: &ManagedDecimal<Self::Api, NumDecimals>,
        x_max: &ManagedDecimal<Self::Api, NumDecimals>,
        y_max: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let x = x.rescale(WAD_PRECISION);
        let mut x_lo = x_min.rescale(WAD_PRECISION);
        let mut y_lo = y_min.rescale(WAD_PRECISION);
        let mut x_hi = x_max.rescale(WAD_PRECISION);
        let mut y_hi = y_max.rescale(WAD_PRECISION);

        match x_hi.into_raw_units().cmp(x_lo.into_raw_units()) {
            Ordering::Equal => return y_lo,
            Ordering::Less => {
                core::mem::swap(&mut x_lo, &mut x_hi);
                core::mem::swap(&mut y_lo, &mut y_hi);
            },
            Ordering::Greater => {},
        }

        let span = x_hi.into_raw_units() - x_lo.into_raw_units();
        let rising = y_hi >= y_lo;
        let dy = if rising {
            y_hi.into_raw_units() - y_lo.into_raw_units()
        } else {
            y_lo.into_raw_units() - y_hi.into_raw_units()
        };
        let ahead = x >= x_lo;
        let dx = if ahead {
            x.into_raw_units() - x_lo.into_raw_units()
        } else {
            x_lo.into_raw_units() - x.into_raw_units()
        };

        let delta = self.to_decimal_wad(dx * dy / span);

        if rising == ahead {
            y_lo + delta
        } else {
            self.sub_or_zero(&y_lo, &delta, WAD_PRECISION)
        }
    }

    /// Reads an integer token amount as a decimal with `exponent` decimals, without rescaling.
    fn amount_to_decimal(
        &self,
        amount: &BigUint,
        exponent: u32,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(amount.clone(), exponent as usize)
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_ray(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn wad_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn ray_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(BigUint::zero())
    }

    fn ray(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn wad(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn get_min(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }

    fn get_max(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a > b {
            a
        } else {
            b
        }
    }
}
