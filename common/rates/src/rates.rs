#![no_std]
use common_constants::{RAY_PRECISION, SECONDS_PER_YEAR, WAD_PRECISION};
use common_structs::Token;

multiversx_sc::imports!();

/// The InterestRates module holds the kinked borrow curve, the supply rate derived from it,
/// and the per-epoch growth applied to a market's interest scalar.
///
/// **Scope**: Pure functions of token parameters and market aggregates. Nothing here reads
/// storage, so the same code serves accrual, queries and tests.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Share of supplied tokens currently lent out.
    ///
    /// **Formula**: `borrowed / (liquidity + borrowed)`, capped at 1.
    /// No borrows means zero utilization. Borrows with no liquidity means full utilization.
    ///
    /// # Arguments
    /// - `total_borrowed`: Outstanding borrows of the market, interest included.
    /// - `liquidity`: Module balance not held as reserves.
    ///
    /// # Returns
    /// - WAD based ratio in `[0, 1]`.
    fn supply_utilization(
        &self,
        total_borrowed: &BigUint,
        liquidity: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if total_borrowed == &BigUint::zero() {
            return self.wad_zero();
        }

        let total_supplied = total_borrowed + liquidity;
        let utilization = self.div_floor(
            &self.to_decimal(total_borrowed.clone(), 0),
            &self.to_decimal(total_supplied, 0),
            WAD_PRECISION,
        );

        self.get_min(utilization, self.wad())
    }

    /// Annual borrow rate for a market at the given utilization.
    ///
    /// **Formula**: two segment interpolation.
    /// - `utilization <= kink`: from `(0, base_borrow_rate)` to `(kink, kink_borrow_rate)`.
    /// - `utilization > kink`: from `(kink, kink_borrow_rate)` to `(1, max_borrow_rate)`.
    ///
    /// Blacklisted tokens stop accruing interest and report a zero rate.
    fn borrow_rate(
        &self,
        token: &Token<Self::Api>,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if token.is_blacklisted() {
            return self.wad_zero();
        }

        let one = self.wad();
        if utilization >= &one {
            return token.max_borrow_rate.rescale(WAD_PRECISION);
        }

        if utilization > &token.kink_utilization {
            return self.interpolate(
                utilization,
                &token.kink_utilization,
                &token.kink_borrow_rate,
                &one,
                &token.max_borrow_rate,
            );
        }

        self.interpolate(
            utilization,
            &self.wad_zero(),
            &token.base_borrow_rate,
            &token.kink_utilization,
            &token.kink_borrow_rate,
        )
    }

    /// Annual rate earned by suppliers.
    ///
    /// **Formula**: `borrow_rate * utilization * (1 - reserve_factor)`.
    fn supply_rate(
        &self,
        token: &Token<Self::Api>,
        utilization: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let suppliers_share = self.sub_or_zero(&self.wad(), &token.reserve_factor, WAD_PRECISION);
        let gross = self.mul_floor(borrow_rate, utilization, WAD_PRECISION);

        self.mul_floor(&gross, &suppliers_share, WAD_PRECISION)
    }

    /// Linear growth of the interest scalar over an accrual epoch.
    ///
    /// **Formula**: `annual_rate * elapsed_seconds / SECONDS_PER_YEAR`, RAY based.
    fn accrual_growth(
        &self,
        annual_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        elapsed_seconds: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let rate = annual_rate.rescale(RAY_PRECISION);
        let numerator = rate.into_raw_units() * &BigUint::from(elapsed_seconds);

        self.to_decimal_ray(numerator / BigUint::from(SECONDS_PER_YEAR))
    }

    /// New interest scalar after one epoch: `scalar * (1 + growth)`.
    ///
    /// Rounded half up at RAY precision, which keeps the scalar non-decreasing.
    fn grow_interest_scalar(
        &self,
        scalar: &ManagedDecimal<Self::Api, NumDecimals>,
        growth: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let factor = self.ray() + growth.rescale(RAY_PRECISION);

        self.mul_half_up(scalar, &factor, RAY_PRECISION)
    }
}
