use common_constants::{RAY_PRECISION, WAD_PRECISION};

multiversx_sc::imports!();

/// # Liquidation Math
///
/// Pure functions behind the liquidation engine. Nothing here reads storage, so the same
/// code serves liquidation endpoints, queries and tests.
///
/// ## Close Factor
/// - **Zero** while the borrowed value is below the liquidation threshold.
/// - **One** for positions at or below `small_liquidation_size`.
/// - Otherwise linear, from `minimum_close_factor` at the threshold up to 1 at
///   `threshold + complete_liquidation_threshold * (collateral - threshold)`.
///
/// ## Liquidation Amounts
/// - `max_reward = repay * price_ratio * (1 + incentive)`
/// - `max_collateral = max_reward / exchange_rate`
/// - All outputs are scaled by the most restrictive of the collateral and reward limits.
/// - Repay and burn round up, the reward is derived from the rounded burn and rounds down.
#[multiversx_sc::module]
pub trait MathsModule: common_math::SharedMathModule {
    /// Largest fraction of a borrower's debt one liquidation may repay.
    ///
    /// # Arguments
    /// - `borrowed_value`: Spot USD value of all borrows.
    /// - `collateral_value`: Spot USD value of all collateral.
    /// - `liquidation_threshold`: Spot liquidation threshold of the account.
    /// - `small_liquidation_size`: USD size at or below which full liquidation is allowed.
    /// - `minimum_close_factor`: Close factor right at the threshold.
    /// - `complete_liquidation_threshold`: Fraction of the threshold to collateral gap at
    ///   which the close factor reaches 1.
    ///
    /// # Returns
    /// - WAD based close factor in `[0, 1]`.
    fn compute_close_factor(
        &self,
        borrowed_value: &ManagedDecimal<Self::Api, NumDecimals>,
        collateral_value: &ManagedDecimal<Self::Api, NumDecimals>,
        liquidation_threshold: &ManagedDecimal<Self::Api, NumDecimals>,
        small_liquidation_size: &ManagedDecimal<Self::Api, NumDecimals>,
        minimum_close_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        complete_liquidation_threshold: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if borrowed_value < liquidation_threshold {
            return self.wad_zero();
        }

        let one = self.wad();
        if borrowed_value <= small_liquidation_size {
            return one;
        }

        let gap = self.sub_or_zero(collateral_value, liquidation_threshold, WAD_PRECISION);
        let full_at = liquidation_threshold.rescale(WAD_PRECISION)
            + self.mul_floor(&gap, complete_liquidation_threshold, WAD_PRECISION);
        if &full_at <= liquidation_threshold {
            return self.get_min(minimum_close_factor.rescale(WAD_PRECISION), one);
        }
        if borrowed_value >= &full_at {
            return one;
        }

        let close_factor = self.interpolate(
            borrowed_value,
            liquidation_threshold,
            minimum_close_factor,
            &full_at,
            &one,
        );

        self.get_min(close_factor, one)
    }

    /// Reward base units paid per repaid base unit at equal USD value.
    ///
    /// Both prices are WAD based per whole token. The result is RAY based.
    fn liquidation_price_ratio(
        &self,
        repay_price: &ManagedDecimal<Self::Api, NumDecimals>,
        repay_exponent: u32,
        reward_price: &ManagedDecimal<Self::Api, NumDecimals>,
        reward_exponent: u32,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let reward_raw = reward_price.rescale(WAD_PRECISION).into_raw_units().clone();
        if reward_raw == 0u64 {
            return self.ray_zero();
        }

        let ten = BigUint::from(10u64);
        let numerator = repay_price.rescale(WAD_PRECISION).into_raw_units()
            * &ten.pow(reward_exponent)
            * &ten.pow(RAY_PRECISION as u32);
        let denominator = reward_raw * ten.pow(repay_exponent);

        self.to_decimal_ray(numerator / denominator)
    }

    /// Repay, collateral burn and reward amounts of one liquidation.
    ///
    /// # Arguments
    /// - `available_repay`: Largest repayment allowed by every other limit, base units.
    /// - `available_collateral`: Borrower's uTokens of the reward denom.
    /// - `available_reward`: Reward base units that can be paid out.
    /// - `price_ratio`: Reward base units per repay base unit, see `liquidation_price_ratio`.
    /// - `exchange_rate`: Reward denom uToken exchange rate.
    /// - `incentive`: Liquidation incentive, fee already applied.
    ///
    /// # Returns
    /// - `(repay, burn, reward)`, each at most its available input.
    fn compute_liquidation(
        &self,
        available_repay: &BigUint,
        available_collateral: &BigUint,
        available_reward: &BigUint,
        price_ratio: &ManagedDecimal<Self::Api, NumDecimals>,
        exchange_rate: &ManagedDecimal<Self::Api, NumDecimals>,
        incentive: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (BigUint, BigUint, BigUint) {
        let zero = (BigUint::zero(), BigUint::zero(), BigUint::zero());
        if exchange_rate == &self.wad_zero()
            || price_ratio == &self.ray_zero()
            || available_repay == &BigUint::zero()
        {
            return zero;
        }

        let repay = self.to_decimal(available_repay.clone(), 0);
        let bonus = self.ray() + incentive.rescale(RAY_PRECISION);
        let max_reward = self.mul_floor(
            &self.mul_floor(&repay, price_ratio, RAY_PRECISION),
            &bonus,
            RAY_PRECISION,
        );
        let max_collateral = self.div_floor(&max_reward, exchange_rate, RAY_PRECISION);
        if max_reward == self.ray_zero() || max_collateral == self.ray_zero() {
            return zero;
        }

        let mut ratio = self.ray();
        let collateral = self.to_decimal(available_collateral.clone(), 0).rescale(RAY_PRECISION);
        if max_collateral > collateral {
            ratio = self.get_min(
                ratio,
                self.div_floor(&collateral, &max_collateral, RAY_PRECISION),
            );
        }
        let reward = self.to_decimal(available_reward.clone(), 0).rescale(RAY_PRECISION);
        if max_reward > reward {
            ratio = self.get_min(ratio, self.div_floor(&reward, &max_reward, RAY_PRECISION));
        }

        let repay_amount = self.ceil_to_int(&self.mul_ceil(&repay, &ratio, RAY_PRECISION));
        let burn_amount =
            self.ceil_to_int(&self.mul_ceil(&max_collateral, &ratio, RAY_PRECISION));
        let burn_amount = self.min_amount(burn_amount, available_collateral);

        let reward_amount = self.floor_to_int(&self.mul_floor(
            &self.to_decimal(burn_amount.clone(), 0),
            exchange_rate,
            RAY_PRECISION,
        ));

        (
            self.min_amount(repay_amount, available_repay),
            burn_amount,
            self.min_amount(reward_amount, available_reward),
        )
    }

    fn min_amount(&self, amount: BigUint, cap: &BigUint) -> BigUint {
        if &amount > cap {
            cap.clone()
        } else {
            amount
        }
    }
}
