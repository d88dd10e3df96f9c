use common_constants::WAD_PRECISION;
use common_errors::{
    ERROR_INVALID_REWARD, ERROR_LIQUIDATION_INELIGIBLE, ERROR_LIQUIDATION_REPAY_ZERO,
    ERROR_SELF_LIQUIDATION,
};
use common_structs::{LiquidationResult, PriceMode};

use crate::{
    bad_debt, cache::Cache, exchange, helpers, hooks, ledger, oracle, storage, validation,
};

use super::account;

multiversx_sc::imports!();

/// Amounts one liquidation settles, all bounded by what the borrower and module hold.
pub struct LiquidationPlan<M: ManagedTypeApi> {
    pub repay_denom: EgldOrEsdtTokenIdentifier<M>,
    pub reward_denom: EgldOrEsdtTokenIdentifier<M>,
    pub u_token: TokenIdentifier<M>,
    /// Base units of `repay_denom` removed from the borrower's debt.
    pub repay: BigUint<M>,
    /// Collateral uTokens taken from the borrower.
    pub burn: BigUint<M>,
    /// Base units of `reward_denom` the burned uTokens are worth to the liquidator.
    pub reward: BigUint<M>,
}

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + exchange::ExchangeRateModule
    + oracle::OracleModule
    + hooks::HooksModule
    + account::PositionAccountModule
    + bad_debt::BadDebtModule
    + helpers::MathsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Reward base denom and collateral uToken selected by `reward`, which is either a base
    /// token (direct reward) or its uToken (reward paid in uTokens).
    ///
    /// # Returns
    /// - `(reward_denom, u_token, direct)`
    fn resolve_reward(
        &self,
        reward: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> (EgldOrEsdtTokenIdentifier, TokenIdentifier, bool) {
        if cache.is_u_token(reward) {
            let u_token = reward.clone().unwrap_esdt();
            let reward_denom = self.require_u_token_base(&u_token, cache);
            return (reward_denom, u_token, false);
        }

        require!(cache.try_get_token(reward).is_some(), ERROR_INVALID_REWARD);
        let u_token = self.require_u_token_id(reward, cache);

        (reward.clone(), u_token, true)
    }

    /// Computes the repay, burn and reward of one liquidation without changing state.
    ///
    /// **Process**:
    /// 1. Eligibility on spot prices only: borrowed value at or above the threshold.
    /// 2. Close factor from the spot position and the module params.
    /// 3. Candidate repay: the smallest of `max_repay`, the amount owed and the close
    ///    factor share of the borrowed value.
    /// 4. Liquidation amounts from the price ratio, the reward exchange rate and the
    ///    incentive, reduced by the direct liquidation fee on direct rewards.
    ///
    /// # Errors
    /// - `ERROR_LIQUIDATION_INELIGIBLE`: The borrower is healthy on spot prices.
    /// - `ERROR_MISSING_PRICE`: A borrow, the repay or the reward token has no spot price.
    fn get_liquidation_amounts(
        &self,
        borrower: &ManagedAddress,
        repay_denom: &EgldOrEsdtTokenIdentifier,
        reward_denom: &EgldOrEsdtTokenIdentifier,
        u_token: &TokenIdentifier,
        max_repay: Option<&BigUint>,
        direct: bool,
        cache: &mut Cache<Self>,
    ) -> LiquidationPlan<Self::Api> {
        let position = self.spot_position(borrower, true, cache);
        require!(position.is_liquidatable(), ERROR_LIQUIDATION_INELIGIBLE);

        let params = self.params().get();
        let close_factor = self.compute_close_factor(
            &position.borrowed_value,
            &position.collateral_value,
            &position.liquidation_threshold,
            &params.small_liquidation_size,
            &params.minimum_close_factor,
            &params.complete_liquidation_threshold,
        );

        let repay_token = self.get_registered_token(repay_denom, cache);
        let reward_token = self.get_registered_token(reward_denom, cache);
        let repay_price = self.require_token_price(&repay_token, PriceMode::Spot, cache);
        let reward_price = self.require_token_price(&reward_token, PriceMode::Spot, cache);

        let closable_value = self.mul_floor(&position.borrowed_value, &close_factor, WAD_PRECISION);
        let closable = self.tokens_for_value(&repay_token, &closable_value, &repay_price);

        let mut available_repay = self.min_amount(self.owed_amount(borrower, repay_denom), &closable);
        if let Some(limit) = max_repay {
            available_repay = self.min_amount(available_repay, limit);
        }

        let available_collateral = self.collateral_amount(borrower, u_token);
        let rate = self.exchange_rate(reward_denom, cache);
        let available_reward = if direct {
            self.available_liquidity(reward_denom, cache)
        } else {
            self.to_token_amount(&available_collateral, &rate)
        };

        let incentive = if direct {
            let kept = self.mul_floor(
                &reward_token.liquidation_incentive,
                &params.direct_liquidation_fee,
                WAD_PRECISION,
            );
            self.sub_or_zero(&reward_token.liquidation_incentive, &kept, WAD_PRECISION)
        } else {
            reward_token.liquidation_incentive.clone()
        };

        let price_ratio = self.liquidation_price_ratio(
            &repay_price,
            repay_token.exponent,
            &reward_price,
            reward_token.exponent,
        );

        let (repay, burn, reward) = self.compute_liquidation(
            &available_repay,
            &available_collateral,
            &available_reward,
            &price_ratio,
            &rate,
            &incentive,
        );

        LiquidationPlan {
            repay_denom: repay_denom.clone(),
            reward_denom: reward_denom.clone(),
            u_token: u_token.clone(),
            repay,
            burn,
            reward,
        }
    }

    /// Liquidation paid by the liquidator in the repay token.
    ///
    /// **Settlement**:
    /// 1. The repay reduces the borrower's debt; the unused payment is returned.
    /// 2. Direct reward: the burned uTokens are redeemed and the base tokens paid out.
    ///    uToken reward: the collateral uTokens themselves are paid out.
    /// 3. Bad debt is re-checked and bond hooks unbond down to the new collateral.
    ///
    /// # Returns
    /// - The settlement result and the unused part of the payment.
    ///
    /// # Errors
    /// - `ERROR_SELF_LIQUIDATION`: Liquidator and borrower are the same account.
    /// - `ERROR_LIQUIDATION_REPAY_ZERO`: The limits leave nothing to repay.
    fn process_liquidation(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        payment: &EgldOrEsdtTokenPayment,
        reward: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> (LiquidationResult<Self::Api>, BigUint) {
        require!(liquidator != borrower, ERROR_SELF_LIQUIDATION);
        self.require_amount_greater_than_zero(&payment.amount);

        let (reward_denom, u_token, direct) = self.resolve_reward(reward, cache);
        let plan = self.get_liquidation_amounts(
            borrower,
            &payment.token_identifier,
            &reward_denom,
            &u_token,
            Some(&payment.amount),
            direct,
            cache,
        );
        require!(plan.repay > 0u64, ERROR_LIQUIDATION_REPAY_ZERO);

        let repaid = self.decrease_borrow(borrower, &plan.repay_denom, &plan.repay);
        cache.settle();
        let refund = &payment.amount - &repaid;

        self.remove_collateral(borrower, &plan.u_token, &plan.burn);
        let reward_payment = if direct {
            self.burn_u_tokens(&plan.u_token, &plan.burn);
            EgldOrEsdtTokenPayment::new(plan.reward_denom.clone(), 0, plan.reward.clone())
        } else {
            EgldOrEsdtTokenPayment::new(
                EgldOrEsdtTokenIdentifier::esdt(plan.u_token.clone()),
                0,
                plan.burn.clone(),
            )
        };

        let result = LiquidationResult {
            repaid: EgldOrEsdtTokenPayment::new(plan.repay_denom.clone(), 0, repaid),
            collateral_liquidated: EsdtTokenPayment::new(plan.u_token.clone(), 0, plan.burn.clone()),
            reward: reward_payment,
        };

        self.finish_liquidation(liquidator, borrower, &plan.u_token, false, &result, cache);

        (result, refund)
    }

    /// Liquidation without payment: the liquidator takes over the repaid debt and the
    /// reward uTokens become the liquidator's collateral.
    ///
    /// Missing repay or reward denoms default to the borrower's largest borrow and
    /// largest collateral by spot value.
    ///
    /// # Errors
    /// - `ERROR_SELF_LIQUIDATION`: Liquidator and borrower are the same account.
    /// - `ERROR_LIQUIDATION_INELIGIBLE`: Nothing to repay or no collateral to seize.
    /// - `ERROR_LIQUIDATION_REPAY_ZERO`: The limits leave nothing to repay.
    /// - `ERROR_UNDERCOLLATERALIZED`: The liquidator ends above their borrow limit.
    fn process_leveraged_liquidation(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        opt_repay: Option<EgldOrEsdtTokenIdentifier>,
        opt_reward: Option<EgldOrEsdtTokenIdentifier>,
        max_repay: Option<BigUint>,
        cache: &mut Cache<Self>,
    ) -> LiquidationResult<Self::Api> {
        require!(liquidator != borrower, ERROR_SELF_LIQUIDATION);

        let repay_denom = match opt_repay {
            Some(denom) => denom,
            None => match self.largest_borrow(borrower, cache) {
                Some(denom) => denom,
                None => sc_panic!(ERROR_LIQUIDATION_INELIGIBLE),
            },
        };
        let (reward_denom, u_token) = match opt_reward {
            Some(reward) => {
                let (reward_denom, u_token, _) = self.resolve_reward(&reward, cache);
                (reward_denom, u_token)
            },
            None => match self.largest_collateral(borrower, cache) {
                Some(u_token) => (self.require_u_token_base(&u_token, cache), u_token),
                None => sc_panic!(ERROR_LIQUIDATION_INELIGIBLE),
            },
        };

        let plan = self.get_liquidation_amounts(
            borrower,
            &repay_denom,
            &reward_denom,
            &u_token,
            max_repay.as_ref(),
            false,
            cache,
        );
        require!(plan.repay > 0u64, ERROR_LIQUIDATION_REPAY_ZERO);

        let repaid = self.decrease_borrow(borrower, &plan.repay_denom, &plan.repay);
        self.increase_borrow(liquidator, &plan.repay_denom, &repaid);

        self.remove_collateral(borrower, &plan.u_token, &plan.burn);
        self.add_collateral(liquidator, &plan.u_token, &plan.burn);
        self.require_healthy(liquidator, cache);

        let result = LiquidationResult {
            repaid: EgldOrEsdtTokenPayment::new(plan.repay_denom.clone(), 0, repaid),
            collateral_liquidated: EsdtTokenPayment::new(plan.u_token.clone(), 0, plan.burn.clone()),
            reward: EgldOrEsdtTokenPayment::new(
                EgldOrEsdtTokenIdentifier::esdt(plan.u_token.clone()),
                0,
                plan.burn.clone(),
            ),
        };

        self.finish_liquidation(liquidator, borrower, &plan.u_token, true, &result, cache);

        result
    }

    fn finish_liquidation(
        &self,
        liquidator: &ManagedAddress,
        borrower: &ManagedAddress,
        u_token: &TokenIdentifier,
        leveraged: bool,
        result: &LiquidationResult<Self::Api>,
        cache: &mut Cache<Self>,
    ) {
        self.check_bad_debt(borrower, cache);
        self.force_unbond_to_collateral(borrower, u_token);

        self.liquidate_event(liquidator, borrower, leveraged, result);
    }
}
