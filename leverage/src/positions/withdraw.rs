use common_errors::{
    ERROR_BONDED_COLLATERAL, ERROR_INSUFFICIENT_COLLATERAL, ERROR_INVALID_PAYMENT,
    ERROR_LENDING_POOL_INSUFFICIENT, ERROR_MAX_WITHDRAW_ZERO,
};

use crate::{cache::Cache, exchange, hooks, ledger, limits, oracle, storage, validation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionWithdrawModule:
    storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + exchange::ExchangeRateModule
    + oracle::OracleModule
    + hooks::HooksModule
    + account::PositionAccountModule
    + limits::LimitsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Redeems `amount` uTokens for base tokens.
    ///
    /// uTokens sent with the call (`wallet`) are spent first, the rest comes out of the
    /// supplier's collateral. Wallet uTokens beyond `amount` are returned.
    ///
    /// **Process**:
    /// 1. Splits the request into wallet and collateral portions.
    /// 2. Checks collateral ownership and bonds for the collateral portion.
    /// 3. Burns the uTokens and checks liquidity, health and market limits.
    ///
    /// # Returns
    /// - `(redeemed, refund)`: Base tokens owed to the supplier and unused wallet uTokens.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: Collateral does not cover the collateral portion.
    /// - `ERROR_BONDED_COLLATERAL`: The collateral portion is bonded.
    /// - `ERROR_LENDING_POOL_INSUFFICIENT`: Not enough liquidity to pay out.
    /// - `ERROR_UNDERCOLLATERALIZED`: Removing collateral breaks the borrow limit.
    fn process_withdraw(
        &self,
        supplier: &ManagedAddress,
        u_token: &TokenIdentifier,
        amount: &BigUint,
        wallet: &BigUint,
        cache: &mut Cache<Self>,
    ) -> (EgldOrEsdtTokenPayment, BigUint) {
        self.require_amount_greater_than_zero(amount);
        let base_denom = self.require_u_token_base(u_token, cache);
        let token = self.get_registered_token(&base_denom, cache);

        let (from_wallet, refund) = if wallet > amount {
            (amount.clone(), wallet - amount)
        } else {
            (wallet.clone(), BigUint::zero())
        };
        let from_collateral = amount - &from_wallet;

        if from_collateral > 0u64 {
            require!(
                self.collateral_amount(supplier, u_token) >= from_collateral,
                ERROR_INSUFFICIENT_COLLATERAL
            );
            require!(
                self.unbonded_collateral(supplier, u_token) >= from_collateral,
                ERROR_BONDED_COLLATERAL
            );
        }

        let rate = self.exchange_rate(&base_denom, cache);
        let token_amount = self.to_token_amount(amount, &rate);
        require!(
            token_amount <= self.available_liquidity(&base_denom, cache),
            ERROR_LENDING_POOL_INSUFFICIENT
        );

        if from_collateral > 0u64 {
            self.remove_collateral(supplier, u_token, &from_collateral);
        }
        self.burn_u_tokens(u_token, amount);

        let redeemed = EgldOrEsdtTokenPayment::new(base_denom.clone(), 0, token_amount);

        // The balance still holds the payout until the endpoint transfers it
        cache.unsettled = Some(redeemed.clone());
        if from_collateral > 0u64 {
            self.require_healthy(supplier, cache);
        }
        self.check_supply_utilization(&base_denom, &token, cache);
        self.check_collateral_liquidity(&base_denom, &token, cache);
        cache.settle();

        let burned = EsdtTokenPayment::new(u_token.clone(), 0, amount.clone());
        self.withdraw_event(supplier, &burned, &redeemed, &from_collateral);

        (redeemed, refund)
    }

    /// Withdraws the largest amount allowed by the user and market limits.
    ///
    /// # Errors
    /// - `ERROR_MAX_WITHDRAW_ZERO`: Nothing can be withdrawn.
    fn process_max_withdraw(
        &self,
        supplier: &ManagedAddress,
        base_denom: &EgldOrEsdtTokenIdentifier,
        wallet: &BigUint,
        cache: &mut Cache<Self>,
    ) -> (EgldOrEsdtTokenPayment, BigUint) {
        let u_token = self.require_u_token_id(base_denom, cache);
        let amount = self.max_withdraw_amount(supplier, base_denom, wallet, cache);
        require!(amount > 0u64, ERROR_MAX_WITHDRAW_ZERO);

        self.process_withdraw(supplier, &u_token, &amount, wallet, cache)
    }

    /// Wallet portion of a withdraw: the optional uToken payment, which must match `u_token`.
    fn wallet_portion(&self, u_token: &TokenIdentifier) -> BigUint {
        match self.optional_u_token_payment() {
            Some(payment) => {
                require!(&payment.token_identifier == u_token, ERROR_INVALID_PAYMENT);
                payment.amount
            },
            None => BigUint::zero(),
        }
    }

    /// Releases unbonded collateral uTokens back to the borrower's wallet.
    ///
    /// # Errors
    /// - `ERROR_INSUFFICIENT_COLLATERAL`: The borrower holds less collateral.
    /// - `ERROR_BONDED_COLLATERAL`: The amount is bonded.
    /// - `ERROR_UNDERCOLLATERALIZED`: Removing collateral breaks the borrow limit.
    fn process_decollateralize(
        &self,
        borrower: &ManagedAddress,
        u_token: &TokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> EsdtTokenPayment {
        self.require_amount_greater_than_zero(amount);
        self.require_u_token_base(u_token, cache);

        require!(
            &self.collateral_amount(borrower, u_token) >= amount,
            ERROR_INSUFFICIENT_COLLATERAL
        );
        require!(
            &self.unbonded_collateral(borrower, u_token) >= amount,
            ERROR_BONDED_COLLATERAL
        );

        self.remove_collateral(borrower, u_token, amount);
        self.require_healthy(borrower, cache);

        let released = EsdtTokenPayment::new(u_token.clone(), 0, amount.clone());
        self.decollateralize_event(borrower, &released);

        released
    }
}
