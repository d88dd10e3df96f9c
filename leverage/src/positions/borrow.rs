use common_errors::{ERROR_LENDING_POOL_INSUFFICIENT, ERROR_MAX_BORROW_ZERO};

use crate::{cache::Cache, exchange, hooks, ledger, limits, oracle, storage, validation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionBorrowModule:
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
    /// Opens or grows a borrow of `base_denom`.
    ///
    /// **Security checks**:
    /// - The token must be borrowable and the protected supply stays untouched.
    /// - The conservative position must fit under the borrow limit afterwards.
    /// - Market utilization and collateral liquidity limits hold after the payout.
    ///
    /// # Errors
    /// - `ERROR_BORROW_NOT_ENABLED`: Borrowing is disabled or the token is blacklisted.
    /// - `ERROR_LENDING_POOL_INSUFFICIENT`: Liquidity does not cover the borrow.
    /// - `ERROR_UNDERCOLLATERALIZED`: The new borrow exceeds the borrow limit.
    fn process_borrow(
        &self,
        borrower: &ManagedAddress,
        base_denom: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        cache: &mut Cache<Self>,
    ) -> EgldOrEsdtTokenPayment {
        self.require_amount_greater_than_zero(amount);
        let token = self.get_registered_token(base_denom, cache);
        self.validate_borrow_token(&token);

        let liquidity = self.available_liquidity(base_denom, cache);
        let protected = self.protected_supply(base_denom).get();
        require!(
            liquidity >= protected && &(&liquidity - &protected) >= amount,
            ERROR_LENDING_POOL_INSUFFICIENT
        );

        self.increase_borrow(borrower, base_denom, amount);

        let borrowed = EgldOrEsdtTokenPayment::new(base_denom.clone(), 0, amount.clone());
        cache.unsettled = Some(borrowed.clone());
        self.require_healthy(borrower, cache);
        self.check_supply_utilization(base_denom, &token, cache);
        self.check_collateral_liquidity(base_denom, &token, cache);
        cache.settle();

        self.borrow_event(borrower, &borrowed);

        borrowed
    }

    /// Borrows the largest amount the position and the market allow.
    ///
    /// # Errors
    /// - `ERROR_MAX_BORROW_ZERO`: Nothing can be borrowed.
    fn process_max_borrow(
        &self,
        borrower: &ManagedAddress,
        base_denom: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> EgldOrEsdtTokenPayment {
        let amount = self.max_borrow_amount(borrower, base_denom, cache);
        require!(amount > 0u64, ERROR_MAX_BORROW_ZERO);

        self.process_borrow(borrower, base_denom, &amount, cache)
    }
}
