use common_errors::ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO;

use crate::{cache::Cache, exchange, hooks, ledger, limits, oracle, storage, validation};

use super::account;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionSupplyModule:
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
    /// Mints uTokens for a base token deposit at the current exchange rate, rounded down.
    /// The uTokens stay in the contract; the caller decides where they go.
    ///
    /// # Arguments
    /// - `supplier`: Account credited in the emitted event.
    /// - `payment`: Base token deposit, still unsettled in `cache`.
    ///
    /// # Errors
    /// - `ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO`: The deposit buys zero uTokens.
    /// - `ERROR_MAX_SUPPLY`: The market would exceed its max supply.
    fn process_supply(
        &self,
        supplier: &ManagedAddress,
        payment: &EgldOrEsdtTokenPayment,
        cache: &mut Cache<Self>,
    ) -> EsdtTokenPayment {
        let token = self.validate_supply_payment(payment, cache);
        let base_denom = &payment.token_identifier;
        let u_token = self.require_u_token_id(base_denom, cache);

        let rate = self.exchange_rate(base_denom, cache);
        let u_amount = self.to_u_token_amount(&payment.amount, &rate);
        require!(u_amount > 0u64, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        cache.settle();
        self.mint_u_tokens(&u_token, &u_amount);
        self.check_max_supply(base_denom, &token, cache);

        let minted = EsdtTokenPayment::new(u_token, 0, u_amount);
        self.supply_event(supplier, payment, &minted);

        minted
    }

    /// Moves uTokens held by the contract into the borrower's collateral.
    ///
    /// # Errors
    /// - `ERROR_NOT_UTOKEN`, `ERROR_BLACKLISTED`: The uToken can not be collateral.
    /// - `ERROR_MAX_COLLATERAL_SHARE`: Collateral would exceed its share of all collateral.
    /// - `ERROR_MIN_COLLATERAL_LIQUIDITY`: Liquidity would fall below the collateral minimum.
    fn process_collateralize(
        &self,
        borrower: &ManagedAddress,
        u_payment: &EsdtTokenPayment,
        cache: &mut Cache<Self>,
    ) {
        self.require_amount_greater_than_zero(&u_payment.amount);
        let (base_denom, token) =
            self.validate_collateral_u_token(&u_payment.token_identifier, cache);

        self.add_collateral(borrower, &u_payment.token_identifier, &u_payment.amount);

        self.check_collateral_share(&base_denom, &token, cache);
        self.check_collateral_liquidity(&base_denom, &token, cache);

        self.collateralize_event(borrower, u_payment);
    }

    /// Supply followed by collateralize of the minted uTokens, in one step.
    fn process_supply_collateral(
        &self,
        borrower: &ManagedAddress,
        payment: &EgldOrEsdtTokenPayment,
        cache: &mut Cache<Self>,
    ) -> EsdtTokenPayment {
        let minted = self.process_supply(borrower, payment, cache);
        self.process_collateralize(borrower, &minted, cache);

        minted
    }
}
