use common_constants::{RAY_PRECISION, SECONDS_PER_YEAR};
use common_errors::{ERROR_EXCESSIVE_TIME_ELAPSED, ERROR_NEGATIVE_TIME_ELAPSED};

use crate::{cache::Cache, exchange, ledger, storage};

multiversx_sc::imports!();

/// Global interest accrual.
///
/// One epoch grows the interest scalar of every registered denom with borrows, so its
/// cost depends on the number of denoms only. Interest owed moves into reserves in the
/// proportion given by the token's reserve factor. The rest accrues to suppliers
/// through the exchange rate.
#[multiversx_sc::module]
pub trait InterestModule:
    storage::Storage
    + ledger::LedgerModule
    + exchange::ExchangeRateModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Accrues interest from the last accrual time to the current block timestamp.
    ///
    /// The first call only records the timestamp. Calling twice in the same block is a
    /// no-op.
    ///
    /// # Errors
    /// - `ERROR_NEGATIVE_TIME_ELAPSED`: The block timestamp is older than the last accrual.
    /// - `ERROR_EXCESSIVE_TIME_ELAPSED`: A year or more passed since the last accrual.
    fn accrue_all_interest(&self, cache: &mut Cache<Self>) {
        let now = cache.current_timestamp;
        let last_mapper = self.last_interest_time();
        let previous = last_mapper.get();

        if previous == 0 {
            last_mapper.set(now);
            return;
        }

        require!(now >= previous, ERROR_NEGATIVE_TIME_ELAPSED);
        let elapsed = now - previous;
        if elapsed == 0 {
            return;
        }
        require!(elapsed < SECONDS_PER_YEAR, ERROR_EXCESSIVE_TIME_ELAPSED);

        for base_denom in self.registered_tokens().iter() {
            self.accrue_market(&base_denom, elapsed, cache);
        }

        last_mapper.set(now);
    }

    fn accrue_market(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        elapsed: u64,
        cache: &mut Cache<Self>,
    ) {
        let adjusted_total = self.get_adjusted_total_borrowed(base_denom);
        if adjusted_total == self.ray_zero() {
            return;
        }

        let Some(token) = cache.try_get_token(base_denom) else {
            return;
        };

        let borrowed = self.total_borrowed(base_denom);
        let liquidity = self.available_liquidity(base_denom, cache);
        let utilization = self.supply_utilization(&borrowed, &liquidity);
        let rate = self.borrow_rate(&token, &utilization);
        if rate == self.wad_zero() {
            return;
        }

        let scalar = self.get_interest_scalar(base_denom);
        let growth = self.accrual_growth(&rate, elapsed);
        let new_scalar = self.grow_interest_scalar(&scalar, &growth);

        let previous_owed = self.mul_floor(&adjusted_total, &scalar, RAY_PRECISION);
        let new_owed = self.mul_floor(&adjusted_total, &new_scalar, RAY_PRECISION);
        let interest = self.sub_or_zero(&new_owed, &previous_owed, RAY_PRECISION);

        let new_reserves =
            self.floor_to_int(&self.mul_floor(&interest, &token.reserve_factor, RAY_PRECISION));
        if new_reserves > 0u64 {
            self.reserves(base_denom).update(|reserves| *reserves += &new_reserves);
        }

        self.interest_scalar(base_denom).set(&new_scalar);

        self.accrue_interest_event(
            base_denom,
            cache.current_timestamp,
            &new_scalar,
            &self.floor_to_int(&interest),
            &new_reserves,
        );
    }
}
