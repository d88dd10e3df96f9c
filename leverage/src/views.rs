use common_constants::WAD_PRECISION;
use common_errors::{
    ERROR_INVARIANT_BORROW_TOTAL, ERROR_INVARIANT_COLLATERAL_SUPPLY, ERROR_INVARIANT_RESERVES,
};
use common_structs::{
    AccountBalances, AccountSummary, MarketSummary, PriceMode, SpecialAssetPair, Token,
};

use crate::{
    cache::Cache, exchange, hooks, ledger, limits, oracle, positions, storage, validation,
};

multiversx_sc::imports!();

/// Read-only queries. Assets without a usable price are left out of every valuation.
#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + exchange::ExchangeRateModule
    + oracle::OracleModule
    + hooks::HooksModule
    + positions::account::PositionAccountModule
    + limits::LimitsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    #[view(getToken)]
    fn get_token(&self, base_denom: EgldOrEsdtTokenIdentifier) -> Token<Self::Api> {
        let mut cache = Cache::new(self);
        self.get_registered_token(&base_denom, &mut cache)
    }

    #[view(getInterestScalar)]
    fn get_interest_scalar_view(
        &self,
        base_denom: EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_interest_scalar(&base_denom)
    }

    #[view(getAdjustedBorrows)]
    fn get_adjusted_borrows(
        &self,
        account: ManagedAddress,
    ) -> MultiValueEncoded<MultiValue2<EgldOrEsdtTokenIdentifier, ManagedDecimal<Self::Api, NumDecimals>>>
    {
        let mut result = MultiValueEncoded::new();
        for (base_denom, adjusted) in self.adjusted_borrows(&account).iter() {
            result.push((base_denom, adjusted).into());
        }

        result
    }

    #[view(getCollateral)]
    fn get_collateral(&self, account: ManagedAddress) -> ManagedVec<EsdtTokenPayment> {
        self.account_collateral(&account)
    }

    #[view(getSpecialAssetPairs)]
    fn get_special_asset_pairs(&self) -> MultiValueEncoded<SpecialAssetPair<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for pair in self.special_pairs().iter() {
            result.push(pair);
        }

        result
    }

    /// Market overview of one registered token.
    ///
    /// Amounts are in base units. APYs are the current annual rates.
    #[view(getMarketSummary)]
    fn get_market_summary(&self, base_denom: EgldOrEsdtTokenIdentifier) -> MarketSummary<Self::Api> {
        let mut cache = Cache::new(self);
        let token = self.get_registered_token(&base_denom, &mut cache);
        let u_token = cache.try_get_u_token_id(&base_denom);

        let rate = self.exchange_rate(&base_denom, &cache);
        let u_token_supply = match &u_token {
            Some(id) => self.u_token_supply(id).get(),
            None => BigUint::zero(),
        };
        let supplied = self.to_token_amount(&u_token_supply, &rate);
        let collateral = self.collateral_in_tokens(&base_denom, &cache);
        let borrowed = self.total_borrowed(&base_denom);
        let liquidity = self.available_liquidity(&base_denom, &cache);

        let utilization = self.supply_utilization(&borrowed, &liquidity);
        let borrow_apy = self.borrow_rate(&token, &utilization);
        let supply_apy = self.supply_rate(&token, &utilization, &borrow_apy);

        let maximum_borrow = self.floor_to_int(&self.mul_floor(
            &self.to_decimal(&liquidity + &borrowed, 0),
            &token.max_supply_utilization,
            WAD_PRECISION,
        ));
        let minimum_liquidity = self.ceil_to_int(&self.mul_ceil(
            &self.to_decimal(collateral.clone(), 0),
            &token.min_collateral_liquidity,
            WAD_PRECISION,
        ));

        let max_collateral_u = self.max_collateral_from_share(&base_denom, &token, &mut cache);
        let maximum_collateral = self.to_token_amount(&max_collateral_u, &rate);
        let total_collateral_u = match &u_token {
            Some(id) => self.total_collateral(id).get(),
            None => BigUint::zero(),
        };
        let available_collateralize = if max_collateral_u > total_collateral_u {
            self.to_token_amount(&(&max_collateral_u - &total_collateral_u), &rate)
        } else {
            BigUint::zero()
        };

        let wallet_supply = if supplied > collateral {
            &supplied - &collateral
        } else {
            BigUint::zero()
        };

        MarketSummary {
            symbol: token.symbol.clone(),
            exponent: token.exponent,
            u_token,
            oracle_price: self.spot_price(&token.symbol, &mut cache).ok(),
            oracle_historic_price: self.historic_price(&token, &mut cache).ok(),
            u_token_exchange_rate: rate,
            supply_apy,
            borrow_apy,
            utilization,
            supplied,
            reserved: self.reserves(&base_denom).get(),
            collateral,
            borrowed,
            liquidity,
            u_token_supply,
            maximum_borrow,
            maximum_collateral,
            minimum_liquidity,
            available_borrow: self.module_max_borrow(&base_denom, &token, &cache),
            available_withdraw: self.module_max_withdraw(&base_denom, &token, &wallet_supply, &cache),
            available_collateralize,
        }
    }

    /// Collateral (as base tokens and as uTokens) and borrowed balances of `account`.
    ///
    /// Only module-held uTokens are counted. Wallet uTokens live outside the module.
    #[view(getAccountBalances)]
    fn get_account_balances(&self, account: ManagedAddress) -> AccountBalances<Self::Api> {
        let cache = Cache::new(self);

        let mut supplied = ManagedVec::new();
        for base_denom in self.registered_tokens().iter() {
            let Some(u_token) = cache.try_get_u_token_id(&base_denom) else {
                continue;
            };
            let owned = self.collateral_amount(&account, &u_token);
            if owned == 0u64 {
                continue;
            }

            let rate = self.exchange_rate(&base_denom, &cache);
            supplied.push(EgldOrEsdtTokenPayment::new(
                base_denom,
                0,
                self.to_token_amount(&owned, &rate),
            ));
        }

        AccountBalances {
            supplied,
            collateral: self.account_collateral(&account),
            borrowed: self.account_borrows(&account),
        }
    }

    /// USD valuation of `account` with conservative and with spot prices.
    #[view(getAccountSummary)]
    fn get_account_summary(&self, account: ManagedAddress) -> AccountSummary<Self::Api> {
        let mut cache = Cache::new(self);

        let conservative = self.conservative_position(&account, false, &mut cache);
        let spot = self.spot_position(&account, false, &mut cache);

        AccountSummary {
            supplied_value: self.supplied_value(&account, PriceMode::Low, &mut cache),
            collateral_value: conservative.collateral_value,
            borrowed_value: conservative.borrowed_value,
            spot_supplied_value: self.supplied_value(&account, PriceMode::Spot, &mut cache),
            spot_collateral_value: spot.collateral_value,
            spot_borrowed_value: spot.borrowed_value,
            borrow_limit: conservative.borrow_limit,
            liquidation_threshold: conservative.liquidation_threshold,
        }
    }

    fn supplied_value(
        &self,
        account: &ManagedAddress,
        mode: PriceMode,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mut total = self.wad_zero();
        for base_denom in self.registered_tokens().iter() {
            let Some(u_token) = cache.try_get_u_token_id(&base_denom) else {
                continue;
            };
            let Some(token) = cache.try_get_token(&base_denom) else {
                continue;
            };

            let owned = self.collateral_amount(account, &u_token);
            if owned == 0u64 {
                continue;
            }

            let rate = self.exchange_rate(&base_denom, cache);
            let tokens = self.to_token_amount(&owned, &rate);
            if let Ok(value) = self.token_value(&token, &tokens, mode, cache) {
                total = total + value;
            }
        }

        total
    }

    /// Borrowers that can be liquidated at current spot prices.
    #[view(getLiquidationTargets)]
    fn get_liquidation_targets(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut cache = Cache::new(self);
        let mut targets = MultiValueEncoded::new();
        for borrower in self.borrowers().iter() {
            let position = self.spot_position(&borrower, false, &mut cache);
            if position.is_liquidatable() {
                targets.push(borrower);
            }
        }

        targets
    }

    /// uTokens of `base_denom` that `account` could withdraw when it also pays in
    /// `wallet` uTokens from its own balance.
    #[view(getMaxWithdraw)]
    fn get_max_withdraw(
        &self,
        account: ManagedAddress,
        base_denom: EgldOrEsdtTokenIdentifier,
        wallet: BigUint,
    ) -> BigUint {
        let mut cache = Cache::new(self);
        self.max_withdraw_amount(&account, &base_denom, &wallet, &mut cache)
    }

    #[view(getMaxBorrow)]
    fn get_max_borrow(&self, account: ManagedAddress, base_denom: EgldOrEsdtTokenIdentifier) -> BigUint {
        let mut cache = Cache::new(self);
        self.max_borrow_amount(&account, &base_denom, &mut cache)
    }

    /// uTokens out of `offered` that the max collateral share still admits.
    #[view(getMaxCollateralize)]
    fn get_max_collateralize(&self, base_denom: EgldOrEsdtTokenIdentifier, offered: BigUint) -> BigUint {
        let mut cache = Cache::new(self);
        self.max_collateralize_amount(&base_denom, &offered, &mut cache)
    }

    /// Verifies the ledger aggregates against the per account entries.
    ///
    /// # Errors
    /// - `ERROR_INVARIANT_BORROW_TOTAL`: Adjusted borrows do not sum to the denom total.
    /// - `ERROR_INVARIANT_COLLATERAL_SUPPLY`: More collateral than uToken supply.
    /// - `ERROR_INVARIANT_RESERVES`: Reserves exceed module balance plus borrows.
    #[view(checkInvariants)]
    fn check_invariants(&self) -> bool {
        let cache = Cache::new(self);

        let mut sums: ManagedMapEncoded<
            Self::Api,
            EgldOrEsdtTokenIdentifier,
            ManagedDecimal<Self::Api, NumDecimals>,
        > = ManagedMapEncoded::new();
        for borrower in self.borrowers().iter() {
            for (base_denom, adjusted) in self.adjusted_borrows(&borrower).iter() {
                let current = if sums.contains(&base_denom) {
                    sums.get(&base_denom)
                } else {
                    self.ray_zero()
                };
                sums.put(&base_denom, &(current + adjusted));
            }
        }

        for base_denom in self.registered_tokens().iter() {
            let sum = if sums.contains(&base_denom) {
                sums.get(&base_denom)
            } else {
                self.ray_zero()
            };
            require!(
                sum == self.get_adjusted_total_borrowed(&base_denom),
                ERROR_INVARIANT_BORROW_TOTAL
            );

            if let Some(u_token) = cache.try_get_u_token_id(&base_denom) {
                require!(
                    self.total_collateral(&u_token).get() <= self.u_token_supply(&u_token).get(),
                    ERROR_INVARIANT_COLLATERAL_SUPPLY
                );
            }

            let backing = self.module_balance(&base_denom, &cache) + self.total_borrowed(&base_denom);
            require!(
                self.reserves(&base_denom).get() <= backing,
                ERROR_INVARIANT_RESERVES
            );
        }

        true
    }
}
