use common_constants::WAD_PRECISION;
use common_errors::{
    ERROR_MAX_COLLATERAL_SHARE, ERROR_MAX_SUPPLY, ERROR_MAX_SUPPLY_UTILIZATION,
    ERROR_MIN_COLLATERAL_LIQUIDITY,
};
use common_structs::{PriceMode, Token};

use crate::{cache::Cache, exchange, hooks, ledger, oracle, positions, storage};

multiversx_sc::imports!();

/// Closed form capacity limits and the market checks run after each operation.
///
/// Market limits are expressed in base units unless stated otherwise, and are clamped
/// at zero.
#[multiversx_sc::module]
pub trait LimitsModule:
    storage::Storage
    + ledger::LedgerModule
    + exchange::ExchangeRateModule
    + oracle::OracleModule
    + hooks::HooksModule
    + positions::account::PositionAccountModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    fn u_token_of(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        cache: &Cache<Self>,
    ) -> Option<TokenIdentifier> {
        cache.try_get_u_token_id(base_denom)
    }

    /// Base token value of all collateral uTokens of `base_denom`.
    fn collateral_in_tokens(&self, base_denom: &EgldOrEsdtTokenIdentifier, cache: &Cache<Self>) -> BigUint {
        match self.u_token_of(base_denom, cache) {
            Some(u_token) => self.total_collateral_tokens(base_denom, &u_token, cache),
            None => BigUint::zero(),
        }
    }

    /// Liquidity that stays free after reserving `min_collateral_liquidity` of collateral.
    fn module_available_liquidity(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
        cache: &Cache<Self>,
    ) -> BigUint {
        let liquidity = self.available_liquidity(base_denom, cache);
        let collateral = self.to_decimal(self.collateral_in_tokens(base_denom, cache), 0);
        let locked = self.ceil_to_int(&self.mul_ceil(
            &collateral,
            &token.min_collateral_liquidity,
            WAD_PRECISION,
        ));

        if liquidity > locked {
            liquidity - locked
        } else {
            BigUint::zero()
        }
    }

    /// Largest borrow the market allows.
    ///
    /// **Formula**: solves `max_supply_utilization = (borrowed + x) / (liquidity + borrowed)`,
    /// bounded by the module available liquidity, minus the protected supply.
    fn module_max_borrow(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
        cache: &Cache<Self>,
    ) -> BigUint {
        let available = self.module_available_liquidity(base_denom, token, cache);
        if available == 0u64 {
            return BigUint::zero();
        }

        let capacity = if token.max_supply_utilization >= self.wad() {
            available
        } else {
            let liquidity = self.to_decimal(self.available_liquidity(base_denom, cache), 0);
            let borrowed = self.to_decimal(self.total_borrowed(base_denom), 0);
            let supplied = liquidity + borrowed.clone();
            let allowed = self.floor_to_int(&self.mul_floor(
                &supplied,
                &token.max_supply_utilization,
                WAD_PRECISION,
            ));
            let headroom = self.floor_to_int(&self.sub_or_zero(
                &self.to_decimal(allowed, 0),
                &borrowed,
                0,
            ));

            self.min_amount_of(headroom, &available)
        };

        let protected = self.protected_supply(base_denom).get();
        if capacity > protected {
            capacity - protected
        } else {
            BigUint::zero()
        }
    }

    /// Base units that can be withdrawn when `spendable` base units come from wallet uTokens
    /// and the remainder from collateral.
    ///
    /// **Formula**: the collateral sourced part `x` solves
    /// `min_collateral_liquidity = (liquidity - spendable - x) / (collateral - x)`.
    fn module_max_withdraw(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
        spendable: &BigUint,
        cache: &Cache<Self>,
    ) -> BigUint {
        let available = self.available_liquidity(base_denom, cache);
        if available == 0u64 {
            return BigUint::zero();
        }
        if spendable >= &available {
            return available;
        }

        let leftover = &available - spendable;
        let collateral = self.collateral_in_tokens(base_denom, cache);
        if collateral == 0u64 {
            return spendable.clone();
        }

        let min_liquidity = &token.min_collateral_liquidity;
        if min_liquidity == &self.wad_zero() {
            return spendable + &self.min_amount_of(leftover, &collateral);
        }
        if leftover >= collateral {
            return spendable + &collateral;
        }
        if min_liquidity >= &self.wad() {
            return spendable.clone();
        }

        let leftover_dec = self.to_decimal(leftover.clone(), 0).rescale(WAD_PRECISION);
        let collateral_dec = self.to_decimal(collateral.clone(), 0).rescale(WAD_PRECISION);
        let locked = self.mul_ceil(&collateral_dec, min_liquidity, WAD_PRECISION);
        if leftover_dec <= locked {
            return spendable.clone();
        }

        let free = self.sub_or_zero(&leftover_dec, &locked, WAD_PRECISION);
        let denominator = self.sub_or_zero(&self.wad(), min_liquidity, WAD_PRECISION);
        let from_collateral = self.floor_to_int(&self.div_floor(&free, &denominator, WAD_PRECISION));

        spendable + &self.min_amount_of(self.min_amount_of(from_collateral, &collateral), &leftover)
    }

    /// uTokens `account` can withdraw from its wallet portion plus collateral, before market limits.
    ///
    /// Without borrows all unbonded collateral is free. Otherwise the removable collateral
    /// value is `(borrow_limit - borrowed) / effective_weight`, valued at the lower price.
    fn user_max_withdraw(
        &self,
        account: &ManagedAddress,
        base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
        u_token: &TokenIdentifier,
        wallet: &BigUint,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let unbonded = self.unbonded_collateral(account, u_token);
        if self.adjusted_borrows(account).is_empty() {
            return wallet + &unbonded;
        }

        let position = self.conservative_position(account, false, cache);
        if position.unpriced_borrows || position.borrowed_value >= position.borrow_limit {
            return wallet.clone();
        }

        let weight = if position.effective_weights.contains(base_denom) {
            position.effective_weights.get(base_denom)
        } else {
            token.collateral_weight.clone()
        };
        if weight == self.wad_zero() {
            return wallet + &unbonded;
        }

        let Ok(price) = self.token_price(token, PriceMode::Low, cache) else {
            return wallet.clone();
        };

        let unused = self.sub_or_zero(&position.borrow_limit, &position.borrowed_value, WAD_PRECISION);
        let removable_value = self.div_floor(&unused, &weight, WAD_PRECISION);
        let removable_tokens = self.tokens_for_value(token, &removable_value, &price);
        let rate = self.exchange_rate(base_denom, cache);
        let removable = self.to_u_token_amount(&removable_tokens, &rate);

        wallet + &self.min_amount_of(removable, &unbonded)
    }

    /// Withdrawable uTokens of `base_denom` for `account`, combining user and market limits.
    fn max_withdraw_amount(
        &self,
        account: &ManagedAddress,
        base_denom: &EgldOrEsdtTokenIdentifier,
        wallet: &BigUint,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let Some(token) = cache.try_get_token(base_denom) else {
            return BigUint::zero();
        };
        let Some(u_token) = self.u_token_of(base_denom, cache) else {
            return BigUint::zero();
        };

        let user_max = self.user_max_withdraw(account, base_denom, &token, &u_token, wallet, cache);

        let rate = self.exchange_rate(base_denom, cache);
        let spendable = self.to_token_amount(wallet, &rate);
        let module_tokens = self.module_max_withdraw(base_denom, &token, &spendable, cache);
        let module_max = self.to_u_token_amount(&module_tokens, &rate);

        self.min_amount_of(user_max, &module_max)
    }

    /// Base units `account` can still borrow, combining unused limit and market capacity.
    fn max_borrow_amount(
        &self,
        account: &ManagedAddress,
        base_denom: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let Some(token) = cache.try_get_token(base_denom) else {
            return BigUint::zero();
        };
        if !token.can_borrow() {
            return BigUint::zero();
        }

        let position = self.conservative_position(account, false, cache);
        if position.unpriced_borrows || position.borrowed_value >= position.borrow_limit {
            return BigUint::zero();
        }

        let Ok(price) = self.token_price(&token, PriceMode::High, cache) else {
            return BigUint::zero();
        };

        let unused = self.sub_or_zero(&position.borrow_limit, &position.borrowed_value, WAD_PRECISION);
        let user_max = self.tokens_for_value(&token, &unused, &price);

        self.min_amount_of(user_max, &self.module_max_borrow(base_denom, &token, cache))
    }

    /// Largest total collateral of `base_denom` allowed by its max collateral share, in uTokens.
    ///
    /// **Formula**: `other_value / (1 - share) * share`, converted at the higher price.
    fn max_collateral_from_share(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let Some(u_token) = self.u_token_of(base_denom, cache) else {
            return BigUint::zero();
        };
        let supply = self.u_token_supply(&u_token).get();

        let share = &token.max_collateral_share;
        if share >= &self.wad() {
            return supply;
        }
        if share == &self.wad_zero() {
            return BigUint::zero();
        }

        let mut other_value = self.wad_zero();
        for other in self.registered_tokens().iter() {
            if &other == base_denom {
                continue;
            }
            let Some(other_token) = cache.try_get_token(&other) else {
                continue;
            };
            let collateral = self.collateral_in_tokens(&other, cache);
            if collateral == 0u64 {
                continue;
            }
            if let Ok(value) = self.token_value(&other_token, &collateral, PriceMode::Spot, cache) {
                other_value = other_value + value;
            }
        }

        let Ok(price) = self.token_price(token, PriceMode::High, cache) else {
            return BigUint::zero();
        };

        let remaining_share = self.sub_or_zero(&self.wad(), share, WAD_PRECISION);
        let max_value = self.mul_floor(
            &self.div_floor(&other_value, &remaining_share, WAD_PRECISION),
            share,
            WAD_PRECISION,
        );
        let max_tokens = self.tokens_for_value(token, &max_value, &price);
        let rate = self.exchange_rate(base_denom, cache);

        self.min_amount_of(self.to_u_token_amount(&max_tokens, &rate), &supply)
    }

    /// uTokens out of `offered` that can still be collateralized.
    fn max_collateralize_amount(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        offered: &BigUint,
        cache: &mut Cache<Self>,
    ) -> BigUint {
        let Some(token) = cache.try_get_token(base_denom) else {
            return BigUint::zero();
        };
        let Some(u_token) = self.u_token_of(base_denom, cache) else {
            return BigUint::zero();
        };

        let cap = self.max_collateral_from_share(base_denom, &token, cache);
        let total = self.total_collateral(&u_token).get();
        let room = if cap > total { cap - total } else { BigUint::zero() };

        self.min_amount_of(offered.clone(), &room)
    }

    /// # Errors
    /// - `ERROR_MAX_SUPPLY`: Total supplied tokens exceed the token's max supply.
    fn check_max_supply(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
        cache: &Cache<Self>,
    ) {
        if !token.has_max_supply() {
            return;
        }

        let Some(u_token) = self.u_token_of(base_denom, cache) else {
            return;
        };
        let rate = self.exchange_rate(base_denom, cache);
        let supplied = self.to_token_amount(&self.u_token_supply(&u_token).get(), &rate);

        require!(supplied <= token.max_supply, ERROR_MAX_SUPPLY);
    }

    /// # Errors
    /// - `ERROR_MAX_SUPPLY_UTILIZATION`: Borrowed share of supply exceeds the limit.
    fn check_supply_utilization(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
        cache: &Cache<Self>,
    ) {
        if token.max_supply_utilization >= self.wad() {
            return;
        }

        let borrowed = self.total_borrowed(base_denom);
        let liquidity = self.available_liquidity(base_denom, cache);
        let utilization = self.supply_utilization(&borrowed, &liquidity);

        require!(
            utilization <= token.max_supply_utilization,
            ERROR_MAX_SUPPLY_UTILIZATION
        );
    }

    /// # Errors
    /// - `ERROR_MIN_COLLATERAL_LIQUIDITY`: `liquidity / collateral` fell below the minimum.
    fn check_collateral_liquidity(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
        cache: &Cache<Self>,
    ) {
        let collateral = self.collateral_in_tokens(base_denom, cache);
        if collateral == 0u64 || token.min_collateral_liquidity == self.wad_zero() {
            return;
        }

        let liquidity = self.to_decimal(self.available_liquidity(base_denom, cache), 0);
        let ratio = self.div_floor(&liquidity, &self.to_decimal(collateral, 0), WAD_PRECISION);

        require!(
            ratio >= token.min_collateral_liquidity,
            ERROR_MIN_COLLATERAL_LIQUIDITY
        );
    }

    /// Collateral of `base_denom`, at spot price, must stay within its share of all collateral.
    /// Unknown prices are left out of both sides.
    ///
    /// # Errors
    /// - `ERROR_MAX_COLLATERAL_SHARE`: The share limit would be exceeded.
    fn check_collateral_share(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
        cache: &mut Cache<Self>,
    ) {
        if token.max_collateral_share >= self.wad() {
            return;
        }

        let collateral = self.collateral_in_tokens(base_denom, cache);
        let Ok(this_value) = self.token_value(token, &collateral, PriceMode::Spot, cache) else {
            return;
        };

        let mut total_value = this_value.clone();
        for other in self.registered_tokens().iter() {
            if &other == base_denom {
                continue;
            }
            let Some(other_token) = cache.try_get_token(&other) else {
                continue;
            };
            let other_collateral = self.collateral_in_tokens(&other, cache);
            if other_collateral == 0u64 {
                continue;
            }
            if let Ok(value) =
                self.token_value(&other_token, &other_collateral, PriceMode::Spot, cache)
            {
                total_value = total_value + value;
            }
        }

        let allowed = self.mul_floor(&total_value, &token.max_collateral_share, WAD_PRECISION);
        require!(this_value <= allowed, ERROR_MAX_COLLATERAL_SHARE);
    }

    fn min_amount_of(&self, amount: BigUint, cap: &BigUint) -> BigUint {
        if &amount > cap {
            cap.clone()
        } else {
            amount
        }
    }
}
