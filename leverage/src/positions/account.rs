use common_constants::WAD_PRECISION;
use common_errors::ERROR_UNDERCOLLATERALIZED;
use common_structs::PriceMode;

use crate::{cache::Cache, exchange, ledger, oracle, storage};

multiversx_sc::imports!();

/// USD valuation of one account, computed for a single operation.
pub struct AccountPosition<M: ManagedTypeApi> {
    pub collateral_value: ManagedDecimal<M, NumDecimals>,
    pub borrowed_value: ManagedDecimal<M, NumDecimals>,
    pub borrow_limit: ManagedDecimal<M, NumDecimals>,
    pub liquidation_threshold: ManagedDecimal<M, NumDecimals>,
    /// Some collateral had no usable price and was valued at zero.
    pub unknown_collateral: bool,
    /// Some borrow had no usable price and was left out.
    pub unpriced_borrows: bool,
    /// Highest weight applied to each collateral base token, special pairs included.
    pub effective_weights:
        ManagedMapEncoded<M, EgldOrEsdtTokenIdentifier<M>, ManagedDecimal<M, NumDecimals>>,
}

impl<M: ManagedTypeApi> AccountPosition<M> {
    pub fn is_within_limit(&self) -> bool {
        self.borrowed_value <= self.borrow_limit
    }

    pub fn is_liquidatable(&self) -> bool {
        self.borrowed_value > self.wad_zero_like() && self.borrowed_value >= self.liquidation_threshold
    }

    fn wad_zero_like(&self) -> ManagedDecimal<M, NumDecimals> {
        ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION)
    }
}

#[multiversx_sc::module]
pub trait PositionAccountModule:
    storage::Storage
    + ledger::LedgerModule
    + exchange::ExchangeRateModule
    + oracle::OracleModule
    + common_math::SharedMathModule
{
    /// Conservative position used by every state changing check.
    /// Collateral is valued at the lower, borrows at the higher of spot and historic price.
    fn conservative_position(
        &self,
        account: &ManagedAddress,
        strict: bool,
        cache: &mut Cache<Self>,
    ) -> AccountPosition<Self::Api> {
        self.compute_position(account, PriceMode::Low, PriceMode::High, strict, cache)
    }

    /// Spot only position, used for liquidation eligibility.
    fn spot_position(
        &self,
        account: &ManagedAddress,
        strict: bool,
        cache: &mut Cache<Self>,
    ) -> AccountPosition<Self::Api> {
        self.compute_position(account, PriceMode::Spot, PriceMode::Spot, strict, cache)
    }

    /// Aggregates collateral value, borrowed value, borrow limit and liquidation threshold.
    ///
    /// **Process**:
    /// 1. Values every collateral uToken at the exchange rate and `collateral_mode` price.
    ///    Unknown prices count as zero.
    /// 2. Values every borrow at the `borrow_mode` price. With `strict` an unknown price
    ///    aborts, otherwise the borrow is skipped.
    /// 3. Applies special asset pairs greedily, highest weight first. A pair covers
    ///    `min(borrow left, collateral left * pair weight)` of the borrow.
    /// 4. The remaining collateral contributes at the token weight and threshold.
    fn compute_position(
        &self,
        account: &ManagedAddress,
        collateral_mode: PriceMode,
        borrow_mode: PriceMode,
        strict: bool,
        cache: &mut Cache<Self>,
    ) -> AccountPosition<Self::Api> {
        let mut position = AccountPosition {
            collateral_value: self.wad_zero(),
            borrowed_value: self.wad_zero(),
            borrow_limit: self.wad_zero(),
            liquidation_threshold: self.wad_zero(),
            unknown_collateral: false,
            unpriced_borrows: false,
            effective_weights: ManagedMapEncoded::new(),
        };

        let mut collateral_left: ManagedMapEncoded<
            Self::Api,
            EgldOrEsdtTokenIdentifier,
            ManagedDecimal<Self::Api, NumDecimals>,
        > = ManagedMapEncoded::new();
        let mut collateral_denoms: ManagedVec<EgldOrEsdtTokenIdentifier> = ManagedVec::new();

        for (u_token, amount) in self.collateral(account).iter() {
            let Some(base_denom) = cache.try_get_u_token_base(&u_token) else {
                continue;
            };
            let Some(token) = cache.try_get_token(&base_denom) else {
                continue;
            };

            let rate = self.exchange_rate(&base_denom, cache);
            let tokens = self.to_token_amount(&amount, &rate);
            match self.token_value(&token, &tokens, collateral_mode, cache) {
                Ok(value) => {
                    position.collateral_value = position.collateral_value.clone() + value.clone();
                    collateral_left.put(&base_denom, &value);
                    position
                        .effective_weights
                        .put(&base_denom, &token.collateral_weight);
                    collateral_denoms.push(base_denom);
                },
                Err(_) => position.unknown_collateral = true,
            }
        }

        let mut borrow_left: ManagedMapEncoded<
            Self::Api,
            EgldOrEsdtTokenIdentifier,
            ManagedDecimal<Self::Api, NumDecimals>,
        > = ManagedMapEncoded::new();

        for borrow in self.account_borrows(account).iter() {
            let Some(token) = cache.try_get_token(&borrow.token_identifier) else {
                continue;
            };

            match self.token_value(&token, &borrow.amount, borrow_mode, cache) {
                Ok(value) => {
                    position.borrowed_value = position.borrowed_value.clone() + value.clone();
                    borrow_left.put(&borrow.token_identifier, &value);
                },
                Err(err) => {
                    if strict {
                        sc_panic!(err.message());
                    }
                    position.unpriced_borrows = true;
                },
            }
        }

        for pair in self.special_pairs().iter() {
            if !collateral_left.contains(&pair.collateral) || !borrow_left.contains(&pair.borrow) {
                continue;
            }

            let Some(token) = cache.try_get_token(&pair.collateral) else {
                continue;
            };
            if pair.collateral_weight <= token.collateral_weight {
                continue;
            }

            let collateral_value = collateral_left.get(&pair.collateral);
            let borrow_value = borrow_left.get(&pair.borrow);
            if collateral_value == self.wad_zero() || borrow_value == self.wad_zero() {
                continue;
            }

            let capacity = self.mul_floor(&collateral_value, &pair.collateral_weight, WAD_PRECISION);
            let (matched, consumed) = if borrow_value >= capacity {
                (capacity, collateral_value.clone())
            } else {
                let consumed =
                    self.div_ceil(&borrow_value, &pair.collateral_weight, WAD_PRECISION);
                (borrow_value.clone(), self.get_min(consumed, collateral_value.clone()))
            };

            position.borrow_limit = position.borrow_limit.clone() + matched.clone();
            position.liquidation_threshold = position.liquidation_threshold.clone()
                + self.mul_floor(&consumed, &pair.liquidation_threshold, WAD_PRECISION);

            collateral_left.put(
                &pair.collateral,
                &self.sub_or_zero(&collateral_value, &consumed, WAD_PRECISION),
            );
            borrow_left.put(
                &pair.borrow,
                &self.sub_or_zero(&borrow_value, &matched, WAD_PRECISION),
            );
            position
                .effective_weights
                .put(&pair.collateral, &pair.collateral_weight);
        }

        for base_denom in collateral_denoms.iter() {
            let Some(token) = cache.try_get_token(&base_denom) else {
                continue;
            };
            let value = collateral_left.get(&base_denom);

            position.borrow_limit = position.borrow_limit.clone()
                + self.mul_floor(&value, &token.collateral_weight, WAD_PRECISION);
            position.liquidation_threshold = position.liquidation_threshold.clone()
                + self.mul_floor(&value, &token.liquidation_threshold, WAD_PRECISION);
        }

        position
    }

    /// Fails unless the conservative borrowed value fits under the borrow limit.
    /// Borrows without a price abort the operation.
    ///
    /// # Errors
    /// - `ERROR_UNDERCOLLATERALIZED`: Borrowed value exceeds the borrow limit.
    fn require_healthy(&self, account: &ManagedAddress, cache: &mut Cache<Self>) {
        if self.adjusted_borrows(account).is_empty() {
            return;
        }

        let position = self.conservative_position(account, true, cache);
        require!(position.is_within_limit(), ERROR_UNDERCOLLATERALIZED);
    }

    /// Borrow with the largest spot value, skipping unpriced borrows.
    fn largest_borrow(
        &self,
        account: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> Option<EgldOrEsdtTokenIdentifier> {
        let mut best: Option<(EgldOrEsdtTokenIdentifier, ManagedDecimal<Self::Api, NumDecimals>)> =
            None;
        for borrow in self.account_borrows(account).iter() {
            let Some(token) = cache.try_get_token(&borrow.token_identifier) else {
                continue;
            };
            let Ok(value) = self.token_value(&token, &borrow.amount, PriceMode::Spot, cache) else {
                continue;
            };

            let is_larger = match &best {
                Some((_, best_value)) => &value > best_value,
                None => true,
            };
            if is_larger {
                best = Some((borrow.token_identifier.clone(), value));
            }
        }

        best.map(|(denom, _)| denom)
    }

    /// Collateral uToken with the largest spot value, skipping unpriced collateral.
    fn largest_collateral(
        &self,
        account: &ManagedAddress,
        cache: &mut Cache<Self>,
    ) -> Option<TokenIdentifier> {
        let mut best: Option<(TokenIdentifier, ManagedDecimal<Self::Api, NumDecimals>)> = None;
        for (u_token, amount) in self.collateral(account).iter() {
            let Some(base_denom) = cache.try_get_u_token_base(&u_token) else {
                continue;
            };
            let Some(token) = cache.try_get_token(&base_denom) else {
                continue;
            };

            let rate = self.exchange_rate(&base_denom, cache);
            let tokens = self.to_token_amount(&amount, &rate);
            let Ok(value) = self.token_value(&token, &tokens, PriceMode::Spot, cache) else {
                continue;
            };

            let is_larger = match &best {
                Some((_, best_value)) => &value > best_value,
                None => true,
            };
            if is_larger {
                best = Some((u_token, value));
            }
        }

        best.map(|(u_token, _)| u_token)
    }
}
