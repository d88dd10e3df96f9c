multiversx_sc::imports!();

use common_constants::{MAX_HISTORIC_MEDIANS, MAX_TOKEN_EXPONENT, WAD_PRECISION};
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_BLACKLISTED, ERROR_BLACKLISTED_ENABLED,
    ERROR_BORROW_NOT_ENABLED, ERROR_EMPTY_ADDRESS, ERROR_EMPTY_SYMBOL, ERROR_INVALID_EXPONENT,
    ERROR_INVALID_HISTORIC_MEDIANS, ERROR_INVALID_KINK, ERROR_INVALID_PARAMS,
    ERROR_INVALID_PAYMENT, ERROR_INVALID_RATE_CURVE, ERROR_INVALID_RATIO,
    ERROR_INVALID_SPECIAL_PAIR, ERROR_INVALID_WEIGHT_THRESHOLD, ERROR_NOT_UTOKEN,
    ERROR_SUPPLY_NOT_ENABLED, ERROR_TOKEN_NOT_REGISTERED, ERROR_UTOKEN_NOT_ALLOWED,
    ERROR_UTOKEN_NOT_ISSUED,
};
use common_structs::{LeverageParams, SpecialAssetPair, Token};

use crate::{cache::Cache, storage};

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage + common_math::SharedMathModule {
    /// Registry entry of `base_denom`.
    ///
    /// # Errors
    /// - `ERROR_TOKEN_NOT_REGISTERED`: The token is not in the registry.
    fn get_registered_token(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> Token<Self::Api> {
        match cache.try_get_token(base_denom) {
            Some(token) => token,
            None => sc_panic!(ERROR_TOKEN_NOT_REGISTERED),
        }
    }

    fn require_u_token_id(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        cache: &Cache<Self>,
    ) -> TokenIdentifier {
        match cache.try_get_u_token_id(base_denom) {
            Some(u_token) => u_token,
            None => sc_panic!(ERROR_UTOKEN_NOT_ISSUED),
        }
    }

    fn require_u_token_base(
        &self,
        u_token: &TokenIdentifier,
        cache: &Cache<Self>,
    ) -> EgldOrEsdtTokenIdentifier {
        match cache.try_get_u_token_base(u_token) {
            Some(base_denom) => base_denom,
            None => sc_panic!(ERROR_NOT_UTOKEN),
        }
    }

    /// Base token payment accepted by supply and supply collateral.
    ///
    /// # Errors
    /// - `ERROR_UTOKEN_NOT_ALLOWED`: The payment is a uToken.
    /// - `ERROR_SUPPLY_NOT_ENABLED`: Supply is disabled or the token is blacklisted.
    fn validate_supply_payment(
        &self,
        payment: &EgldOrEsdtTokenPayment,
        cache: &mut Cache<Self>,
    ) -> Token<Self::Api> {
        self.require_amount_greater_than_zero(&payment.amount);
        require!(!cache.is_u_token(&payment.token_identifier), ERROR_UTOKEN_NOT_ALLOWED);

        let token = self.get_registered_token(&payment.token_identifier, cache);
        require!(token.can_supply(), ERROR_SUPPLY_NOT_ENABLED);

        token
    }

    fn validate_borrow_token(&self, token: &Token<Self::Api>) {
        require!(token.can_borrow(), ERROR_BORROW_NOT_ENABLED);
    }

    /// uToken accepted as collateral, resolved to its base registry entry.
    ///
    /// # Errors
    /// - `ERROR_NOT_UTOKEN`: The token is not a registered uToken.
    /// - `ERROR_BLACKLISTED`: The base token is blacklisted.
    fn validate_collateral_u_token(
        &self,
        u_token: &TokenIdentifier,
        cache: &mut Cache<Self>,
    ) -> (EgldOrEsdtTokenIdentifier, Token<Self::Api>) {
        let base_denom = self.require_u_token_base(u_token, cache);
        let token = self.get_registered_token(&base_denom, cache);
        require!(!token.is_blacklisted(), ERROR_BLACKLISTED);

        (base_denom, token)
    }

    /// Single fungible payment of the running call.
    fn require_single_payment(&self) -> EgldOrEsdtTokenPayment {
        let payments = self.call_value().all_transfers();
        require!(payments.len() == 1, ERROR_INVALID_PAYMENT);

        let payment = payments.get(0).clone();
        require!(payment.token_nonce == 0, ERROR_INVALID_PAYMENT);

        payment
    }

    /// Optional single uToken payment of the running call.
    fn optional_u_token_payment(&self) -> Option<EsdtTokenPayment> {
        let payments = self.call_value().all_transfers();
        if payments.is_empty() {
            return None;
        }
        require!(payments.len() == 1, ERROR_INVALID_PAYMENT);

        let payment = payments.get(0).clone();
        require!(
            payment.token_identifier.is_esdt() && payment.token_nonce == 0,
            ERROR_INVALID_PAYMENT
        );

        Some(payment.unwrap_esdt())
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(amount > &BigUint::zero(), ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
    }

    fn require_non_zero_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERROR_EMPTY_ADDRESS);
    }

    fn require_ratio(&self, value: &ManagedDecimal<Self::Api, NumDecimals>) {
        require!(value <= &self.wad(), ERROR_INVALID_RATIO);
    }

    /// Brings every decimal field of a registry entry to WAD precision.
    fn normalize_token(&self, token: &mut Token<Self::Api>) {
        token.reserve_factor = token.reserve_factor.rescale(WAD_PRECISION);
        token.collateral_weight = token.collateral_weight.rescale(WAD_PRECISION);
        token.liquidation_threshold = token.liquidation_threshold.rescale(WAD_PRECISION);
        token.base_borrow_rate = token.base_borrow_rate.rescale(WAD_PRECISION);
        token.kink_borrow_rate = token.kink_borrow_rate.rescale(WAD_PRECISION);
        token.max_borrow_rate = token.max_borrow_rate.rescale(WAD_PRECISION);
        token.kink_utilization = token.kink_utilization.rescale(WAD_PRECISION);
        token.liquidation_incentive = token.liquidation_incentive.rescale(WAD_PRECISION);
        token.max_collateral_share = token.max_collateral_share.rescale(WAD_PRECISION);
        token.max_supply_utilization = token.max_supply_utilization.rescale(WAD_PRECISION);
        token.min_collateral_liquidity = token.min_collateral_liquidity.rescale(WAD_PRECISION);
    }

    /// Registry rules for a token entry. The entry must already be normalized.
    ///
    /// # Errors
    /// - `ERROR_EMPTY_SYMBOL`, `ERROR_INVALID_EXPONENT`: Malformed identity.
    /// - `ERROR_INVALID_RATIO`: A ratio field is above 1.
    /// - `ERROR_INVALID_WEIGHT_THRESHOLD`: Collateral weight above liquidation threshold.
    /// - `ERROR_INVALID_KINK`, `ERROR_INVALID_RATE_CURVE`: Malformed borrow curve.
    /// - `ERROR_INVALID_HISTORIC_MEDIANS`: Too many historic medians required.
    /// - `ERROR_BLACKLISTED_ENABLED`: A blacklisted token keeps supply or borrow enabled.
    fn validate_token(&self, token: &Token<Self::Api>) {
        require!(!token.symbol.is_empty(), ERROR_EMPTY_SYMBOL);
        require!(token.exponent <= MAX_TOKEN_EXPONENT, ERROR_INVALID_EXPONENT);

        self.require_ratio(&token.reserve_factor);
        self.require_ratio(&token.collateral_weight);
        self.require_ratio(&token.liquidation_threshold);
        self.require_ratio(&token.liquidation_incentive);
        self.require_ratio(&token.max_collateral_share);
        self.require_ratio(&token.max_supply_utilization);
        self.require_ratio(&token.min_collateral_liquidity);

        require!(
            token.collateral_weight <= token.liquidation_threshold,
            ERROR_INVALID_WEIGHT_THRESHOLD
        );

        require!(
            token.kink_utilization > self.wad_zero() && token.kink_utilization < self.wad(),
            ERROR_INVALID_KINK
        );
        require!(
            token.base_borrow_rate <= token.kink_borrow_rate
                && token.kink_borrow_rate <= token.max_borrow_rate,
            ERROR_INVALID_RATE_CURVE
        );

        require!(
            token.historic_medians <= MAX_HISTORIC_MEDIANS,
            ERROR_INVALID_HISTORIC_MEDIANS
        );

        if token.is_blacklisted() {
            require!(
                !token.enable_supply && !token.enable_borrow,
                ERROR_BLACKLISTED_ENABLED
            );
        }
    }

    /// Pair rules: two different registered tokens, `weight <= threshold <= 1`.
    fn validate_special_pair(&self, pair: &SpecialAssetPair<Self::Api>) {
        require!(pair.collateral != pair.borrow, ERROR_INVALID_SPECIAL_PAIR);
        require!(
            !self.token(&pair.collateral).is_empty() && !self.token(&pair.borrow).is_empty(),
            ERROR_TOKEN_NOT_REGISTERED
        );

        self.require_ratio(&pair.liquidation_threshold);
        require!(
            pair.collateral_weight <= pair.liquidation_threshold,
            ERROR_INVALID_WEIGHT_THRESHOLD
        );
    }

    fn validate_params(&self, params: &LeverageParams<Self::Api>) {
        require!(
            params.complete_liquidation_threshold > self.wad_zero()
                && params.complete_liquidation_threshold <= self.wad(),
            ERROR_INVALID_PARAMS
        );
        require!(params.minimum_close_factor <= self.wad(), ERROR_INVALID_PARAMS);
        require!(params.direct_liquidation_fee < self.wad(), ERROR_INVALID_PARAMS);
    }
}
