multiversx_sc::imports!();

use common_constants::{DEFAULT_UTOKEN_DECIMALS, WAD_PRECISION};
use common_errors::{
    ERROR_EMPTY_DENOM, ERROR_HOOK_ALREADY_ADDED, ERROR_SYMBOL_ALREADY_USED,
    ERROR_TOKEN_ALREADY_REGISTERED, ERROR_TOKEN_IN_USE, ERROR_UTOKEN_ALREADY_ISSUED,
};
use common_structs::{LeverageParams, SpecialAssetPair, Token};

use crate::{cache::Cache, exchange, hooks, interest, ledger, storage, validation};

/// Governance of the leverage market.
///
/// Every endpoint here is restricted to the contract owner. It covers the token registry,
/// uToken issuance, special asset pairs, liquidation parameters and the collaborator
/// addresses (oracle and hooks).
///
/// Registry writes notify the token hooks synchronously, so a failing hook reverts the
/// registry change with it.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + exchange::ExchangeRateModule
    + interest::InterestModule
    + hooks::HooksModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Adds a base token to the registry.
    ///
    /// **Process**:
    /// 1. Normalizes every decimal field to WAD and validates the entry.
    /// 2. Reserves the symbol and starts the interest scalar at 1.
    /// 3. Notifies the token hooks.
    ///
    /// # Errors
    /// - `ERROR_EMPTY_DENOM`: The base denom is not a valid identifier.
    /// - `ERROR_TOKEN_ALREADY_REGISTERED`: The denom is already in the registry.
    /// - `ERROR_SYMBOL_ALREADY_USED`: Another token uses the symbol.
    /// - Any error of `validate_token`.
    #[only_owner]
    #[endpoint(registerToken)]
    fn register_token(&self, token: Token<Self::Api>) {
        let mut token = token;
        require!(token.base_denom.is_valid(), ERROR_EMPTY_DENOM);
        require!(
            self.token(&token.base_denom).is_empty(),
            ERROR_TOKEN_ALREADY_REGISTERED
        );

        self.normalize_token(&mut token);
        self.validate_token(&token);
        require!(
            self.symbol_denom(&token.symbol).is_empty(),
            ERROR_SYMBOL_ALREADY_USED
        );

        let base_denom = token.base_denom.clone();
        self.token(&base_denom).set(&token);
        self.symbol_denom(&token.symbol).set(&base_denom);
        self.registered_tokens().insert(base_denom.clone());
        self.interest_scalar(&base_denom).set(self.ray());

        self.register_token_event(&base_denom, &token.symbol, &token);
        self.after_token_registered(&token);
    }

    /// Replaces the parameters of a registered token. A changed symbol must be free.
    ///
    /// Interest up to the current block accrues at the old parameters first.
    #[only_owner]
    #[endpoint(updateToken)]
    fn update_token(&self, token: Token<Self::Api>) {
        let mut token = token;
        let mut cache = Cache::new(self);
        let current = self.get_registered_token(&token.base_denom, &mut cache);
        self.accrue_all_interest(&mut cache);

        self.normalize_token(&mut token);
        self.validate_token(&token);

        if current.symbol != token.symbol {
            require!(
                self.symbol_denom(&token.symbol).is_empty(),
                ERROR_SYMBOL_ALREADY_USED
            );
            self.symbol_denom(&current.symbol).clear();
            self.symbol_denom(&token.symbol).set(&token.base_denom);
        }

        self.token(&token.base_denom).set(&token);
        cache.forget_token(&token.base_denom);

        self.update_token_event(&token.base_denom, &token);
        self.after_token_registered(&token);
    }

    /// Removes a token that holds no supply, borrows or reserves. Special asset pairs
    /// involving the token are dropped with it.
    ///
    /// # Errors
    /// - `ERROR_TOKEN_NOT_REGISTERED`: The denom is not in the registry.
    /// - `ERROR_TOKEN_IN_USE`: uTokens, borrows or reserves of the token still exist.
    #[only_owner]
    #[endpoint(removeToken)]
    fn remove_token(&self, base_denom: EgldOrEsdtTokenIdentifier) {
        let mut cache = Cache::new(self);
        let token = self.get_registered_token(&base_denom, &mut cache);

        if let Some(u_token) = cache.try_get_u_token_id(&base_denom) {
            require!(
                self.u_token_supply(&u_token).get() == 0u64,
                ERROR_TOKEN_IN_USE
            );
            self.u_token_base(&u_token).clear();
            self.u_token_supply(&u_token).clear();
            self.total_collateral(&u_token).clear();
            self.u_token_id(&base_denom).clear();
        }
        require!(
            self.get_adjusted_total_borrowed(&base_denom) == self.ray_zero(),
            ERROR_TOKEN_IN_USE
        );
        require!(self.reserves(&base_denom).get() == 0u64, ERROR_TOKEN_IN_USE);

        let mut index = self.special_pairs().len();
        while index > 0 {
            let pair = self.special_pairs().get(index);
            if pair.collateral == base_denom || pair.borrow == base_denom {
                self.special_pair(&pair.collateral, &pair.borrow).clear();
                self.remove_sorted_pair(index);
            }
            index -= 1;
        }

        self.symbol_denom(&token.symbol).clear();
        self.token(&base_denom).clear();
        self.registered_tokens().swap_remove(&base_denom);
        self.interest_scalar(&base_denom).clear();
        self.adjusted_total_borrowed(&base_denom).clear();
        self.protected_supply(&base_denom).clear();
        cache.forget_token(&base_denom);

        self.remove_token_event(&base_denom);
        self.after_registered_token_removed(&token);
    }

    /// Issues the fungible uToken of a registered base token.
    /// The EGLD payment covers the issue cost. The issued id is bound in the callback.
    ///
    /// # Errors
    /// - `ERROR_UTOKEN_ALREADY_ISSUED`: The token already has a uToken.
    #[only_owner]
    #[payable("EGLD")]
    #[endpoint(issueUToken)]
    fn issue_u_token(
        &self,
        base_denom: EgldOrEsdtTokenIdentifier,
        token_name: ManagedBuffer,
        ticker: ManagedBuffer,
    ) {
        let mut cache = Cache::new(self);
        self.get_registered_token(&base_denom, &mut cache);
        require!(
            self.u_token_id(&base_denom).is_empty(),
            ERROR_UTOKEN_ALREADY_ISSUED
        );

        let issue_cost = self.call_value().egld().clone_value();
        self.send()
            .esdt_system_sc_tx()
            .issue_and_set_all_roles(
                issue_cost,
                token_name,
                ticker,
                EsdtTokenType::Fungible,
                DEFAULT_UTOKEN_DECIMALS,
            )
            .callback(self.callbacks().u_token_issue_callback(base_denom))
            .async_call_and_exit();
    }

    #[callback]
    fn u_token_issue_callback(
        &self,
        base_denom: EgldOrEsdtTokenIdentifier,
        #[call_result] result: ManagedAsyncCallResult<TokenIdentifier>,
    ) {
        match result {
            ManagedAsyncCallResult::Ok(u_token) => self.bind_u_token(&base_denom, &u_token),
            ManagedAsyncCallResult::Err(_) => {
                let refund = self.call_value().egld().clone_value();
                let owner = self.blockchain().get_owner_address();
                self.tx().to(&owner).egld(&refund).transfer_if_not_empty();
            },
        }
    }

    fn bind_u_token(&self, base_denom: &EgldOrEsdtTokenIdentifier, u_token: &TokenIdentifier) {
        self.u_token_id(base_denom).set(u_token);
        self.u_token_base(u_token).set(base_denom);

        self.bind_u_token_event(base_denom, u_token);
    }

    /// Sets the override weight and threshold of a collateral/borrow pair.
    /// A zero collateral weight removes the pair.
    ///
    /// The pair list stays sorted by collateral weight, highest first, which is the order
    /// the position calculator matches pairs in.
    #[only_owner]
    #[endpoint(setSpecialAssetPair)]
    fn set_special_asset_pair(
        &self,
        collateral: EgldOrEsdtTokenIdentifier,
        borrow: EgldOrEsdtTokenIdentifier,
        collateral_weight: ManagedDecimal<Self::Api, NumDecimals>,
        liquidation_threshold: ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let pair = SpecialAssetPair {
            collateral,
            borrow,
            collateral_weight: collateral_weight.rescale(WAD_PRECISION),
            liquidation_threshold: liquidation_threshold.rescale(WAD_PRECISION),
        };

        if let Some(index) = self.find_sorted_pair(&pair.collateral, &pair.borrow) {
            self.remove_sorted_pair(index);
        }

        if pair.collateral_weight == self.wad_zero() {
            self.special_pair(&pair.collateral, &pair.borrow).clear();
        } else {
            self.validate_special_pair(&pair);
            self.special_pair(&pair.collateral, &pair.borrow).set(&pair);
            self.insert_sorted_pair(&pair);
        }

        self.special_asset_pair_event(
            &pair.collateral,
            &pair.borrow,
            &pair.collateral_weight,
            &pair.liquidation_threshold,
        );
    }

    fn find_sorted_pair(
        &self,
        collateral: &EgldOrEsdtTokenIdentifier,
        borrow: &EgldOrEsdtTokenIdentifier,
    ) -> Option<usize> {
        let pairs = self.special_pairs();
        for index in 1..=pairs.len() {
            let pair = pairs.get(index);
            if &pair.collateral == collateral && &pair.borrow == borrow {
                return Some(index);
            }
        }

        None
    }

    /// Removes entry `index` (1 based) and shifts the tail down.
    fn remove_sorted_pair(&self, index: usize) {
        let mut pairs = self.special_pairs();
        let len = pairs.len();
        for position in index..len {
            let next = pairs.get(position + 1);
            pairs.set(position, &next);
        }
        pairs.swap_remove(len);
    }

    fn insert_sorted_pair(&self, pair: &SpecialAssetPair<Self::Api>) {
        let mut pairs = self.special_pairs();
        pairs.push(pair);

        let mut position = pairs.len();
        while position > 1 {
            let previous = pairs.get(position - 1);
            if previous.collateral_weight >= pair.collateral_weight {
                break;
            }
            pairs.set(position, &previous);
            position -= 1;
        }
        pairs.set(position, pair);
    }

    #[only_owner]
    #[endpoint(setParams)]
    fn set_params(&self, params: LeverageParams<Self::Api>) {
        let params = self.normalize_params(params);
        self.validate_params(&params);

        self.params().set(&params);
        self.update_params_event(&params);
    }

    fn normalize_params(&self, params: LeverageParams<Self::Api>) -> LeverageParams<Self::Api> {
        LeverageParams {
            complete_liquidation_threshold: params
                .complete_liquidation_threshold
                .rescale(WAD_PRECISION),
            minimum_close_factor: params.minimum_close_factor.rescale(WAD_PRECISION),
            small_liquidation_size: params.small_liquidation_size.rescale(WAD_PRECISION),
            direct_liquidation_fee: params.direct_liquidation_fee.rescale(WAD_PRECISION),
        }
    }

    #[only_owner]
    #[endpoint(setOracleAddress)]
    fn set_oracle_address(&self, oracle_address: ManagedAddress) {
        self.require_non_zero_address(&oracle_address);
        self.oracle_address().set(&oracle_address);
    }

    /// Appends a bonded collateral hook. Hooks are queried in insertion order.
    #[only_owner]
    #[endpoint(addBondHook)]
    fn add_bond_hook(&self, hook: ManagedAddress) {
        self.require_non_zero_address(&hook);
        let mut hooks = self.bond_hooks();
        require!(!hooks.iter().any(|known| known == hook), ERROR_HOOK_ALREADY_ADDED);

        hooks.push(&hook);
    }

    #[only_owner]
    #[endpoint(addTokenHook)]
    fn add_token_hook(&self, hook: ManagedAddress) {
        self.require_non_zero_address(&hook);
        let mut hooks = self.token_hooks();
        require!(!hooks.iter().any(|known| known == hook), ERROR_HOOK_ALREADY_ADDED);

        hooks.push(&hook);
    }

    /// Base units of `base_denom` that borrows can never consume.
    #[only_owner]
    #[endpoint(setProtectedSupply)]
    fn set_protected_supply(&self, base_denom: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let mut cache = Cache::new(self);
        self.get_registered_token(&base_denom, &mut cache);

        self.protected_supply(&base_denom).set(&amount);
    }
}
