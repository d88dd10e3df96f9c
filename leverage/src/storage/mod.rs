use common_structs::{BadDebt, LeverageParams, SpecialAssetPair, Token};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Base tokens known to the registry.
    #[view(getRegisteredTokens)]
    #[storage_mapper("registered_tokens")]
    fn registered_tokens(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    /// Risk and economic parameters of a registered base token.
    #[storage_mapper("token")]
    fn token(&self, base_denom: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<Token<Self::Api>>;

    /// Reverse index used to keep symbols unique across the registry.
    #[storage_mapper("symbol_denom")]
    fn symbol_denom(
        &self,
        symbol: &ManagedBuffer,
    ) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// uToken minted against deposits of `base_denom`, set once the issued token is bound.
    #[view(getUToken)]
    #[storage_mapper("u_token_id")]
    fn u_token_id(&self, base_denom: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<TokenIdentifier>;

    /// Base token a uToken redeems for.
    #[view(getUTokenBase)]
    #[storage_mapper("u_token_base")]
    fn u_token_base(&self, u_token: &TokenIdentifier) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Interest scaled borrows of an account, RAY based and keyed by base token.
    /// The amount owed is `adjusted * interest_scalar(denom)`.
    #[storage_mapper("adjusted_borrows")]
    fn adjusted_borrows(
        &self,
        account: &ManagedAddress,
    ) -> MapMapper<EgldOrEsdtTokenIdentifier, ManagedDecimal<Self::Api, NumDecimals>>;

    /// Sum of every account's adjusted borrow of `base_denom`.
    #[storage_mapper("adjusted_total_borrowed")]
    fn adjusted_total_borrowed(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    /// Accounts with at least one outstanding borrow.
    #[view(getBorrowers)]
    #[storage_mapper("borrowers")]
    fn borrowers(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// uTokens held by the module as collateral on behalf of an account.
    #[storage_mapper("collateral")]
    fn collateral(&self, account: &ManagedAddress) -> MapMapper<TokenIdentifier, BigUint>;

    #[view(getTotalCollateral)]
    #[storage_mapper("total_collateral")]
    fn total_collateral(&self, u_token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getUTokenSupply)]
    #[storage_mapper("u_token_supply")]
    fn u_token_supply(&self, u_token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getReserves)]
    #[storage_mapper("reserves")]
    fn reserves(&self, base_denom: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    /// Per denom interest scalar, RAY based. An empty mapper reads as 1.
    #[storage_mapper("interest_scalar")]
    fn interest_scalar(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedDecimal<Self::Api, NumDecimals>>;

    #[view(getLastInterestTime)]
    #[storage_mapper("last_interest_time")]
    fn last_interest_time(&self) -> SingleValueMapper<u64>;

    /// Liquidity reserved for external consumers, never lent out.
    #[view(getProtectedSupply)]
    #[storage_mapper("protected_supply")]
    fn protected_supply(&self, base_denom: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getBadDebts)]
    #[storage_mapper("bad_debts")]
    fn bad_debts(&self) -> UnorderedSetMapper<BadDebt<Self::Api>>;

    /// Special asset pairs sorted by collateral weight, highest first.
    #[storage_mapper("special_pairs")]
    fn special_pairs(&self) -> VecMapper<SpecialAssetPair<Self::Api>>;

    #[storage_mapper("special_pair")]
    fn special_pair(
        &self,
        collateral: &EgldOrEsdtTokenIdentifier,
        borrow: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<SpecialAssetPair<Self::Api>>;

    #[view(getParams)]
    #[storage_mapper("params")]
    fn params(&self) -> SingleValueMapper<LeverageParams<Self::Api>>;

    #[view(getOracleAddress)]
    #[storage_mapper("oracle_address")]
    fn oracle_address(&self) -> SingleValueMapper<ManagedAddress>;

    /// Contracts that bond collateral uTokens, queried in insertion order.
    #[view(getBondHooks)]
    #[storage_mapper("bond_hooks")]
    fn bond_hooks(&self) -> VecMapper<ManagedAddress>;

    /// Contracts notified after a token is registered or removed.
    #[view(getTokenHooks)]
    #[storage_mapper("token_hooks")]
    fn token_hooks(&self) -> VecMapper<ManagedAddress>;

    /// Spot USD price published by the oracle, WAD based.
    #[storage_mapper_from_address("spot_price")]
    fn oracle_spot_price(
        &self,
        oracle_address: ManagedAddress,
        symbol: ManagedBuffer,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("historic_median")]
    fn oracle_historic_median(
        &self,
        oracle_address: ManagedAddress,
        symbol: ManagedBuffer,
        index: u32,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("historic_median_count")]
    fn oracle_historic_median_count(
        &self,
        oracle_address: ManagedAddress,
        symbol: ManagedBuffer,
    ) -> SingleValueMapper<u32, ManagedAddress>;
}
