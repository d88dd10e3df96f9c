use common_constants::TOKEN_CACHE_CAPACITY;
use common_structs::Token;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per transaction view over the registry and the oracle.
///
/// Registry entries are read-mostly, so they are kept in a bounded map that is flushed once
/// it holds `TOKEN_CACHE_CAPACITY` entries. Prices are cached per symbol for the whole
/// transaction, which keeps every valuation of one operation on the same snapshot.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,

    pub tokens: ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, Token<C::Api>>,
    cached_tokens: usize,
    pub spot_prices: ManagedMapEncoded<C::Api, ManagedBuffer<C::Api>, BigUint<C::Api>>,
    pub historic_prices: ManagedMapEncoded<C::Api, ManagedBuffer<C::Api>, BigUint<C::Api>>,
    pub oracle_address: ManagedAddress<C::Api>,
    pub sc_address: ManagedAddress<C::Api>,
    pub current_timestamp: u64,
    /// Tokens in the module balance that the ledger does not account for: a payment the
    /// running endpoint received but has not booked, or a payout it has not sent yet.
    pub unsettled: Option<EgldOrEsdtTokenPayment<C::Api>>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        Cache {
            sc_ref,
            tokens: ManagedMapEncoded::new(),
            cached_tokens: 0,
            spot_prices: ManagedMapEncoded::new(),
            historic_prices: ManagedMapEncoded::new(),
            oracle_address: sc_ref.oracle_address().get(),
            sc_address: sc_ref.blockchain().get_sc_address(),
            current_timestamp: sc_ref.blockchain().get_block_timestamp(),
            unsettled: None,
        }
    }

    /// Registry entry of `base_denom`, served from the cache when possible.
    pub fn try_get_token(
        &mut self,
        base_denom: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> Option<Token<C::Api>> {
        if self.tokens.contains(base_denom) {
            return Some(self.tokens.get(base_denom));
        }

        let mapper = self.sc_ref.token(base_denom);
        if mapper.is_empty() {
            return None;
        }

        let token = mapper.get();
        if self.cached_tokens >= TOKEN_CACHE_CAPACITY {
            self.tokens = ManagedMapEncoded::new();
            self.cached_tokens = 0;
        }
        self.tokens.put(base_denom, &token);
        self.cached_tokens += 1;

        Some(token)
    }

    /// Drops a cached registry entry after it was written to storage.
    pub fn forget_token(&mut self, base_denom: &EgldOrEsdtTokenIdentifier<C::Api>) {
        if self.tokens.contains(base_denom) {
            self.tokens = ManagedMapEncoded::new();
            self.cached_tokens = 0;
        }
    }

    pub fn try_get_u_token_id(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> Option<TokenIdentifier<C::Api>> {
        let mapper = self.sc_ref.u_token_id(base_denom);
        if mapper.is_empty() {
            return None;
        }

        Some(mapper.get())
    }

    /// Base token backing `u_token`, if it was bound by the registry.
    pub fn try_get_u_token_base(
        &self,
        u_token: &TokenIdentifier<C::Api>,
    ) -> Option<EgldOrEsdtTokenIdentifier<C::Api>> {
        let mapper = self.sc_ref.u_token_base(u_token);
        if mapper.is_empty() {
            return None;
        }

        Some(mapper.get())
    }

    pub fn is_u_token(&self, token: &EgldOrEsdtTokenIdentifier<C::Api>) -> bool {
        if !token.is_esdt() {
            return false;
        }

        !self
            .sc_ref
            .u_token_base(&token.clone().unwrap_esdt())
            .is_empty()
    }

    /// Marks the unsettled amount as accounted for by the ledger.
    pub fn settle(&mut self) {
        self.unsettled = None;
    }

    /// Part of the module balance of `base_denom` excluded from liquidity.
    pub fn unsettled_amount(&self, base_denom: &EgldOrEsdtTokenIdentifier<C::Api>) -> BigUint<C::Api> {
        match &self.unsettled {
            Some(payment) if &payment.token_identifier == base_denom => payment.amount.clone(),
            _ => BigUint::zero(),
        }
    }
}
