#![no_std]

use common_structs::Token;

multiversx_sc::imports!();

pub static ERROR_REGISTRATION_REJECTED: &[u8] = b"Registration rejected by hook.";

/// Stand-in for the staking and oracle collaborators that hook into the leverage contract.
#[multiversx_sc::contract]
pub trait HooksMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // Bonds collateral on behalf of an account, without moving any uTokens
    #[endpoint(bond)]
    fn bond(&self, account: ManagedAddress, u_token: TokenIdentifier, amount: BigUint) {
        self.bonded_amount(&account, &u_token).set(&amount);
    }

    #[endpoint(setRejectRegistrations)]
    fn set_reject_registrations(&self, reject: bool) {
        self.reject_registrations().set(reject);
    }

    #[view(bonded)]
    fn bonded(&self, account: ManagedAddress, u_token: TokenIdentifier) -> BigUint {
        self.bonded_amount(&account, &u_token).get()
    }

    #[endpoint(forceUnbondTo)]
    fn force_unbond_to(&self, account: ManagedAddress, u_token: TokenIdentifier, target: BigUint) {
        let mapper = self.bonded_amount(&account, &u_token);
        if mapper.get() > target {
            sc_print!("Force unbond to {}", target);
            mapper.set(&target);
        }
    }

    #[endpoint(afterTokenRegistered)]
    fn after_token_registered(&self, token: Token<Self::Api>) {
        require!(!self.reject_registrations().get(), ERROR_REGISTRATION_REJECTED);
        self.known_symbols().insert(token.symbol);
    }

    #[endpoint(afterRegisteredTokenRemoved)]
    fn after_registered_token_removed(&self, token: Token<Self::Api>) {
        self.known_symbols().swap_remove(&token.symbol);
    }

    #[storage_mapper("bonded")]
    fn bonded_amount(
        &self,
        account: &ManagedAddress,
        u_token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[view(getKnownSymbols)]
    #[storage_mapper("known_symbols")]
    fn known_symbols(&self) -> UnorderedSetMapper<ManagedBuffer>;

    #[view(getRejectRegistrations)]
    #[storage_mapper("reject_registrations")]
    fn reject_registrations(&self) -> SingleValueMapper<bool>;
}
