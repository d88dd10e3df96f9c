use common_proxies::{proxy_bond_hook, proxy_token_hook};
use common_structs::Token;

use crate::{ledger, storage};

multiversx_sc::imports!();

/// Synchronous calls into the contracts registered as hooks.
///
/// Hooks run in insertion order. A failing hook aborts the whole transaction.
#[multiversx_sc::module]
pub trait HooksModule:
    storage::Storage
    + ledger::LedgerModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// uTokens of `account` locked by every bond hook.
    fn bonded_collateral(&self, account: &ManagedAddress, u_token: &TokenIdentifier) -> BigUint {
        let mut bonded = BigUint::zero();
        for hook in self.bond_hooks().iter() {
            let amount: BigUint = self
                .tx()
                .to(&hook)
                .typed(proxy_bond_hook::BondHookProxy)
                .bonded(account, u_token)
                .returns(ReturnsResult)
                .sync_call_readonly();
            bonded += amount;
        }

        bonded
    }

    /// Collateral of `account` that is free to leave the module.
    fn unbonded_collateral(&self, account: &ManagedAddress, u_token: &TokenIdentifier) -> BigUint {
        let collateral = self.collateral_amount(account, u_token);
        let bonded = self.bonded_collateral(account, u_token);

        if collateral > bonded {
            collateral - bonded
        } else {
            BigUint::zero()
        }
    }

    /// Lowers every hook's bond of `u_token` to the account's current collateral.
    fn force_unbond_to_collateral(&self, account: &ManagedAddress, u_token: &TokenIdentifier) {
        if self.bond_hooks().is_empty() {
            return;
        }

        let target = self.collateral_amount(account, u_token);
        for hook in self.bond_hooks().iter() {
            self.tx()
                .to(&hook)
                .typed(proxy_bond_hook::BondHookProxy)
                .force_unbond_to(account, u_token, &target)
                .sync_call();
        }

        self.force_unbond_event(account, u_token, &target);
    }

    fn after_token_registered(&self, token: &Token<Self::Api>) {
        for hook in self.token_hooks().iter() {
            self.tx()
                .to(&hook)
                .typed(proxy_token_hook::TokenHookProxy)
                .after_token_registered(token)
                .sync_call();
        }
    }

    fn after_registered_token_removed(&self, token: &Token<Self::Api>) {
        for hook in self.token_hooks().iter() {
            self.tx()
                .to(&hook)
                .typed(proxy_token_hook::TokenHookProxy)
                .after_registered_token_removed(token)
                .sync_call();
        }
    }
}
