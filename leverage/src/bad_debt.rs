use common_structs::BadDebt;

use crate::{cache::Cache, exchange, ledger, storage};

multiversx_sc::imports!();

/// Flags borrows whose collateral is gone and repays them out of reserves.
///
/// A flag is set when an account still owes a denom while holding no collateral of a
/// non-blacklisted token. The sweep clears stale flags, repays what the reserves allow
/// and keeps the flag until the debt is gone.
#[multiversx_sc::module]
pub trait BadDebtModule:
    storage::Storage
    + ledger::LedgerModule
    + exchange::ExchangeRateModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Whether `account` holds collateral of at least one registered, non-blacklisted token.
    fn has_usable_collateral(&self, account: &ManagedAddress, cache: &mut Cache<Self>) -> bool {
        for (u_token, amount) in self.collateral(account).iter() {
            if amount == 0u64 {
                continue;
            }
            let Some(base_denom) = cache.try_get_u_token_base(&u_token) else {
                continue;
            };
            if let Some(token) = cache.try_get_token(&base_denom) {
                if !token.is_blacklisted() {
                    return true;
                }
            }
        }

        false
    }

    /// Flags every remaining borrow of `account` once its usable collateral is exhausted.
    fn check_bad_debt(&self, account: &ManagedAddress, cache: &mut Cache<Self>) {
        if self.adjusted_borrows(account).is_empty() || self.has_usable_collateral(account, cache) {
            return;
        }

        for borrow in self.account_borrows(account).iter() {
            let entry = BadDebt {
                account: account.clone(),
                denom: borrow.token_identifier.clone(),
            };
            if self.bad_debts().insert(entry) {
                self.bad_debt_event(account, &borrow.token_identifier, true);
            }
        }
    }

    /// Processes every flagged `(account, denom)`.
    ///
    /// **Process**:
    /// 1. Usable collateral reappeared: the flag is stale and is cleared.
    /// 2. Otherwise repays `min(owed, reserves, module balance)` from reserves.
    /// 3. The flag is cleared only when nothing is owed anymore.
    fn sweep_bad_debts(&self, cache: &mut Cache<Self>) {
        let mut index = self.bad_debts().len();
        while index > 0 {
            let entry = self.bad_debts().get_by_index(index);
            self.sweep_entry(&entry, cache);
            index -= 1;
        }
    }

    fn sweep_entry(&self, entry: &BadDebt<Self::Api>, cache: &mut Cache<Self>) {
        if self.has_usable_collateral(&entry.account, cache) {
            self.bad_debts().swap_remove(entry);
            self.bad_debt_event(&entry.account, &entry.denom, false);
            return;
        }

        let owed = self.owed_amount(&entry.account, &entry.denom);
        if owed == 0u64 {
            self.bad_debts().swap_remove(entry);
            self.bad_debt_event(&entry.account, &entry.denom, false);
            return;
        }

        let reserves = self.reserves(&entry.denom).get();
        let balance = self.module_balance(&entry.denom, cache);
        let mut payable = owed.clone();
        if reserves < payable {
            payable = reserves.clone();
        }
        if balance < payable {
            payable = balance;
        }

        if payable == 0u64 {
            self.reserves_exhausted_event(&entry.account, &entry.denom, &owed);
            return;
        }

        let repaid = self.decrease_borrow(&entry.account, &entry.denom, &payable);
        self.reserves(&entry.denom).set(&reserves - &repaid);

        let remaining = self.owed_amount(&entry.account, &entry.denom);
        self.repay_bad_debt_event(&entry.account, &entry.denom, &repaid, &remaining);

        if remaining == 0u64 {
            self.bad_debts().swap_remove(entry);
            self.bad_debt_event(&entry.account, &entry.denom, false);
        } else {
            self.reserves_exhausted_event(&entry.account, &entry.denom, &remaining);
        }
    }
}
