use common_errors::ERROR_REPAY_NOTHING_OWED;
use common_structs::BadDebt;

use crate::{cache::Cache, ledger, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionRepayModule:
    storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Repays up to `payment.amount` of the borrower's debt in the payment token.
    ///
    /// Anyone may repay on behalf of a borrower. Paying more than is owed repays the
    /// whole debt and the excess is returned. A full repayment clears a bad debt flag.
    ///
    /// # Returns
    /// - `(repaid, refund)` in base units.
    ///
    /// # Errors
    /// - `ERROR_REPAY_NOTHING_OWED`: The borrower owes nothing in that token.
    fn process_repay(
        &self,
        caller: &ManagedAddress,
        borrower: &ManagedAddress,
        payment: &EgldOrEsdtTokenPayment,
        cache: &mut Cache<Self>,
    ) -> (BigUint, BigUint) {
        self.require_amount_greater_than_zero(&payment.amount);
        let base_denom = &payment.token_identifier;
        self.get_registered_token(base_denom, cache);

        let owed = self.owed_amount(borrower, base_denom);
        require!(owed > 0u64, ERROR_REPAY_NOTHING_OWED);

        let repaid = self.decrease_borrow(borrower, base_denom, &payment.amount);
        cache.settle();

        if self.owed_amount(borrower, base_denom) == 0u64 {
            self.clear_bad_debt_flag(borrower, base_denom);
        }

        let refund = &payment.amount - &repaid;
        let asset = EgldOrEsdtTokenPayment::new(base_denom.clone(), 0, repaid.clone());
        self.repay_event(borrower, &asset, caller);

        (repaid, refund)
    }

    fn clear_bad_debt_flag(&self, account: &ManagedAddress, base_denom: &EgldOrEsdtTokenIdentifier) {
        let entry = BadDebt {
            account: account.clone(),
            denom: base_denom.clone(),
        };
        if self.bad_debts().swap_remove(&entry) {
            self.bad_debt_event(account, base_denom, false);
        }
    }
}
