use common_constants::RAY_PRECISION;

use crate::storage;

multiversx_sc::imports!();

/// Persistent per account state: interest scaled borrows and collateral uTokens.
///
/// Borrows are stored as adjusted amounts so that accrual only touches one scalar per
/// denom. Every write keeps the per denom aggregate in lockstep with the account entry,
/// which makes `sum(adjusted) == adjusted_total` hold exactly.
#[multiversx_sc::module]
pub trait LedgerModule: storage::Storage + common_math::SharedMathModule {
    fn get_interest_scalar(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mapper = self.interest_scalar(base_denom);
        if mapper.is_empty() {
            return self.ray();
        }

        mapper.get()
    }

    fn get_adjusted_borrow(
        &self,
        account: &ManagedAddress,
        base_denom: &EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.adjusted_borrows(account)
            .get(base_denom)
            .unwrap_or_else(|| self.ray_zero())
    }

    fn get_adjusted_total_borrowed(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mapper = self.adjusted_total_borrowed(base_denom);
        if mapper.is_empty() {
            return self.ray_zero();
        }

        mapper.get()
    }

    /// Amount `account` owes in `base_denom`, rounded up.
    fn owed_amount(&self, account: &ManagedAddress, base_denom: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let adjusted = self.get_adjusted_borrow(account, base_denom);

        self.to_owed(&adjusted, &self.get_interest_scalar(base_denom))
    }

    /// Sum owed by every borrower of `base_denom`, rounded up.
    fn total_borrowed(&self, base_denom: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let adjusted = self.get_adjusted_total_borrowed(base_denom);

        self.to_owed(&adjusted, &self.get_interest_scalar(base_denom))
    }

    fn to_owed(
        &self,
        adjusted: &ManagedDecimal<Self::Api, NumDecimals>,
        scalar: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        if adjusted == &self.ray_zero() {
            return BigUint::zero();
        }

        self.ceil_to_int(&self.mul_ceil(adjusted, scalar, RAY_PRECISION))
    }

    fn amount_to_ray(&self, amount: &BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(amount.clone(), 0).rescale(RAY_PRECISION)
    }

    /// Adds `amount` to the debt of `account`. The adjusted delta is rounded up, so a
    /// non-zero borrow never stores a zero adjusted amount.
    fn increase_borrow(
        &self,
        account: &ManagedAddress,
        base_denom: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) {
        if amount == &BigUint::zero() {
            return;
        }

        let scalar = self.get_interest_scalar(base_denom);
        let delta = self.div_ceil(&self.amount_to_ray(amount), &scalar, RAY_PRECISION);

        let adjusted = self.get_adjusted_borrow(account, base_denom) + delta.clone();
        self.adjusted_borrows(account).insert(base_denom.clone(), adjusted);

        let total = self.get_adjusted_total_borrowed(base_denom) + delta;
        self.adjusted_total_borrowed(base_denom).set(total);

        self.borrowers().insert(account.clone());
    }

    /// Removes `amount` from the debt of `account` and returns the amount actually
    /// removed. Repaying at least what is owed clears the entry.
    fn decrease_borrow(
        &self,
        account: &ManagedAddress,
        base_denom: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        let owed = self.owed_amount(account, base_denom);
        if owed == 0u64 || amount == &BigUint::zero() {
            return BigUint::zero();
        }

        let adjusted = self.get_adjusted_borrow(account, base_denom);
        let (delta, repaid) = if amount >= &owed {
            (adjusted.clone(), owed)
        } else {
            let scalar = self.get_interest_scalar(base_denom);
            let delta = self.div_floor(&self.amount_to_ray(amount), &scalar, RAY_PRECISION);

            (delta, amount.clone())
        };

        let remaining = self.sub_or_zero(&adjusted, &delta, RAY_PRECISION);
        let mut borrows = self.adjusted_borrows(account);
        if remaining == self.ray_zero() {
            borrows.remove(base_denom);
        } else {
            borrows.insert(base_denom.clone(), remaining);
        }

        let total = self.get_adjusted_total_borrowed(base_denom);
        self.adjusted_total_borrowed(base_denom)
            .set(self.sub_or_zero(&total, &delta, RAY_PRECISION));

        if borrows.is_empty() {
            self.borrowers().swap_remove(account);
        }

        repaid
    }

    /// Every outstanding borrow of `account`, in base units owed.
    fn account_borrows(&self, account: &ManagedAddress) -> ManagedVec<EgldOrEsdtTokenPayment> {
        let mut borrows = ManagedVec::new();
        for (base_denom, adjusted) in self.adjusted_borrows(account).iter() {
            let owed = self.to_owed(&adjusted, &self.get_interest_scalar(&base_denom));
            if owed > 0u64 {
                borrows.push(EgldOrEsdtTokenPayment::new(base_denom, 0, owed));
            }
        }

        borrows
    }

    fn collateral_amount(&self, account: &ManagedAddress, u_token: &TokenIdentifier) -> BigUint {
        self.collateral(account).get(u_token).unwrap_or_default()
    }

    /// Sets the collateral of `account` and moves the aggregate by the same delta.
    fn set_collateral(&self, account: &ManagedAddress, u_token: &TokenIdentifier, amount: &BigUint) {
        let previous = self.collateral_amount(account, u_token);
        let total_mapper = self.total_collateral(u_token);
        let total = total_mapper.get();

        if amount >= &previous {
            total_mapper.set(total + (amount - &previous));
        } else {
            let delta = &previous - amount;
            total_mapper.set(if total > delta { total - delta } else { BigUint::zero() });
        }

        let mut collateral = self.collateral(account);
        if amount == &BigUint::zero() {
            collateral.remove(u_token);
        } else {
            collateral.insert(u_token.clone(), amount.clone());
        }
    }

    fn add_collateral(&self, account: &ManagedAddress, u_token: &TokenIdentifier, amount: &BigUint) {
        let current = self.collateral_amount(account, u_token);
        self.set_collateral(account, u_token, &(current + amount));
    }

    fn remove_collateral(&self, account: &ManagedAddress, u_token: &TokenIdentifier, amount: &BigUint) {
        let current = self.collateral_amount(account, u_token);
        let remaining = if &current > amount {
            current - amount
        } else {
            BigUint::zero()
        };
        self.set_collateral(account, u_token, &remaining);
    }

    fn account_collateral(&self, account: &ManagedAddress) -> ManagedVec<EsdtTokenPayment> {
        let mut collateral = ManagedVec::new();
        for (u_token, amount) in self.collateral(account).iter() {
            collateral.push(EsdtTokenPayment::new(u_token, 0, amount));
        }

        collateral
    }

    fn mint_u_tokens(&self, u_token: &TokenIdentifier, amount: &BigUint) {
        self.send().esdt_local_mint(u_token, 0, amount);
        self.u_token_supply(u_token).update(|supply| *supply += amount);
    }

    fn burn_u_tokens(&self, u_token: &TokenIdentifier, amount: &BigUint) {
        self.send().esdt_local_burn(u_token, 0, amount);
        self.u_token_supply(u_token).update(|supply| {
            *supply = if &*supply > amount {
                &*supply - amount
            } else {
                BigUint::zero()
            }
        });
    }
}
