use common_constants::WAD_PRECISION;

use crate::{cache::Cache, ledger, storage};

multiversx_sc::imports!();

/// Token to uToken conversion derived from ledger aggregates.
///
/// **Formula**: `rate = (module_balance + total_borrowed - reserves) / u_token_supply`,
/// WAD based and equal to 1 while nothing is supplied. Conversions that pay out to a user
/// are truncated.
#[multiversx_sc::module]
pub trait ExchangeRateModule:
    storage::Storage + ledger::LedgerModule + common_math::SharedMathModule
{
    /// Module balance of `base_denom`, ignoring a payment that is still being processed.
    fn module_balance(&self, base_denom: &EgldOrEsdtTokenIdentifier, cache: &Cache<Self>) -> BigUint {
        let balance = self.blockchain().get_sc_balance(base_denom, 0);
        let pending = cache.unsettled_amount(base_denom);

        if balance > pending {
            balance - pending
        } else {
            BigUint::zero()
        }
    }

    /// Tokens that can leave the module: balance not held as reserves.
    fn available_liquidity(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        cache: &Cache<Self>,
    ) -> BigUint {
        let balance = self.module_balance(base_denom, cache);
        let reserves = self.reserves(base_denom).get();

        if balance > reserves {
            balance - reserves
        } else {
            BigUint::zero()
        }
    }

    fn exchange_rate(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        cache: &Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let Some(u_token) = cache.try_get_u_token_id(base_denom) else {
            return self.wad();
        };

        let supply = self.u_token_supply(&u_token).get();
        if supply == 0u64 {
            return self.wad();
        }

        let gross = self.module_balance(base_denom, cache) + self.total_borrowed(base_denom);
        let reserves = self.reserves(base_denom).get();
        if gross <= reserves {
            return self.wad_zero();
        }

        let net = self.to_decimal(gross - reserves, 0);
        let supply = self.to_decimal(supply, 0);

        self.div_floor(&net, &supply, WAD_PRECISION)
    }

    /// uTokens minted for `amount` base units, rounded down.
    fn to_u_token_amount(
        &self,
        amount: &BigUint,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        if rate == &self.wad_zero() {
            return BigUint::zero();
        }

        let amount = self.to_decimal(amount.clone(), 0);
        self.floor_to_int(&self.div_floor(&amount, rate, WAD_PRECISION))
    }

    /// Base units redeemed by `u_amount` uTokens, rounded down.
    fn to_token_amount(
        &self,
        u_amount: &BigUint,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let u_amount = self.to_decimal(u_amount.clone(), 0);

        self.floor_to_int(&self.mul_floor(&u_amount, rate, WAD_PRECISION))
    }

    /// Base token value of every uToken of `u_token` held as collateral.
    fn total_collateral_tokens(
        &self,
        base_denom: &EgldOrEsdtTokenIdentifier,
        u_token: &TokenIdentifier,
        cache: &Cache<Self>,
    ) -> BigUint {
        let rate = self.exchange_rate(base_denom, cache);

        self.to_token_amount(&self.total_collateral(u_token).get(), &rate)
    }
}
