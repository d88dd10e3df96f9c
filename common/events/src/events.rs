#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("register_token")]
    fn register_token_event(
        &self,
        #[indexed] base_denom: &EgldOrEsdtTokenIdentifier,
        #[indexed] symbol: &ManagedBuffer,
        token: &Token<Self::Api>,
    );

    #[event("update_token")]
    fn update_token_event(
        &self,
        #[indexed] base_denom: &EgldOrEsdtTokenIdentifier,
        token: &Token<Self::Api>,
    );

    #[event("remove_token")]
    fn remove_token_event(&self, #[indexed] base_denom: &EgldOrEsdtTokenIdentifier);

    #[event("bind_u_token")]
    fn bind_u_token_event(
        &self,
        #[indexed] base_denom: &EgldOrEsdtTokenIdentifier,
        #[indexed] u_token: &TokenIdentifier,
    );

    #[event("special_asset_pair")]
    fn special_asset_pair_event(
        &self,
        #[indexed] collateral: &EgldOrEsdtTokenIdentifier,
        #[indexed] borrow: &EgldOrEsdtTokenIdentifier,
        #[indexed] collateral_weight: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] liquidation_threshold: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("update_params")]
    fn update_params_event(&self, params: &LeverageParams<Self::Api>);

    #[event("supply")]
    fn supply_event(
        &self,
        #[indexed] supplier: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenPayment,
        #[indexed] u_token: &EsdtTokenPayment,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] supplier: &ManagedAddress,
        #[indexed] u_token: &EsdtTokenPayment,
        #[indexed] asset: &EgldOrEsdtTokenPayment,
        #[indexed] from_collateral: &BigUint,
    );

    #[event("collateralize")]
    fn collateralize_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] u_token: &EsdtTokenPayment,
    );

    #[event("decollateralize")]
    fn decollateralize_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] u_token: &EsdtTokenPayment,
    );

    #[event("borrow")]
    fn borrow_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenPayment,
    );

    #[event("repay")]
    fn repay_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenPayment,
        #[indexed] caller: &ManagedAddress,
    );

    #[event("liquidate")]
    fn liquidate_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] leveraged: bool,
        result: &LiquidationResult<Self::Api>,
    );

    // Emitted once per market touched by an accrual epoch
    #[event("accrue_interest")]
    fn accrue_interest_event(
        &self,
        #[indexed] denom: &EgldOrEsdtTokenIdentifier,
        #[indexed] timestamp: u64,
        #[indexed] interest_scalar: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] interest_accrued: &BigUint,
        #[indexed] new_reserves: &BigUint,
    );

    #[event("bad_debt")]
    fn bad_debt_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] denom: &EgldOrEsdtTokenIdentifier,
        #[indexed] flagged: bool,
    );

    #[event("repay_bad_debt")]
    fn repay_bad_debt_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] denom: &EgldOrEsdtTokenIdentifier,
        #[indexed] amount: &BigUint,
        #[indexed] remaining: &BigUint,
    );

    #[event("reserves_exhausted")]
    fn reserves_exhausted_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] denom: &EgldOrEsdtTokenIdentifier,
        #[indexed] outstanding: &BigUint,
    );

    #[event("force_unbond")]
    fn force_unbond_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] u_token: &TokenIdentifier,
        #[indexed] target: &BigUint,
    );
}
