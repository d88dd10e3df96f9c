#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod bad_debt;
pub mod cache;
pub mod config;
pub mod exchange;
pub mod helpers;
pub mod hooks;
pub mod interest;
pub mod ledger;
pub mod limits;
pub mod oracle;
pub mod positions;
pub mod storage;
pub mod validation;
pub mod views;

use cache::Cache;
pub use common_errors::*;
pub use common_proxies::*;
pub use common_structs::*;

#[multiversx_sc::contract]
pub trait Leverage:
    positions::account::PositionAccountModule
    + positions::supply::PositionSupplyModule
    + positions::withdraw::PositionWithdrawModule
    + positions::borrow::PositionBorrowModule
    + positions::repay::PositionRepayModule
    + positions::liquidation::PositionLiquidationModule
    + config::ConfigModule
    + storage::Storage
    + validation::ValidationModule
    + ledger::LedgerModule
    + exchange::ExchangeRateModule
    + interest::InterestModule
    + oracle::OracleModule
    + hooks::HooksModule
    + limits::LimitsModule
    + bad_debt::BadDebtModule
    + views::ViewsModule
    + helpers::MathsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::pause::PauseModule
{
    /// Initializes the leverage market.
    ///
    /// # Arguments
    /// - `oracle_address`: Contract publishing spot and historic median prices.
    /// - `params`: Module wide liquidation parameters.
    #[init]
    fn init(&self, oracle_address: ManagedAddress, params: LeverageParams<Self::Api>) {
        self.set_oracle_address(oracle_address);
        self.set_params(params);
        self.last_interest_time()
            .set(self.blockchain().get_block_timestamp());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Deposits base tokens and sends the minted uTokens to the caller.
    ///
    /// # Payment
    /// - One fungible payment of a registered, supply enabled base token.
    #[payable]
    #[endpoint(supply)]
    fn supply(&self) -> EsdtTokenPayment {
        let payment = self.require_single_payment();
        let mut cache = self.open_operation(Some(&payment));
        let caller = self.blockchain().get_caller();

        let minted = self.process_supply(&caller, &payment, &mut cache);
        self.tx().to(&caller).esdt(minted.clone()).transfer_if_not_empty();

        minted
    }

    /// Deposits base tokens and keeps the minted uTokens as the caller's collateral.
    #[payable]
    #[endpoint(supplyCollateral)]
    fn supply_collateral(&self) -> EsdtTokenPayment {
        let payment = self.require_single_payment();
        let mut cache = self.open_operation(Some(&payment));
        let caller = self.blockchain().get_caller();

        self.process_supply_collateral(&caller, &payment, &mut cache)
    }

    /// Redeems `amount` uTokens, sent with the call first and taken from collateral after.
    ///
    /// # Payment
    /// - Optional, uTokens of `u_token` from the caller's wallet. Unused ones are returned.
    #[payable]
    #[endpoint(withdraw)]
    fn withdraw(&self, u_token: TokenIdentifier, amount: BigUint) -> EgldOrEsdtTokenPayment {
        let wallet = self.wallet_portion(&u_token);
        let mut cache = self.open_operation(None);
        let caller = self.blockchain().get_caller();

        let (redeemed, refund) =
            self.process_withdraw(&caller, &u_token, &amount, &wallet, &mut cache);
        self.send_withdrawal(&caller, &u_token, &redeemed, &refund);

        redeemed
    }

    /// Withdraws the largest amount of `base_denom` the position and market allow.
    #[payable]
    #[endpoint(maxWithdraw)]
    fn max_withdraw(&self, base_denom: EgldOrEsdtTokenIdentifier) -> EgldOrEsdtTokenPayment {
        let mut cache = self.open_operation(None);
        let u_token = self.require_u_token_id(&base_denom, &cache);
        let wallet = self.wallet_portion(&u_token);
        let caller = self.blockchain().get_caller();

        let (redeemed, refund) =
            self.process_max_withdraw(&caller, &base_denom, &wallet, &mut cache);
        self.send_withdrawal(&caller, &u_token, &redeemed, &refund);

        redeemed
    }

    fn send_withdrawal(
        &self,
        caller: &ManagedAddress,
        u_token: &TokenIdentifier,
        redeemed: &EgldOrEsdtTokenPayment,
        refund: &BigUint,
    ) {
        self.tx().to(caller).payment(redeemed).transfer_if_not_empty();
        if refund > &BigUint::zero() {
            self.tx()
                .to(caller)
                .single_esdt(u_token, 0, refund)
                .transfer();
        }
    }

    /// Moves the attached uTokens into the caller's collateral.
    #[payable]
    #[endpoint(collateralize)]
    fn collateralize(&self) {
        let payment = self.require_single_payment();
        require!(payment.token_identifier.is_esdt(), ERROR_INVALID_PAYMENT);
        let mut cache = self.open_operation(None);
        let caller = self.blockchain().get_caller();

        self.process_collateralize(&caller, &payment.unwrap_esdt(), &mut cache);
    }

    /// Returns `amount` collateral uTokens to the caller's wallet.
    #[endpoint(decollateralize)]
    fn decollateralize(&self, u_token: TokenIdentifier, amount: BigUint) -> EsdtTokenPayment {
        let mut cache = self.open_operation(None);
        let caller = self.blockchain().get_caller();

        let released = self.process_decollateralize(&caller, &u_token, &amount, &mut cache);
        self.tx().to(&caller).esdt(released.clone()).transfer_if_not_empty();

        released
    }

    #[endpoint(borrow)]
    fn borrow(&self, base_denom: EgldOrEsdtTokenIdentifier, amount: BigUint) -> EgldOrEsdtTokenPayment {
        let mut cache = self.open_operation(None);
        let caller = self.blockchain().get_caller();

        let borrowed = self.process_borrow(&caller, &base_denom, &amount, &mut cache);
        self.tx().to(&caller).payment(&borrowed).transfer_if_not_empty();

        borrowed
    }

    #[endpoint(maxBorrow)]
    fn max_borrow(&self, base_denom: EgldOrEsdtTokenIdentifier) -> EgldOrEsdtTokenPayment {
        let mut cache = self.open_operation(None);
        let caller = self.blockchain().get_caller();

        let borrowed = self.process_max_borrow(&caller, &base_denom, &mut cache);
        self.tx().to(&caller).payment(&borrowed).transfer_if_not_empty();

        borrowed
    }

    /// Repays the borrow of `borrower` (the caller by default) in the payment token.
    /// Anything above the amount owed is returned to the caller.
    #[payable]
    #[endpoint(repay)]
    fn repay(&self, opt_borrower: OptionalValue<ManagedAddress>) -> BigUint {
        let payment = self.require_single_payment();
        let mut cache = self.open_operation(Some(&payment));
        let caller = self.blockchain().get_caller();
        let borrower = opt_borrower.into_option().unwrap_or_else(|| caller.clone());

        let (repaid, refund) = self.process_repay(&caller, &borrower, &payment, &mut cache);
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&payment.token_identifier, 0, &refund)
            .transfer_if_not_empty();

        repaid
    }

    /// Repays part of an eligible borrower's debt in exchange for their collateral.
    ///
    /// # Arguments
    /// - `borrower`: Account being liquidated.
    /// - `reward`: A base token id for a base token reward, or a uToken id for a reward
    ///   paid in collateral uTokens.
    ///
    /// # Payment
    /// - The repay token. The part the liquidation does not use is returned.
    #[payable]
    #[endpoint(liquidate)]
    fn liquidate(
        &self,
        borrower: ManagedAddress,
        reward: EgldOrEsdtTokenIdentifier,
    ) -> LiquidationResult<Self::Api> {
        let payment = self.require_single_payment();
        let mut cache = self.open_operation(Some(&payment));
        let caller = self.blockchain().get_caller();

        let (result, refund) =
            self.process_liquidation(&caller, &borrower, &payment, &reward, &mut cache);

        self.tx()
            .to(&caller)
            .payment(&result.reward)
            .transfer_if_not_empty();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&payment.token_identifier, 0, &refund)
            .transfer_if_not_empty();

        result
    }

    /// Liquidation without payment. The caller takes over the repaid debt and receives
    /// the reward as collateral.
    ///
    /// Each argument can be left empty on its own: no repay or reward denom selects the
    /// borrower's largest borrow or collateral, no `max_repay` means no cap.
    #[endpoint(leveragedLiquidate)]
    fn leveraged_liquidate(
        &self,
        borrower: ManagedAddress,
        repay: Option<EgldOrEsdtTokenIdentifier>,
        reward: Option<EgldOrEsdtTokenIdentifier>,
        max_repay: Option<BigUint>,
    ) -> LiquidationResult<Self::Api> {
        let mut cache = self.open_operation(None);
        let caller = self.blockchain().get_caller();

        self.process_leveraged_liquidation(&caller, &borrower, repay, reward, max_repay, &mut cache)
    }

    /// Accrues interest on every market up to the current block.
    #[endpoint(accrueInterest)]
    fn accrue_interest(&self) {
        let mut cache = Cache::new(self);
        self.accrue_all_interest(&mut cache);
    }

    /// Repays flagged bad debt out of reserves.
    #[endpoint(sweepBadDebts)]
    fn sweep_bad_debts_endpoint(&self) {
        let mut cache = Cache::new(self);
        self.accrue_all_interest(&mut cache);
        self.sweep_bad_debts(&mut cache);
    }

    /// Cache for a state changing handler, with interest accrued up to the current block.
    /// `payment` is already in the module balance and stays excluded until it is booked.
    fn open_operation(&self, payment: Option<&EgldOrEsdtTokenPayment>) -> Cache<Self> {
        self.require_not_paused();

        let mut cache = Cache::new(self);
        cache.unsettled = payment.cloned();
        self.accrue_all_interest(&mut cache);

        cache
    }
}
