use crate::{constants::*, proxys::*};

use common_constants::WAD;
use common_structs::{
    AccountBalances, AccountSummary, LeverageParams, LiquidationResult, MarketSummary,
    SpecialAssetPair, Token,
};
use hooks_mock::HooksMock;
use leverage::config::ConfigModule;
use oracle_mock::OracleMock;

use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EgldOrEsdtTokenPayment, EsdtLocalRole, EsdtTokenPayment,
    ManagedAddress, ManagedBuffer, ManagedDecimal, MultiValueEncoded, ReturnsNewManagedAddress,
    ReturnsResult, TestTokenIdentifier,
};
use multiversx_sc::imports::OptionalValue;
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};

pub static U_TOKEN_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::Mint, EsdtLocalRole::Burn];

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(LEVERAGE_PATH, leverage::ContractBuilder);
    blockchain.register_contract(ORACLE_MOCK_PATH, oracle_mock::ContractBuilder);
    blockchain.register_contract(HOOKS_MOCK_PATH, hooks_mock::ContractBuilder);

    blockchain
}

pub fn denom(token: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier())
}

pub fn default_params() -> LeverageParams<StaticApi> {
    LeverageParams {
        complete_liquidation_threshold: bps(COMPLETE_LIQUIDATION_THRESHOLD),
        minimum_close_factor: bps(MINIMUM_CLOSE_FACTOR),
        small_liquidation_size: wad_units(SMALL_LIQUIDATION_SIZE_IN_DOLLARS),
        direct_liquidation_fee: bps(DIRECT_LIQUIDATION_FEE),
    }
}

pub fn token_config(
    token: TestTokenIdentifier,
    symbol: &[u8],
    exponent: u32,
    collateral_weight: u64,
    liquidation_threshold: u64,
) -> Token<StaticApi> {
    Token {
        base_denom: denom(token),
        symbol: ManagedBuffer::from(symbol),
        exponent,
        reserve_factor: bps(RESERVE_FACTOR),
        collateral_weight: bps(collateral_weight),
        liquidation_threshold: bps(liquidation_threshold),
        base_borrow_rate: bps(BASE_BORROW_RATE),
        kink_borrow_rate: bps(KINK_BORROW_RATE),
        max_borrow_rate: bps(MAX_BORROW_RATE),
        kink_utilization: bps(KINK_UTILIZATION),
        liquidation_incentive: bps(LIQUIDATION_INCENTIVE),
        max_collateral_share: bps(10_000),
        max_supply_utilization: bps(10_000),
        min_collateral_liquidity: bps(0),
        max_supply: BigUint::zero(),
        historic_medians: 0,
        enable_supply: true,
        enable_borrow: true,
        blacklist: false,
    }
}

pub fn usdc_config() -> Token<StaticApi> {
    token_config(
        USDC_TOKEN,
        USDC_SYMBOL,
        USDC_DECIMALS,
        USDC_COLLATERAL_WEIGHT,
        USDC_LIQUIDATION_THRESHOLD,
    )
}

pub fn egld_config() -> Token<StaticApi> {
    token_config(
        EGLD_TOKEN,
        EGLD_SYMBOL,
        EGLD_DECIMALS,
        EGLD_COLLATERAL_WEIGHT,
        EGLD_LIQUIDATION_THRESHOLD,
    )
}

pub fn xoxno_config() -> Token<StaticApi> {
    token_config(XOXNO_TOKEN, XOXNO_SYMBOL, XOXNO_DECIMALS, 5_000, 6_000)
}

pub struct LeverageTestState {
    pub world: ScenarioWorld,
    pub leverage_sc: ManagedAddress<StaticApi>,
}

impl Default for LeverageTestState {
    fn default() -> Self {
        Self::new()
    }
}

impl LeverageTestState {
    /// Leverage market with USDC and WEGLD registered, uTokens bound and prices set.
    /// The hooks mock is registered both as token hook and as bond hook.
    pub fn new() -> Self {
        let mut world = world();
        world.current_block().block_timestamp(START_TIMESTAMP);

        setup_accounts(&mut world);
        setup_oracle(&mut world);
        setup_hooks(&mut world);

        let leverage_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_leverage::LeverageProxy)
            .init(ORACLE_ADDRESS.to_managed_address(), default_params())
            .code(LEVERAGE_PATH)
            .new_address(LEVERAGE_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self { world, leverage_sc };

        state.add_token_hook(HOOKS_ADDRESS.to_managed_address());
        state.add_bond_hook(HOOKS_ADDRESS.to_managed_address());

        state.register_token(usdc_config());
        state.register_token(egld_config());
        state.bind_u_token(USDC_TOKEN, U_USDC_TOKEN);
        state.bind_u_token(EGLD_TOKEN, U_EGLD_TOKEN);

        state.set_price(USDC_SYMBOL, USDC_PRICE_IN_DOLLARS as u128 * WAD);
        state.set_price(EGLD_SYMBOL, EGLD_PRICE_IN_DOLLARS as u128 * WAD);

        state
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Oracle
    pub fn set_price(&mut self, symbol: &'static [u8], price_wad: u128) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_ADDRESS)
            .whitebox(oracle_mock::contract_obj, |sc| {
                sc.submit_price(ManagedBuffer::from(symbol), BigUint::from(price_wad));
            });
    }

    pub fn clear_price(&mut self, symbol: &'static [u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_ADDRESS)
            .whitebox(oracle_mock::contract_obj, |sc| {
                sc.clear_price(ManagedBuffer::from(symbol));
            });
    }

    pub fn stamp_median(&mut self, symbol: &'static [u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(ORACLE_ADDRESS)
            .whitebox(oracle_mock::contract_obj, |sc| {
                sc.stamp_median(ManagedBuffer::from(symbol));
            });
    }

    // Hooks
    pub fn bond(&mut self, account: TestAddress<'static>, u_token: TestTokenIdentifier<'static>, amount: u128) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(HOOKS_ADDRESS)
            .whitebox(hooks_mock::contract_obj, |sc| {
                sc.bond(
                    account.to_managed_address(),
                    u_token.to_token_identifier(),
                    BigUint::from(amount),
                );
            });
    }

    pub fn reject_registrations(&mut self, reject: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(HOOKS_ADDRESS)
            .whitebox(hooks_mock::contract_obj, |sc| {
                sc.set_reject_registrations(reject);
            });
    }

    pub fn assert_bonded(&mut self, account: TestAddress<'static>, u_token: TestTokenIdentifier<'static>, expected: u128) {
        self.world
            .query()
            .to(HOOKS_ADDRESS)
            .whitebox(hooks_mock::contract_obj, |sc| {
                let bonded = sc.bonded(account.to_managed_address(), u_token.to_token_identifier());
                assert_eq!(bonded, BigUint::from(expected));
            });
    }

    pub fn assert_known_symbol(&mut self, symbol: &'static [u8], known: bool) {
        self.world
            .query()
            .to(HOOKS_ADDRESS)
            .whitebox(hooks_mock::contract_obj, |sc| {
                assert_eq!(sc.known_symbols().contains(&ManagedBuffer::from(symbol)), known);
            });
    }

    // Registry
    pub fn register_token(&mut self, token: Token<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .register_token(token)
            .run();
    }

    pub fn register_token_error(&mut self, from: TestAddress, token: Token<StaticApi>, error_message: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .register_token(token)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn update_token(&mut self, token: Token<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .update_token(token)
            .run();
    }

    pub fn set_params(&mut self, params: LeverageParams<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .set_params(params)
            .run();
    }

    pub fn remove_token(&mut self, token: TestTokenIdentifier) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .remove_token(denom(token))
            .run();
    }

    pub fn remove_token_error(&mut self, token: TestTokenIdentifier, error_message: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .remove_token(denom(token))
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Binds an already issued uToken, standing in for the issue callback.
    pub fn bind_u_token(&mut self, base: TestTokenIdentifier<'static>, u_token: TestTokenIdentifier<'static>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(LEVERAGE_ADDRESS)
            .whitebox(leverage::contract_obj, |sc| {
                sc.bind_u_token(
                    &EgldOrEsdtTokenIdentifier::esdt(base.to_token_identifier()),
                    &u_token.to_token_identifier(),
                );
            });

        self.world
            .set_esdt_local_roles(self.leverage_sc.clone(), u_token.as_bytes(), U_TOKEN_ROLES);
    }

    pub fn set_special_asset_pair(
        &mut self,
        collateral: TestTokenIdentifier,
        borrow: TestTokenIdentifier,
        collateral_weight: u64,
        liquidation_threshold: u64,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .set_special_asset_pair(
                denom(collateral),
                denom(borrow),
                bps(collateral_weight),
                bps(liquidation_threshold),
            )
            .run();
    }

    pub fn special_asset_pairs(&mut self) -> Vec<SpecialAssetPair<StaticApi>> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_special_asset_pairs()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn add_token_hook(&mut self, hook: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .add_token_hook(hook)
            .run();
    }

    pub fn add_bond_hook(&mut self, hook: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .add_bond_hook(hook)
            .run();
    }

    pub fn set_protected_supply(&mut self, token: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .set_protected_supply(denom(token), amount)
            .run();
    }

    /// Overwrites the reserves of a market, for scenarios that need reserves up front.
    pub fn force_reserves(&mut self, token: TestTokenIdentifier<'static>, amount: u128) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(LEVERAGE_ADDRESS)
            .whitebox(leverage::contract_obj, |sc| {
                use leverage::storage::Storage;

                sc.reserves(&EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier()))
                    .set(BigUint::from(amount));
            });
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .unpause_endpoint()
            .run();
    }

    // Supply side
    pub fn supply(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> EsdtTokenPayment<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .supply()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn supply_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .supply()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn supply_collateral(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> EsdtTokenPayment<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .supply_collateral()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn supply_collateral_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .supply_collateral()
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn collateralize(&mut self, from: &TestAddress, u_token: TestTokenIdentifier, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .collateralize()
            .single_esdt(&u_token.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn decollateralize(
        &mut self,
        from: &TestAddress,
        u_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> EsdtTokenPayment<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .decollateralize(u_token.to_token_identifier(), amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn decollateralize_error(
        &mut self,
        from: &TestAddress,
        u_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .decollateralize(u_token.to_token_identifier(), amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Withdraws `amount` uTokens, sending `wallet` uTokens along with the call.
    pub fn withdraw(
        &mut self,
        from: &TestAddress,
        u_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        wallet: BigUint<StaticApi>,
    ) -> EgldOrEsdtTokenPayment<StaticApi> {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .withdraw(u_token.to_token_identifier(), amount);

        if wallet == 0u64 {
            call.returns(ReturnsResult).run()
        } else {
            call.single_esdt(&u_token.to_token_identifier(), 0, &wallet)
                .returns(ReturnsResult)
                .run()
        }
    }

    pub fn withdraw_error(
        &mut self,
        from: &TestAddress,
        u_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        wallet: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        let call = self
            .world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .withdraw(u_token.to_token_identifier(), amount);

        if wallet == 0u64 {
            call.returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
                .run();
        } else {
            call.single_esdt(&u_token.to_token_identifier(), 0, &wallet)
                .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
                .run();
        }
    }

    pub fn max_withdraw(&mut self, from: &TestAddress, token: TestTokenIdentifier) -> EgldOrEsdtTokenPayment<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .max_withdraw(denom(token))
            .returns(ReturnsResult)
            .run()
    }

    // Borrow side
    pub fn borrow(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> EgldOrEsdtTokenPayment<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .borrow(denom(token), amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .borrow(denom(token), amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn max_borrow(&mut self, from: &TestAddress, token: TestTokenIdentifier) -> EgldOrEsdtTokenPayment<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .max_borrow(denom(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn repay(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        borrower: OptionalValue<ManagedAddress<StaticApi>>,
    ) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .repay(borrower)
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn repay_error(
        &mut self,
        from: &TestAddress,
        token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .repay(OptionalValue::<ManagedAddress<StaticApi>>::None)
            .single_esdt(&token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Liquidations
    pub fn liquidate(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        repay_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        reward: TestTokenIdentifier,
    ) -> LiquidationResult<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .liquidate(borrower.to_managed_address(), denom(reward))
            .single_esdt(&repay_token.to_token_identifier(), 0, &amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidate_error(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        repay_token: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
        reward: TestTokenIdentifier,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .liquidate(borrower.to_managed_address(), denom(reward))
            .single_esdt(&repay_token.to_token_identifier(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn leveraged_liquidate(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        repay_token: Option<TestTokenIdentifier>,
        reward: Option<TestTokenIdentifier>,
        max_repay: Option<BigUint<StaticApi>>,
    ) -> LiquidationResult<StaticApi> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .leveraged_liquidate(
                borrower.to_managed_address(),
                repay_token.map(denom),
                reward.map(denom),
                max_repay,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn leveraged_liquidate_error(
        &mut self,
        from: &TestAddress,
        borrower: &TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .leveraged_liquidate(
                borrower.to_managed_address(),
                Option::<EgldOrEsdtTokenIdentifier<StaticApi>>::None,
                Option::<EgldOrEsdtTokenIdentifier<StaticApi>>::None,
                Option::<BigUint<StaticApi>>::None,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn accrue_interest(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .accrue_interest()
            .run();
    }

    pub fn sweep_bad_debts(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .sweep_bad_debts()
            .run();
    }

    // Views
    pub fn account_balances(&mut self, account: &TestAddress) -> AccountBalances<StaticApi> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_account_balances(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrowed_amount(&mut self, account: &TestAddress, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        let balances = self.account_balances(account);

        let base = denom(token);
        balances
            .borrowed
            .iter()
            .find(|borrow| borrow.token_identifier == base)
            .map(|borrow| borrow.amount.clone())
            .unwrap_or_default()
    }

    pub fn collateral_amount(&mut self, account: &TestAddress, u_token: TestTokenIdentifier) -> BigUint<StaticApi> {
        let collateral = self
            .world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_collateral(account.to_managed_address())
            .returns(ReturnsResult)
            .run();

        let u_token = u_token.to_token_identifier();
        collateral
            .iter()
            .find(|entry| entry.token_identifier == u_token)
            .map(|entry| entry.amount.clone())
            .unwrap_or_default()
    }

    pub fn reserves(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .reserves(denom(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn u_token_supply(&mut self, u_token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .u_token_supply(u_token.to_token_identifier())
            .returns(ReturnsResult)
            .run()
    }

    pub fn interest_scalar(&mut self, token: TestTokenIdentifier) -> ManagedDecimal<StaticApi, usize> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_interest_scalar_view(denom(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_summary(&mut self, token: TestTokenIdentifier) -> MarketSummary<StaticApi> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_market_summary(denom(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn account_summary(&mut self, account: &TestAddress) -> AccountSummary<StaticApi> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_account_summary(account.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_withdraw_view(
        &mut self,
        account: &TestAddress,
        token: TestTokenIdentifier,
        wallet: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_max_withdraw(account.to_managed_address(), denom(token), wallet)
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_borrow_view(&mut self, account: &TestAddress, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_max_borrow(account.to_managed_address(), denom(token))
            .returns(ReturnsResult)
            .run()
    }

    pub fn max_collateralize_view(&mut self, token: TestTokenIdentifier, offered: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_max_collateralize(denom(token), offered)
            .returns(ReturnsResult)
            .run()
    }

    pub fn liquidation_targets(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .get_liquidation_targets()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn bad_debt_count(&mut self) -> usize {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .bad_debts()
            .returns(ReturnsResult)
            .run()
            .len()
    }

    pub fn borrowers(&mut self) -> Vec<ManagedAddress<StaticApi>> {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .borrowers()
            .returns(ReturnsResult)
            .run()
            .into_iter()
            .collect()
    }

    pub fn check_invariants(&mut self) -> bool {
        self.world
            .query()
            .to(self.leverage_sc.clone())
            .typed(proxy_leverage::LeverageProxy)
            .check_invariants()
            .returns(ReturnsResult)
            .run()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);

    for account in [SUPPLIER_ADDRESS, BORROWER_ADDRESS, LIQUIDATOR_ADDRESS] {
        world
            .account(account)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, units(1_000_000, USDC_DECIMALS))
            .esdt_balance(EGLD_TOKEN, units(10_000, EGLD_DECIMALS))
            .esdt_balance(XOXNO_TOKEN, units(10_000, XOXNO_DECIMALS));
    }
}

pub fn setup_oracle(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .raw_deploy()
        .code(ORACLE_MOCK_PATH)
        .new_address(ORACLE_ADDRESS)
        .whitebox(oracle_mock::contract_obj, |sc| {
            sc.init(MultiValueEncoded::new());
        });
}

pub fn setup_hooks(world: &mut ScenarioWorld) {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .raw_deploy()
        .code(HOOKS_MOCK_PATH)
        .new_address(HOOKS_ADDRESS)
        .whitebox(hooks_mock::contract_obj, |sc| {
            sc.init();
        });
}

/// Supplier liquidity plus a borrower with `collateral` WEGLD posted as collateral.
pub fn setup_borrower(state: &mut LeverageTestState, liquidity: u64, collateral: u64) {
    state.supply(&SUPPLIER_ADDRESS, USDC_TOKEN, units(liquidity, USDC_DECIMALS));
    state.supply_collateral(&BORROWER_ADDRESS, EGLD_TOKEN, units(collateral, EGLD_DECIMALS));
}

/// Raw units of a WAD decimal.
pub fn raw(value: &ManagedDecimal<StaticApi, usize>) -> BigUint<StaticApi> {
    value.into_raw_units().clone()
}
