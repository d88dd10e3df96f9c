#![no_std]

use common_errors::{ERROR_INSUFFICIENT_HISTORIC_PRICES, ERROR_MISSING_PRICE};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Registry entry holding the risk and economic parameters of one base token.
///
/// All ratio fields (weights, thresholds, rates, shares) are WAD based decimals in `[0, 1]`,
/// except the borrow rates which are annual rates and may exceed 1.
/// `max_supply` is expressed in base token units, zero meaning unlimited.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Token<M: ManagedTypeApi> {
    pub base_denom: EgldOrEsdtTokenIdentifier<M>,
    pub symbol: ManagedBuffer<M>,
    pub exponent: u32,
    pub reserve_factor: ManagedDecimal<M, NumDecimals>,
    pub collateral_weight: ManagedDecimal<M, NumDecimals>,
    pub liquidation_threshold: ManagedDecimal<M, NumDecimals>,
    pub base_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub kink_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub max_borrow_rate: ManagedDecimal<M, NumDecimals>,
    pub kink_utilization: ManagedDecimal<M, NumDecimals>,
    pub liquidation_incentive: ManagedDecimal<M, NumDecimals>,
    pub max_collateral_share: ManagedDecimal<M, NumDecimals>,
    pub max_supply_utilization: ManagedDecimal<M, NumDecimals>,
    pub min_collateral_liquidity: ManagedDecimal<M, NumDecimals>,
    pub max_supply: BigUint<M>,
    pub historic_medians: u32,
    pub enable_supply: bool,
    pub enable_borrow: bool,
    pub blacklist: bool,
}

impl<M: ManagedTypeApi> Token<M> {
    pub fn can_supply(&self) -> bool {
        self.enable_supply && !self.blacklist
    }

    pub fn can_borrow(&self) -> bool {
        self.enable_borrow && !self.blacklist
    }

    pub fn is_blacklisted(&self) -> bool {
        self.blacklist
    }

    pub fn has_max_supply(&self) -> bool {
        self.max_supply > 0u64
    }
}

/// Module wide liquidation parameters.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LeverageParams<M: ManagedTypeApi> {
    /// Portion of the gap between liquidation threshold and collateral value
    /// after which a borrower can be fully liquidated.
    pub complete_liquidation_threshold: ManagedDecimal<M, NumDecimals>,
    pub minimum_close_factor: ManagedDecimal<M, NumDecimals>,
    /// USD borrowed value at or below which the close factor is always 1.
    pub small_liquidation_size: ManagedDecimal<M, NumDecimals>,
    /// Fraction of the liquidation incentive kept by the module on direct liquidations.
    pub direct_liquidation_fee: ManagedDecimal<M, NumDecimals>,
}

/// Collateral weight and liquidation threshold override for one correlated
/// collateral/borrow combination.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct SpecialAssetPair<M: ManagedTypeApi> {
    pub collateral: EgldOrEsdtTokenIdentifier<M>,
    pub borrow: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_weight: ManagedDecimal<M, NumDecimals>,
    pub liquidation_threshold: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq)]
pub struct BadDebt<M: ManagedTypeApi> {
    pub account: ManagedAddress<M>,
    pub denom: EgldOrEsdtTokenIdentifier<M>,
}

/// Which oracle price a valuation uses.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq)]
pub enum PriceMode {
    Spot,
    Historic,
    /// Lower of spot and historic, used when valuing collateral.
    Low,
    /// Higher of spot and historic, used when valuing borrows.
    High,
}

/// Failure to value an asset. Read paths skip the asset, write paths abort.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OracleError {
    MissingPrice,
    InsufficientHistory,
}

impl OracleError {
    pub fn message(&self) -> &'static [u8] {
        match self {
            OracleError::MissingPrice => ERROR_MISSING_PRICE,
            OracleError::InsufficientHistory => ERROR_INSUFFICIENT_HISTORIC_PRICES,
        }
    }
}

/// Per token market overview returned by the market summary query.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketSummary<M: ManagedTypeApi> {
    pub symbol: ManagedBuffer<M>,
    pub exponent: u32,
    pub u_token: Option<TokenIdentifier<M>>,
    pub oracle_price: Option<ManagedDecimal<M, NumDecimals>>,
    pub oracle_historic_price: Option<ManagedDecimal<M, NumDecimals>>,
    pub u_token_exchange_rate: ManagedDecimal<M, NumDecimals>,
    pub supply_apy: ManagedDecimal<M, NumDecimals>,
    pub borrow_apy: ManagedDecimal<M, NumDecimals>,
    pub utilization: ManagedDecimal<M, NumDecimals>,
    pub supplied: BigUint<M>,
    pub reserved: BigUint<M>,
    pub collateral: BigUint<M>,
    pub borrowed: BigUint<M>,
    pub liquidity: BigUint<M>,
    pub u_token_supply: BigUint<M>,
    pub maximum_borrow: BigUint<M>,
    pub maximum_collateral: BigUint<M>,
    pub minimum_liquidity: BigUint<M>,
    pub available_borrow: BigUint<M>,
    pub available_withdraw: BigUint<M>,
    pub available_collateralize: BigUint<M>,
}

/// USD valuation of one account, both with conservative and with spot prices.
/// Assets whose price is unknown are left out.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountSummary<M: ManagedTypeApi> {
    pub supplied_value: ManagedDecimal<M, NumDecimals>,
    pub collateral_value: ManagedDecimal<M, NumDecimals>,
    pub borrowed_value: ManagedDecimal<M, NumDecimals>,
    pub spot_supplied_value: ManagedDecimal<M, NumDecimals>,
    pub spot_collateral_value: ManagedDecimal<M, NumDecimals>,
    pub spot_borrowed_value: ManagedDecimal<M, NumDecimals>,
    pub borrow_limit: ManagedDecimal<M, NumDecimals>,
    pub liquidation_threshold: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountBalances<M: ManagedTypeApi> {
    /// Base token value of every uToken the account owns, collateral included.
    pub supplied: ManagedVec<M, EgldOrEsdtTokenPayment<M>>,
    /// uTokens the module holds as collateral for the account.
    pub collateral: ManagedVec<M, EsdtTokenPayment<M>>,
    pub borrowed: ManagedVec<M, EgldOrEsdtTokenPayment<M>>,
}

/// Amounts settled by one liquidation.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct LiquidationResult<M: ManagedTypeApi> {
    pub repaid: EgldOrEsdtTokenPayment<M>,
    pub collateral_liquidated: EsdtTokenPayment<M>,
    pub reward: EgldOrEsdtTokenPayment<M>,
}
