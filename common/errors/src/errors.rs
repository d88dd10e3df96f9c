#![no_std]

// Validation

pub static ERROR_TOKEN_NOT_REGISTERED: &[u8] = b"Token not registered.";

pub static ERROR_TOKEN_ALREADY_REGISTERED: &[u8] = b"Token already registered.";

pub static ERROR_SYMBOL_ALREADY_USED: &[u8] = b"Symbol already used by another token.";

pub static ERROR_EMPTY_DENOM: &[u8] = b"Token denom can not be empty.";

pub static ERROR_EMPTY_SYMBOL: &[u8] = b"Token symbol can not be empty.";

pub static ERROR_EMPTY_ADDRESS: &[u8] = b"Address can not be empty.";

pub static ERROR_INVALID_EXPONENT: &[u8] = b"Invalid token exponent.";

pub static ERROR_INVALID_RATIO: &[u8] = b"Ratio must be between 0 and 1.";

pub static ERROR_INVALID_WEIGHT_THRESHOLD: &[u8] =
    b"Liquidation threshold must be higher than collateral weight.";

pub static ERROR_INVALID_RATE_CURVE: &[u8] =
    b"Borrow rates must satisfy base <= kink <= max.";

pub static ERROR_INVALID_KINK: &[u8] = b"Kink utilization must be strictly between 0 and 1.";

pub static ERROR_INVALID_HISTORIC_MEDIANS: &[u8] = b"Too many historic medians required.";

pub static ERROR_BLACKLISTED_ENABLED: &[u8] =
    b"Blacklisted token can not have supply or borrow enabled.";

pub static ERROR_BLACKLISTED: &[u8] = b"Token is blacklisted.";

pub static ERROR_SUPPLY_NOT_ENABLED: &[u8] = b"Supply is not enabled for this token.";

pub static ERROR_BORROW_NOT_ENABLED: &[u8] = b"Borrow is not enabled for this token.";

pub static ERROR_NOT_UTOKEN: &[u8] = b"Asset is not a uToken.";

pub static ERROR_UTOKEN_NOT_ALLOWED: &[u8] = b"uTokens are not accepted here.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Invalid payment.";

pub static ERROR_UTOKEN_ALREADY_ISSUED: &[u8] = b"uToken already issued for this token.";

pub static ERROR_UTOKEN_NOT_ISSUED: &[u8] = b"uToken not issued for this token.";

pub static ERROR_TOKEN_IN_USE: &[u8] = b"Token still has supply, borrows or reserves.";

pub static ERROR_INVALID_SPECIAL_PAIR: &[u8] = b"Special asset pair must pair two different tokens.";

pub static ERROR_HOOK_ALREADY_ADDED: &[u8] = b"Hook already added.";

pub static ERROR_INVALID_PARAMS: &[u8] = b"Invalid leverage parameters.";

// Solvency

pub static ERROR_UNDERCOLLATERALIZED: &[u8] = b"Borrow positions are undercollateralized.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] = b"Insufficient collateral.";

pub static ERROR_BONDED_COLLATERAL: &[u8] = b"Collateral is bonded and can not be removed.";

pub static ERROR_LENDING_POOL_INSUFFICIENT: &[u8] = b"Lending pool insufficient liquidity.";

pub static ERROR_MAX_SUPPLY: &[u8] = b"Market total supply would exceed max supply.";

pub static ERROR_MAX_SUPPLY_UTILIZATION: &[u8] =
    b"Market supply utilization would exceed max supply utilization.";

pub static ERROR_MAX_COLLATERAL_SHARE: &[u8] =
    b"Market total collateral would exceed max collateral share.";

pub static ERROR_MIN_COLLATERAL_LIQUIDITY: &[u8] =
    b"Market collateral liquidity would fall below min collateral liquidity.";

pub static ERROR_MAX_WITHDRAW_ZERO: &[u8] = b"Max withdraw amount is zero.";

pub static ERROR_MAX_BORROW_ZERO: &[u8] = b"Max borrow amount is zero.";

pub static ERROR_REPAY_NOTHING_OWED: &[u8] = b"Account has no borrow of this token.";

// Liquidation

pub static ERROR_LIQUIDATION_INELIGIBLE: &[u8] = b"Borrower is not eligible for liquidation.";

pub static ERROR_LIQUIDATION_REPAY_ZERO: &[u8] = b"Liquidation would repay zero tokens.";

pub static ERROR_INVALID_REWARD: &[u8] = b"Invalid liquidation reward selection.";

pub static ERROR_SELF_LIQUIDATION: &[u8] = b"Account can not liquidate itself.";

// Oracle

pub static ERROR_MISSING_PRICE: &[u8] = b"Oracle price is missing.";

pub static ERROR_INSUFFICIENT_HISTORIC_PRICES: &[u8] = b"Not enough historic median prices.";

// Interest

pub static ERROR_NEGATIVE_TIME_ELAPSED: &[u8] = b"Interest accrual time can not move backwards.";

pub static ERROR_EXCESSIVE_TIME_ELAPSED: &[u8] = b"One year or more elapsed since last accrual.";

// Invariants

pub static ERROR_INVARIANT_BORROW_TOTAL: &[u8] =
    b"Sum of adjusted borrows differs from adjusted total borrowed.";

pub static ERROR_INVARIANT_COLLATERAL_SUPPLY: &[u8] = b"Total collateral exceeds uToken supply.";

pub static ERROR_INVARIANT_RESERVES: &[u8] = b"Reserves exceed module balance plus borrows.";

// Callbacks

