#![no_std]

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// Fixed point used for prices, USD values, rates and weights
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

/// Largest decimal exponent a registered token may declare
pub const MAX_TOKEN_EXPONENT: u32 = 18;

/// Registry entries kept by the per-transaction token cache before it is flushed
pub const TOKEN_CACHE_CAPACITY: usize = 16;

/// Upper bound for the number of historic medians a token may require
pub const MAX_HISTORIC_MEDIANS: u32 = 100;

pub const DEFAULT_UTOKEN_DECIMALS: usize = 18;
