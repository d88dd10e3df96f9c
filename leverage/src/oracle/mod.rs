multiversx_sc::imports!();

pub mod median;

use common_constants::WAD_PRECISION;
use common_structs::{OracleError, PriceMode, Token};

use crate::{cache::Cache, storage};

/// Reads USD prices from the oracle contract's storage.
///
/// Every price is WAD based and expressed per whole token (`10^exponent` units).
/// Failures are reported as `OracleError` so that read paths can skip an asset while
/// write paths abort with the error's message.
#[multiversx_sc::module]
pub trait OracleModule: storage::Storage + common_math::SharedMathModule {
    /// Latest spot price of `symbol`.
    ///
    /// # Errors
    /// - `OracleError::MissingPrice`: The oracle holds no price, or a zero price.
    fn spot_price(
        &self,
        symbol: &ManagedBuffer,
        cache: &mut Cache<Self>,
    ) -> Result<ManagedDecimal<Self::Api, NumDecimals>, OracleError> {
        if cache.spot_prices.contains(symbol) {
            return Ok(self.to_decimal_wad(cache.spot_prices.get(symbol)));
        }

        let mapper = self.oracle_spot_price(cache.oracle_address.clone(), symbol.clone());
        if mapper.is_empty() {
            return Err(OracleError::MissingPrice);
        }

        let price = mapper.get();
        if price == 0u64 {
            return Err(OracleError::MissingPrice);
        }

        cache.spot_prices.put(symbol, &price);
        Ok(self.to_decimal_wad(price))
    }

    /// Median of the newest `token.historic_medians` oracle medians.
    /// Tokens that require no samples use the spot price.
    ///
    /// # Errors
    /// - `OracleError::InsufficientHistory`: Fewer medians than required are stored.
    /// - `OracleError::MissingPrice`: The median is zero, or the spot fallback is missing.
    fn historic_price(
        &self,
        token: &Token<Self::Api>,
        cache: &mut Cache<Self>,
    ) -> Result<ManagedDecimal<Self::Api, NumDecimals>, OracleError> {
        let required = token.historic_medians;
        if required == 0 {
            return self.spot_price(&token.symbol, cache);
        }

        if cache.historic_prices.contains(&token.symbol) {
            return Ok(self.to_decimal_wad(cache.historic_prices.get(&token.symbol)));
        }

        let oracle = cache.oracle_address.clone();
        let stored = self
            .oracle_historic_median_count(oracle.clone(), token.symbol.clone())
            .get();
        if stored < required {
            return Err(OracleError::InsufficientHistory);
        }

        let mut samples = ManagedVec::new();
        for index in (stored - required)..stored {
            samples.push(
                self.oracle_historic_median(oracle.clone(), token.symbol.clone(), index)
                    .get(),
            );
        }

        let price = median::calculate(&samples).ok_or(OracleError::InsufficientHistory)?;
        if price == 0u64 {
            return Err(OracleError::MissingPrice);
        }

        cache.historic_prices.put(&token.symbol, &price);
        Ok(self.to_decimal_wad(price))
    }

    /// Price of `token` under the requested policy.
    ///
    /// `Low` and `High` need both the spot and the historic price. Either one missing
    /// fails the whole lookup.
    fn token_price(
        &self,
        token: &Token<Self::Api>,
        mode: PriceMode,
        cache: &mut Cache<Self>,
    ) -> Result<ManagedDecimal<Self::Api, NumDecimals>, OracleError> {
        match mode {
            PriceMode::Spot => self.spot_price(&token.symbol, cache),
            PriceMode::Historic => self.historic_price(token, cache),
            PriceMode::Low => {
                let spot = self.spot_price(&token.symbol, cache)?;
                let historic = self.historic_price(token, cache)?;
                Ok(self.get_min(spot, historic))
            },
            PriceMode::High => {
                let spot = self.spot_price(&token.symbol, cache)?;
                let historic = self.historic_price(token, cache)?;
                Ok(self.get_max(spot, historic))
            },
        }
    }

    fn require_token_price(
        &self,
        token: &Token<Self::Api>,
        mode: PriceMode,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        match self.token_price(token, mode, cache) {
            Ok(price) => price,
            Err(err) => sc_panic!(err.message()),
        }
    }

    /// USD value of `amount` base units, truncated at WAD.
    fn token_value(
        &self,
        token: &Token<Self::Api>,
        amount: &BigUint,
        mode: PriceMode,
        cache: &mut Cache<Self>,
    ) -> Result<ManagedDecimal<Self::Api, NumDecimals>, OracleError> {
        let price = self.token_price(token, mode, cache)?;

        Ok(self.value_of(token, amount, &price))
    }

    fn value_of(
        &self,
        token: &Token<Self::Api>,
        amount: &BigUint,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let amount = self.amount_to_decimal(amount, token.exponent);

        self.mul_floor(&amount, price, WAD_PRECISION)
    }

    /// Base units of `token` worth `value` at `price`, rounded down.
    fn tokens_for_value(
        &self,
        token: &Token<Self::Api>,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        if price == &self.wad_zero() {
            return BigUint::zero();
        }

        let whole_tokens = self.div_floor(value, price, WAD_PRECISION);

        whole_tokens
            .rescale(token.exponent as usize)
            .into_raw_units()
            .clone()
    }
}
