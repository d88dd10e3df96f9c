#![no_std]

multiversx_sc::imports!();

pub static ERROR_NOT_FEEDER: &[u8] = b"Only feeders can submit prices.";
pub static ERROR_PRICE_NOT_SET: &[u8] = b"No spot price to stamp.";

/// USD price source read by the leverage contract.
///
/// Feeders push per-symbol spot prices (WAD based). Stamping a symbol appends its current
/// spot price to the list of historic medians. The leverage contract reads `spot_price`,
/// `historic_median` and `historic_median_count` directly from this contract's storage,
/// so those keys are part of the interface.
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        self.add_feeders(feeders);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addFeeders)]
    fn add_feeders(&self, feeders: MultiValueEncoded<ManagedAddress>) {
        for feeder in feeders {
            self.feeders().insert(feeder);
        }
    }

    #[endpoint(submitPrice)]
    fn submit_price(&self, symbol: ManagedBuffer, price: BigUint) {
        self.require_feeder();
        self.set_price(&symbol, &price);
    }

    #[endpoint(submitPriceBatch)]
    fn submit_price_batch(&self, prices: MultiValueEncoded<MultiValue2<ManagedBuffer, BigUint>>) {
        self.require_feeder();
        for (symbol, price) in prices.into_iter().map(|entry| entry.into_tuple()) {
            self.set_price(&symbol, &price);
        }
    }

    /// Simulates an outage for one symbol.
    #[endpoint(clearPrice)]
    fn clear_price(&self, symbol: ManagedBuffer) {
        self.require_feeder();
        self.spot_price(&symbol).clear();
        self.price_cleared_event(&symbol);
    }

    /// Appends the current spot price of `symbol` to its historic medians.
    #[endpoint(stampMedian)]
    fn stamp_median(&self, symbol: ManagedBuffer) {
        self.require_feeder();
        let spot = self.spot_price(&symbol);
        require!(!spot.is_empty(), ERROR_PRICE_NOT_SET);

        let median = spot.get();
        let index = self.historic_median_count(&symbol).get();
        self.historic_median(&symbol, index).set(&median);
        self.historic_median_count(&symbol).set(index + 1);
        self.median_stamped_event(&symbol, index, &median);
    }

    #[view(getSpotPrice)]
    fn get_spot_price(&self, symbol: ManagedBuffer) -> OptionalValue<BigUint> {
        let spot = self.spot_price(&symbol);
        if spot.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(spot.get())
        }
    }

    /// Newest `count` medians, newest first.
    #[view(getHistoricMedians)]
    fn get_historic_medians(&self, symbol: ManagedBuffer, count: u32) -> MultiValueEncoded<BigUint> {
        let mut result = MultiValueEncoded::new();
        let total = self.historic_median_count(&symbol).get();
        let taken = core::cmp::min(total, count);
        for offset in 1..=taken {
            result.push(self.historic_median(&symbol, total - offset).get());
        }
        result
    }

    fn require_feeder(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.feeders().contains(&caller) || caller == self.blockchain().get_owner_address(),
            ERROR_NOT_FEEDER
        );
    }

    fn set_price(&self, symbol: &ManagedBuffer, price: &BigUint) {
        self.spot_price(symbol).set(price);
        self.price_submitted_event(symbol, price);
    }

    #[event("price_submitted")]
    fn price_submitted_event(&self, #[indexed] symbol: &ManagedBuffer, #[indexed] price: &BigUint);

    #[event("price_cleared")]
    fn price_cleared_event(&self, #[indexed] symbol: &ManagedBuffer);

    #[event("median_stamped")]
    fn median_stamped_event(
        &self,
        #[indexed] symbol: &ManagedBuffer,
        #[indexed] index: u32,
        #[indexed] median: &BigUint,
    );

    #[view(getFeeders)]
    #[storage_mapper("feeders")]
    fn feeders(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("spot_price")]
    fn spot_price(&self, symbol: &ManagedBuffer) -> SingleValueMapper<BigUint>;

    #[storage_mapper("historic_median")]
    fn historic_median(&self, symbol: &ManagedBuffer, index: u32) -> SingleValueMapper<BigUint>;

    #[view(getHistoricMedianCount)]
    #[storage_mapper("historic_median_count")]
    fn historic_median_count(&self, symbol: &ManagedBuffer) -> SingleValueMapper<u32>;
}
