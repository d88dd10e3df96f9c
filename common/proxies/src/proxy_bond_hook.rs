#![allow(dead_code)]
#![allow(clippy::all)]

//! Interface consumed from staking/incentive contracts that lock collateral uTokens.

use multiversx_sc::proxy_imports::*;

pub struct BondHookProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for BondHookProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = BondHookProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        BondHookProxyMethods { wrapped_tx: tx }
    }
}

pub struct BondHookProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, To, Gas> BondHookProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Amount of the account's collateral uTokens currently bonded by the hook.
    pub fn bonded<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        account: Arg0,
        u_token: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("bonded")
            .argument(&account)
            .argument(&u_token)
            .original_result()
    }

    /// Instantly unbonds until the bonded amount is at most `target`.
    pub fn force_unbond_to<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        account: Arg0,
        u_token: Arg1,
        target: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("forceUnbondTo")
            .argument(&account)
            .argument(&u_token)
            .argument(&target)
            .original_result()
    }
}
