#![allow(dead_code)]
#![allow(clippy::all)]

//! Interface notified after registry changes.

use multiversx_sc::proxy_imports::*;

pub struct TokenHookProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TokenHookProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TokenHookProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TokenHookProxyMethods { wrapped_tx: tx }
    }
}

pub struct TokenHookProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

#[rustfmt::skip]
impl<Env, From, To, Gas> TokenHookProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn after_token_registered<
        Arg0: ProxyArg<common_structs::Token<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("afterTokenRegistered")
            .argument(&token)
            .original_result()
    }

    pub fn after_registered_token_removed<
        Arg0: ProxyArg<common_structs::Token<Env::Api>>,
    >(
        self,
        token: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("afterRegisteredTokenRemoved")
            .argument(&token)
            .original_result()
    }
}
