#![no_std]

pub mod proxy_bond_hook;
pub mod proxy_token_hook;
