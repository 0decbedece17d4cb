//! Domain types passed through the contract session.

use alloy::primitives::{Address, U256};

/// Arguments for `createERC404`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpec {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub id: U256,
    pub owner: Address,
}

/// Decoded `ERC404Created` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenCreated {
    /// Token identifier inside the Pantheon registry.
    pub id: U256,
    /// Address of the deployed ERC404 contract.
    pub contract_address: Address,
}
