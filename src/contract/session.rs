//! Pantheon contract session over alloy.

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::eth::Filter;
use alloy::sol_types::SolEvent;
use async_trait::async_trait;

use crate::blockchain::transaction::ReceiptPoller;
use crate::blockchain::types::{BlockchainError, BlockchainResult, Finalized};
use crate::contract::bindings::Pantheon::{self, ERC404Created, PantheonInstance};
use crate::contract::types::{TokenCreated, TokenSpec};
use crate::workflow::ledger::ContractSession;

/// Signing session bound to one Pantheon deployment.
pub struct PantheonSession {
    instance: PantheonInstance<DynProvider>,
    poller: ReceiptPoller,
}

impl PantheonSession {
    /// Create a session over a wallet-filled provider.
    pub fn new(contract: Address, provider: DynProvider, poller: ReceiptPoller) -> Self {
        Self {
            instance: Pantheon::new(contract, provider),
            poller,
        }
    }

    /// Address of the bound contract.
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

#[async_trait]
impl ContractSession for PantheonSession {
    async fn add_to_whitelist(&self, account: Address) -> BlockchainResult<TxHash> {
        let pending = self
            .instance
            .addToWhitelist(account)
            .send()
            .await
            .map_err(|e| BlockchainError::contract("addToWhitelist", e))?;
        Ok(*pending.tx_hash())
    }

    async fn is_whitelisted(&self, account: Address) -> BlockchainResult<bool> {
        self.instance
            .isWhitelisted(account)
            .call()
            .await
            .map_err(|e| BlockchainError::contract("isWhitelisted", e))
    }

    async fn create_token(&self, token: &TokenSpec) -> BlockchainResult<TxHash> {
        let pending = self
            .instance
            .createERC404(
                token.name.clone(),
                token.symbol.clone(),
                token.decimals,
                token.id,
                token.owner,
            )
            .send()
            .await
            .map_err(|e| BlockchainError::contract("createERC404", e))?;
        Ok(*pending.tx_hash())
    }

    async fn created_events_in_block(&self, block: u64) -> BlockchainResult<Vec<TokenCreated>> {
        let filter = Filter::new()
            .address(self.address())
            .from_block(block)
            .to_block(block)
            .event(ERC404Created::SIGNATURE);

        let logs = self
            .instance
            .provider()
            .get_logs(&filter)
            .await
            .map_err(|e| BlockchainError::Rpc(format!("eth_getLogs failed: {}", e)))?;

        let mut events = Vec::with_capacity(logs.len());
        for log in logs {
            match log.log_decode::<ERC404Created>() {
                Ok(decoded) => {
                    let event = decoded.inner.data;
                    events.push(TokenCreated {
                        id: event.id,
                        contract_address: event.contractAddress,
                    });
                }
                Err(e) => {
                    tracing::warn!(block = block, error = %e, "Skipping undecodable ERC404Created log");
                }
            }
        }

        Ok(events)
    }

    async fn add_cids(&self, id: U256, owner: Address, cids: &[String]) -> BlockchainResult<TxHash> {
        let pending = self
            .instance
            .addCIDs(id, owner, cids.to_vec())
            .send()
            .await
            .map_err(|e| BlockchainError::contract("addCIDs", e))?;
        Ok(*pending.tx_hash())
    }

    async fn contribution(&self, id: U256, owner: Address) -> BlockchainResult<U256> {
        self.instance
            .getContribution(id, owner)
            .call()
            .await
            .map_err(|e| BlockchainError::contract("getContribution", e))
    }

    async fn cids(&self, id: U256, owner: Address) -> BlockchainResult<Vec<String>> {
        self.instance
            .getCIDs(id, owner)
            .call()
            .await
            .map_err(|e| BlockchainError::contract("getCIDs", e))
    }

    async fn wait_for_finalization(&self, tx_hash: TxHash) -> BlockchainResult<Finalized> {
        self.poller.wait_for_finalization(tx_hash).await
    }
}

impl std::fmt::Debug for PantheonSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PantheonSession")
            .field("contract", &self.address())
            .field("poller", &self.poller)
            .finish()
    }
}
