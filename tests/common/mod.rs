//! In-memory ledger for driving the workflow runner without a node.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use pantheon_sdk::blockchain::{BlockchainError, BlockchainResult, ChainId, Finalized, Wallet};
use pantheon_sdk::config::{BlockchainConfig, SdkConfig, WorkflowConfig};
use pantheon_sdk::contract::{TokenCreated, TokenSpec};
use pantheon_sdk::workflow::{ContractSession, LedgerConnector, LedgerNode};

/// Anvil account #0. Publicly known, never use for real funds.
pub const TEST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Every ledger interaction the runner can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Connect,
    ChainId,
    BindContract,
    AddToWhitelist,
    WaitWhitelist,
    IsWhitelisted,
    CreateToken,
    WaitCreate,
    CreatedEvents,
    AddCids,
    WaitCids,
    Contribution,
    Cids,
}

/// The calls of a fully successful run, in order.
pub const FULL_RUN: [Call; 13] = [
    Call::Connect,
    Call::ChainId,
    Call::BindContract,
    Call::AddToWhitelist,
    Call::WaitWhitelist,
    Call::IsWhitelisted,
    Call::CreateToken,
    Call::WaitCreate,
    Call::CreatedEvents,
    Call::AddCids,
    Call::WaitCids,
    Call::Contribution,
    Call::Cids,
];

#[derive(Debug, Clone, Copy)]
enum TxKind {
    Whitelist,
    Create,
    Cids,
}

#[derive(Debug)]
pub struct LedgerState {
    pub calls: Vec<Call>,
    pub fail_on: Option<Call>,
    pub chain_id: u64,
    /// Skip emitting `ERC404Created` on token creation.
    pub suppress_events: bool,
    /// Answer returned by `isWhitelisted` regardless of state.
    pub whitelist_override: Option<bool>,
    pub whitelisted: HashSet<Address>,
    pub queried_blocks: Vec<u64>,
    pub owners_seen: Vec<Address>,
    next_block: u64,
    txs: HashMap<TxHash, (TxKind, u64)>,
    events: HashMap<u64, Vec<TokenCreated>>,
    cids: HashMap<(U256, Address), Vec<String>>,
    contributions: HashMap<(U256, Address), U256>,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            fail_on: None,
            chain_id: 31337,
            suppress_events: false,
            whitelist_override: None,
            whitelisted: HashSet::new(),
            queried_blocks: Vec::new(),
            owners_seen: Vec::new(),
            next_block: 100,
            txs: HashMap::new(),
            events: HashMap::new(),
            cids: HashMap::new(),
            contributions: HashMap::new(),
        }
    }
}

impl LedgerState {
    fn mine(&mut self, kind: TxKind) -> (TxHash, u64) {
        let block = self.next_block;
        self.next_block += 1;
        let hash = TxHash::left_padding_from(&block.to_be_bytes());
        self.txs.insert(hash, (kind, block));
        (hash, block)
    }
}

/// Shared handle over the mock ledger; clone it to inspect state after a run.
#[derive(Debug, Clone, Default)]
pub struct MockLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: Call) -> Self {
        let ledger = Self::new();
        ledger.with(|s| s.fail_on = Some(call));
        ledger
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut LedgerState) -> R) -> R {
        let mut state = self.state.lock().unwrap();
        f(&mut state)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.with(|s| s.calls.clone())
    }

    fn record(&self, call: Call) -> BlockchainResult<()> {
        self.with(|s| {
            s.calls.push(call);
            if s.fail_on == Some(call) {
                Err(BlockchainError::Rpc(format!("injected failure at {:?}", call)))
            } else {
                Ok(())
            }
        })
    }
}

#[async_trait]
impl LedgerConnector for MockLedger {
    type Node = MockLedger;

    async fn connect(&self, _rpc_url: &str, _tuning: &BlockchainConfig) -> BlockchainResult<MockLedger> {
        self.record(Call::Connect)?;
        Ok(self.clone())
    }
}

#[async_trait]
impl LedgerNode for MockLedger {
    type Session = MockLedger;

    async fn chain_id(&self) -> BlockchainResult<ChainId> {
        self.record(Call::ChainId)?;
        Ok(ChainId(self.with(|s| s.chain_id)))
    }

    fn bind_contract(&self, _wallet: &Wallet, _contract: Address) -> BlockchainResult<MockLedger> {
        self.record(Call::BindContract)?;
        Ok(self.clone())
    }
}

#[async_trait]
impl ContractSession for MockLedger {
    async fn add_to_whitelist(&self, account: Address) -> BlockchainResult<TxHash> {
        self.record(Call::AddToWhitelist)?;
        Ok(self.with(|s| {
            s.whitelisted.insert(account);
            s.mine(TxKind::Whitelist).0
        }))
    }

    async fn is_whitelisted(&self, account: Address) -> BlockchainResult<bool> {
        self.record(Call::IsWhitelisted)?;
        Ok(self.with(|s| {
            s.whitelist_override
                .unwrap_or_else(|| s.whitelisted.contains(&account))
        }))
    }

    async fn create_token(&self, token: &TokenSpec) -> BlockchainResult<TxHash> {
        self.record(Call::CreateToken)?;
        Ok(self.with(|s| {
            s.owners_seen.push(token.owner);
            let (hash, block) = s.mine(TxKind::Create);
            if !s.suppress_events {
                s.events.entry(block).or_default().push(TokenCreated {
                    id: token.id,
                    contract_address: Address::repeat_byte(0x40),
                });
            }
            hash
        }))
    }

    async fn created_events_in_block(&self, block: u64) -> BlockchainResult<Vec<TokenCreated>> {
        self.record(Call::CreatedEvents)?;
        Ok(self.with(|s| {
            s.queried_blocks.push(block);
            s.events.get(&block).cloned().unwrap_or_default()
        }))
    }

    async fn add_cids(&self, id: U256, owner: Address, cids: &[String]) -> BlockchainResult<TxHash> {
        self.record(Call::AddCids)?;
        Ok(self.with(|s| {
            s.owners_seen.push(owner);
            s.cids.entry((id, owner)).or_default().extend_from_slice(cids);
            *s.contributions.entry((id, owner)).or_default() += U256::from(cids.len());
            s.mine(TxKind::Cids).0
        }))
    }

    async fn contribution(&self, id: U256, owner: Address) -> BlockchainResult<U256> {
        self.record(Call::Contribution)?;
        Ok(self.with(|s| s.contributions.get(&(id, owner)).copied().unwrap_or_default()))
    }

    async fn cids(&self, id: U256, owner: Address) -> BlockchainResult<Vec<String>> {
        self.record(Call::Cids)?;
        Ok(self.with(|s| s.cids.get(&(id, owner)).cloned().unwrap_or_default()))
    }

    async fn wait_for_finalization(&self, tx_hash: TxHash) -> BlockchainResult<Finalized> {
        let (kind, block_number) = self
            .with(|s| s.txs.get(&tx_hash).copied())
            .ok_or_else(|| BlockchainError::Rpc(format!("unknown transaction {}", tx_hash)))?;

        self.record(match kind {
            TxKind::Whitelist => Call::WaitWhitelist,
            TxKind::Create => Call::WaitCreate,
            TxKind::Cids => Call::WaitCids,
        })?;

        Ok(Finalized {
            tx_hash,
            block_number,
        })
    }
}

/// A configuration that passes validation.
pub fn test_config() -> SdkConfig {
    SdkConfig {
        rpc_url: "http://localhost:8545".to_string(),
        private_key: TEST_KEY.to_string(),
        contract_address: TEST_CONTRACT.to_string(),
        blockchain: BlockchainConfig::default(),
        workflow: WorkflowConfig::default(),
    }
}

/// The same configuration rendered as YAML.
pub fn test_config_yaml() -> String {
    format!(
        "rpc_url: \"http://localhost:8545\"\nprivate_key: \"{}\"\ncontract_address: \"{}\"\n",
        TEST_KEY, TEST_CONTRACT
    )
}
