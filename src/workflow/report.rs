//! Workflow steps, run report and the error a failed run produces.

use alloy::primitives::{Address, TxHash, U256};
use thiserror::Error;

use crate::blockchain::types::BlockchainError;
use crate::config::ConfigError;
use crate::contract::types::TokenCreated;

/// One stage of the workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    LoadConfig,
    Connect,
    ParseKey,
    FetchNetworkId,
    BuildSigner,
    BindContract,
    GenerateIdentity,
    AddToWhitelist,
    IsWhitelisted,
    CreateToken,
    FindCreatedEvent,
    AddCids,
    GetContribution,
    GetCids,
}

impl Step {
    /// All steps in execution order.
    pub const ALL: [Step; 14] = [
        Step::LoadConfig,
        Step::Connect,
        Step::ParseKey,
        Step::FetchNetworkId,
        Step::BuildSigner,
        Step::BindContract,
        Step::GenerateIdentity,
        Step::AddToWhitelist,
        Step::IsWhitelisted,
        Step::CreateToken,
        Step::FindCreatedEvent,
        Step::AddCids,
        Step::GetContribution,
        Step::GetCids,
    ];

    /// 1-based position in the sequence.
    pub fn ordinal(self) -> usize {
        self as usize + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::LoadConfig => "load config",
            Step::Connect => "connect",
            Step::ParseKey => "parse signing key",
            Step::FetchNetworkId => "fetch network id",
            Step::BuildSigner => "build signer",
            Step::BindContract => "bind contract",
            Step::GenerateIdentity => "generate identity",
            Step::AddToWhitelist => "add to whitelist",
            Step::IsWhitelisted => "check whitelist",
            Step::CreateToken => "create ERC404",
            Step::FindCreatedEvent => "find ERC404Created event",
            Step::AddCids => "add CIDs",
            Step::GetContribution => "get contribution",
            Step::GetCids => "get CIDs",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {}/14 ({})", self.ordinal(), self.name())
    }
}

/// Why a step failed.
#[derive(Debug, Error)]
pub enum StepFailure {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),
}

/// A failed run: the step that stopped it and the cause.
#[derive(Debug, Error)]
#[error("{step} failed: {source}")]
pub struct WorkflowError {
    pub step: Step,
    #[source]
    pub source: StepFailure,
}

impl WorkflowError {
    pub fn new(step: Step, source: impl Into<StepFailure>) -> Self {
        Self {
            step,
            source: source.into(),
        }
    }
}

/// Values reported by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowReport {
    /// Signer address (token owner).
    pub signer: Address,
    /// Freshly generated address that was whitelisted.
    pub new_address: Address,
    pub whitelist_tx: TxHash,
    /// Whitelist status as returned by the contract.
    pub whitelisted: bool,
    pub create_tx: TxHash,
    /// Block the token creation was mined in.
    pub create_block: u64,
    pub token: TokenCreated,
    pub cids_tx: TxHash,
    pub contribution: U256,
    /// CIDs read back from the contract, in stored order.
    pub cids: Vec<String>,
}

impl WorkflowReport {
    /// CIDs joined the way they are printed.
    pub fn joined_cids(&self) -> String {
        self.cids.join(", ")
    }
}
