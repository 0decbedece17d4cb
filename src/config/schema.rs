//! Configuration schema definitions.
//!
//! The three top-level keys (`rpc_url`, `private_key`, `contract_address`)
//! are required. Every other section is optional and defaults to the values
//! the demonstration workflow has always used.

use serde::Deserialize;

/// Root configuration for the workflow runner.
#[derive(Clone, Deserialize)]
pub struct SdkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Hex-encoded signing key (a `0x` prefix is tolerated).
    pub private_key: String,

    /// Address of the pre-deployed Pantheon contract.
    pub contract_address: String,

    /// RPC tuning.
    #[serde(default)]
    pub blockchain: BlockchainConfig,

    /// Parameters passed to the contract calls.
    #[serde(default)]
    pub workflow: WorkflowConfig,
}

impl std::fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkConfig")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .field("contract_address", &self.contract_address)
            .field("blockchain", &self.blockchain)
            .field("workflow", &self.workflow)
            .finish()
    }
}

/// RPC tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// Timeout for read-only RPC requests in seconds.
    ///
    /// Finalization waits are never bounded by this.
    pub rpc_timeout_secs: u64,

    /// Interval between receipt polls while waiting for finalization.
    pub poll_interval_ms: u64,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            rpc_timeout_secs: 10,
            poll_interval_ms: 1000,
        }
    }
}

/// Arguments for the token and CID calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// ERC404 token name.
    pub token_name: String,

    /// ERC404 token symbol.
    pub token_symbol: String,

    /// ERC404 decimals.
    pub token_decimals: u8,

    /// Identifier of the token inside the Pantheon contract.
    pub token_id: u64,

    /// CIDs appended to the token.
    pub cids: Vec<String>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            token_name: "TestToken".to_string(),
            token_symbol: "TTK".to_string(),
            token_decimals: 18,
            token_id: 0,
            cids: vec!["cid1".to_string(), "cid2".to_string(), "cid3".to_string()],
        }
    }
}
