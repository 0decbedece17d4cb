//! The sequential Pantheon workflow.
//!
//! ```text
//! load config → connect → parse key → chain id → signer → bind contract
//!     → new identity → whitelist (+wait) → isWhitelisted
//!     → createERC404 (+wait) → ERC404Created in receipt block
//!     → addCIDs (+wait) → getContribution → getCIDs
//! ```
//!
//! The first failing step ends the run.

use alloy::primitives::{Address, U256};
use std::path::Path;

use crate::blockchain::types::BlockchainError;
use crate::blockchain::wallet::{Identity, SigningKey, Wallet};
use crate::config::{load_config, SdkConfig};
use crate::contract::types::TokenSpec;
use crate::workflow::ledger::{ContractSession, LedgerConnector, LedgerNode};
use crate::workflow::report::{Step, WorkflowError, WorkflowReport};

/// Drives the workflow against any ledger implementation.
pub struct WorkflowRunner<C> {
    connector: C,
    config: SdkConfig,
}

fn at(step: Step) -> impl FnOnce(BlockchainError) -> WorkflowError {
    move |e| WorkflowError::new(step, e)
}

impl<C: LedgerConnector> WorkflowRunner<C> {
    /// Create a runner from an already validated configuration.
    pub fn new(connector: C, config: SdkConfig) -> Self {
        Self { connector, config }
    }

    /// Load, validate and keep the configuration at `path`.
    pub fn from_config_file(connector: C, path: &Path) -> Result<Self, WorkflowError> {
        let config = load_config(path).map_err(|e| WorkflowError::new(Step::LoadConfig, e))?;

        tracing::info!(
            path = %path.display(),
            rpc_url = %config.rpc_url,
            contract = %config.contract_address,
            "Configuration loaded"
        );

        Ok(Self::new(connector, config))
    }

    /// The configuration this runner was built with.
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Execute steps 2 through 14.
    pub async fn run(&self) -> Result<WorkflowReport, WorkflowError> {
        let config = &self.config;
        let params = &config.workflow;

        let node = self
            .connector
            .connect(&config.rpc_url, &config.blockchain)
            .await
            .map_err(at(Step::Connect))?;

        let key = SigningKey::parse(&config.private_key).map_err(at(Step::ParseKey))?;

        let chain_id = node.chain_id().await.map_err(at(Step::FetchNetworkId))?;
        tracing::info!(chain_id = chain_id.0, "Network ID fetched");

        let wallet = Wallet::bind(key, chain_id).map_err(at(Step::BuildSigner))?;
        let owner = wallet.address();

        let contract: Address = config
            .contract_address
            .parse()
            .map_err(|_| BlockchainError::InvalidAddress(config.contract_address.clone()))
            .map_err(at(Step::BindContract))?;
        let session = node
            .bind_contract(&wallet, contract)
            .map_err(at(Step::BindContract))?;

        let identity = Identity::generate();
        let new_address = identity.address();
        tracing::info!(address = %new_address, "New random address generated");

        let whitelist_tx = session
            .add_to_whitelist(new_address)
            .await
            .map_err(at(Step::AddToWhitelist))?;
        tracing::info!(tx_hash = %whitelist_tx, "Whitelist add transaction sent");
        tracing::info!("Waiting for transaction to be mined...");
        session
            .wait_for_finalization(whitelist_tx)
            .await
            .map_err(at(Step::AddToWhitelist))?;

        let whitelisted = session
            .is_whitelisted(new_address)
            .await
            .map_err(at(Step::IsWhitelisted))?;
        tracing::info!(address = %new_address, whitelisted, "Whitelist status");

        let token_id = U256::from(params.token_id);
        let token = TokenSpec {
            name: params.token_name.clone(),
            symbol: params.token_symbol.clone(),
            decimals: params.token_decimals,
            id: token_id,
            owner,
        };
        let create_tx = session
            .create_token(&token)
            .await
            .map_err(at(Step::CreateToken))?;
        tracing::info!(tx_hash = %create_tx, "Create ERC404 transaction sent");
        tracing::info!("Waiting for transaction to be mined...");
        let created = session
            .wait_for_finalization(create_tx)
            .await
            .map_err(at(Step::CreateToken))?;

        let event = session
            .created_events_in_block(created.block_number)
            .await
            .map_err(at(Step::FindCreatedEvent))?
            .into_iter()
            .next()
            .ok_or(BlockchainError::EventNotFound {
                event: "ERC404Created",
                block: created.block_number,
            })
            .map_err(at(Step::FindCreatedEvent))?;
        tracing::info!(
            id = %event.id,
            contract_address = %event.contract_address,
            block = created.block_number,
            "ERC404Created event received"
        );

        let cids_tx = session
            .add_cids(token_id, owner, &params.cids)
            .await
            .map_err(at(Step::AddCids))?;
        tracing::info!(tx_hash = %cids_tx, "Add CIDs transaction sent");
        tracing::info!("Waiting for transaction to be mined...");
        session
            .wait_for_finalization(cids_tx)
            .await
            .map_err(at(Step::AddCids))?;

        let contribution = session
            .contribution(token_id, owner)
            .await
            .map_err(at(Step::GetContribution))?;
        tracing::info!(contribution = %contribution, "Contribution");

        let cids = session
            .cids(token_id, owner)
            .await
            .map_err(at(Step::GetCids))?;

        let report = WorkflowReport {
            signer: owner,
            new_address,
            whitelist_tx,
            whitelisted,
            create_tx,
            create_block: created.block_number,
            token: event,
            cids_tx,
            contribution,
            cids,
        };
        tracing::info!(cids = %report.joined_cids(), "CIDs");

        Ok(report)
    }
}
