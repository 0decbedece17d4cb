//! Pantheon SDK example runner.
//!
//! Loads `config/config.yml`, connects to the configured node and walks the
//! Pantheon contract through whitelist, ERC404 creation and CID bookkeeping.
//! Any failed step is logged and the process exits with status 1.

use std::path::Path;
use std::process::ExitCode;

use pantheon_sdk::blockchain::AlloyConnector;
use pantheon_sdk::config::DEFAULT_CONFIG_PATH;
use pantheon_sdk::observability::init_logging;
use pantheon_sdk::{WorkflowError, WorkflowReport, WorkflowRunner};

async fn run() -> Result<WorkflowReport, WorkflowError> {
    let runner = WorkflowRunner::from_config_file(AlloyConnector, Path::new(DEFAULT_CONFIG_PATH))?;
    runner.run().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    tracing::info!("pantheon-sdk v{} starting", env!("CARGO_PKG_VERSION"));

    match run().await {
        Ok(report) => {
            tracing::info!(
                new_address = %report.new_address,
                token = %report.token.contract_address,
                "Workflow complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(step = e.step.ordinal(), "{}", e);
            ExitCode::FAILURE
        }
    }
}
