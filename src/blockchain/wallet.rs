//! Signing keys, the transaction signer and fresh identities.
//!
//! # Security
//! - Keys are never logged or serialized
//! - Only derived addresses appear in log output

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};

/// Parsed signing key, not yet bound to a chain.
#[derive(Clone)]
pub struct SigningKey {
    signer: PrivateKeySigner,
}

impl SigningKey {
    /// Parse a hex-encoded private key (with or without 0x prefix).
    pub fn parse(private_key_hex: &str) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        Ok(Self { signer })
    }

    /// Address controlled by this key.
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("address", &self.address())
            .finish()
    }
}

/// Transaction signer bound to a chain for EIP-155 replay protection.
#[derive(Debug, Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
    chain_id: ChainId,
}

impl Wallet {
    /// Bind a parsed key to the chain reported by the node.
    pub fn bind(key: SigningKey, chain_id: ChainId) -> BlockchainResult<Self> {
        if chain_id.0 == 0 {
            return Err(BlockchainError::Wallet(
                "Chain ID 0 cannot be used for replay-protected signing".to_string(),
            ));
        }

        let signer = key.signer.with_chain_id(Some(chain_id.0));

        tracing::info!(
            address = %signer.address(),
            chain_id = chain_id.0,
            "Wallet initialized"
        );

        Ok(Self { signer, chain_id })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the chain ID this wallet is configured for.
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Network wallet used by the provider's signing filler.
    pub fn network_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

/// A freshly generated external party.
pub struct Identity {
    signer: PrivateKeySigner,
}

impl Identity {
    /// Generate a random secp256k1 keypair from the OS RNG.
    pub fn generate() -> Self {
        Self {
            signer: PrivateKeySigner::random(),
        }
    }

    /// Address derived from the identity's public key.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Uncompressed public key bytes, without the 0x04 tag.
    pub fn public_key(&self) -> [u8; 64] {
        let point = self.signer.credential().verifying_key().to_encoded_point(false);
        let mut out = [0u8; 64];
        out.copy_from_slice(&point.as_bytes()[1..]);
        out
    }
}

impl std::fmt::Debug for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Identity")
            .field("address", &self.address())
            .finish()
    }
}
