use alloy::signers::local::PrivateKeySigner;
use sp_core::{
    crypto::{Ss58AddressFormat, Ss58Codec},
    sr25519, Pair as _,
};

use crate::{error::DeriveError, seed::Seed};

/// The single capability the book builder needs from a crypto backend.
/// Kept behind a trait so the builder can be tested without one.
pub trait AddressDeriver {
    fn name(&self) -> &'static str;

    /// Derive the chain-visible address for a seed
    fn derive_address(&self, seed: &Seed) -> Result<String, DeriveError>;
}

/// secp256k1 accounts with EIP-55 checksummed `0x` addresses
#[derive(Debug, Clone, Copy, Default)]
pub struct EthDeriver;

impl AddressDeriver for EthDeriver {
    fn name(&self) -> &'static str {
        "eth"
    }

    fn derive_address(&self, seed: &Seed) -> Result<String, DeriveError> {
        let Seed::RawKey(raw) = seed else {
            return Err(DeriveError::UnsupportedSeed {
                seed: seed.to_string(),
                deriver: self.name(),
            });
        };
        let signer: PrivateKeySigner = raw.parse().map_err(|e| DeriveError::InvalidSeed {
            seed: raw.clone(),
            reason: format!("{e}"),
        })?;
        // Display on Address is the checksummed form
        Ok(signer.address().to_string())
    }
}

/// sr25519 accounts with SS58-encoded addresses
#[derive(Debug, Clone, Copy)]
pub struct Sr25519Deriver {
    ss58_format: Ss58AddressFormat,
}

impl Sr25519Deriver {
    pub fn new() -> Self {
        Self {
            // 42, the substrate generic network
            ss58_format: Ss58AddressFormat::custom(42),
        }
    }

    pub fn with_ss58_prefix(mut self, prefix: u16) -> Self {
        self.ss58_format = Ss58AddressFormat::custom(prefix);
        self
    }
}

impl Default for Sr25519Deriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressDeriver for Sr25519Deriver {
    fn name(&self) -> &'static str {
        "sr25519"
    }

    fn derive_address(&self, seed: &Seed) -> Result<String, DeriveError> {
        let suri = match seed {
            Seed::Path(path) => path.clone(),
            // the suri parser only treats the secret as raw entropy when
            // it is 0x-prefixed, a bare hex string parses as a phrase
            Seed::RawKey(raw) if raw.starts_with("0x") => raw.clone(),
            Seed::RawKey(raw) => format!("0x{raw}"),
        };
        let pair =
            sr25519::Pair::from_string(&suri, None).map_err(|e| DeriveError::InvalidSeed {
                seed: seed.to_string(),
                reason: e.to_string(),
            })?;
        Ok(pair.public().to_ss58check_with_version(self.ss58_format))
    }
}
