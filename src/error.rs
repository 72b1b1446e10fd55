use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum DeriveError {
    /// The backend rejected the seed value, malformed key material or URI
    #[error("invalid seed {seed:?}: {reason}")]
    InvalidSeed { seed: String, reason: String },
    /// The seed kind is not usable with this deriver, e.g. a derivation
    /// path handed to the eth deriver
    #[error("seed {seed:?} is not usable with the {deriver} deriver")]
    UnsupportedSeed {
        seed: String,
        deriver: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum BookError {
    #[error(transparent)]
    Derive(#[from] DeriveError),
    /// Two seeds derived the same address, the consuming genesis format
    /// would silently drop one of the balances
    #[error("duplicate address derived: {address}")]
    DuplicateAddress { address: String },
    #[error("failed to serialize address book: {0}")]
    Render(#[from] serde_json::Error),
}
