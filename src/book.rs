use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::{deriver::AddressDeriver, error::BookError, seed::Seed};

/// One funded account, serialized as `[address, balance]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry(pub String, pub u128);

impl BalanceEntry {
    pub fn address(&self) -> &str {
        &self.0
    }

    pub fn balance(&self) -> u128 {
        self.1
    }
}

/// Derive every seed in order and pair it with `balance`.
///
/// All-or-nothing: the first seed the deriver rejects aborts the whole
/// batch and nothing is emitted. A duplicate derived address aborts too.
pub fn build_book(
    deriver: &dyn AddressDeriver,
    seeds: &[Seed],
    balance: u128,
) -> Result<Vec<BalanceEntry>, BookError> {
    let mut entries = Vec::with_capacity(seeds.len());
    let mut seen = HashSet::with_capacity(seeds.len());
    for seed in seeds {
        let address = deriver.derive_address(seed)?;
        if !seen.insert(address.clone()) {
            return Err(BookError::DuplicateAddress { address });
        }
        entries.push(BalanceEntry(address, balance));
    }
    debug!("derived {} entries", entries.len());
    Ok(entries)
}

/// Render the book as a JSON array of `[address, balance]` pairs,
/// compact or indented with four spaces.
pub fn render(entries: &[BalanceEntry], pretty: bool) -> Result<String, BookError> {
    if pretty {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        entries.serialize(&mut ser)?;
        Ok(String::from_utf8(buf).expect("serde_json emits utf-8"))
    } else {
        Ok(serde_json::to_string(entries)?)
    }
}
