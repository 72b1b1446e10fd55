use std::fmt;

/// Baltathar dev account, the well-known prefix of every eth book
pub const BALTATHAR_KEY: &str =
    "8075991ce870b93a8870eca0c0f91913d12f47948ca0fd25b49c6fa7cdbeee8b";

pub const DEFAULT_ETH_COUNT: u32 = 1500;
pub const DEFAULT_SUBSTRATE_COUNT: u32 = 5000;

/// Input to address derivation, either raw key material or a
/// derivation-path URI expanded by a hierarchical scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Hex-encoded 32-byte private key
    RawKey(String),
    /// Path-style URI, e.g. `//Alice` or `//Sender/42`
    Path(String),
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Seed::RawKey(raw) => write!(f, "{raw}"),
            Seed::Path(path) => write!(f, "{path}"),
        }
    }
}

/// Seed list for an eth book: the Baltathar prefix followed by `count`
/// index-derived raw keys.
///
/// Index `i` encodes the scalar `i + 1` as 64 hex characters. The offset
/// keeps index 0 away from the all-zero scalar, which secp256k1 rejects.
pub fn eth_seeds(count: u32) -> Vec<Seed> {
    let mut seeds = Vec::with_capacity(count as usize + 1);
    seeds.push(Seed::RawKey(BALTATHAR_KEY.to_owned()));
    seeds.extend((0..count).map(|i| Seed::RawKey(format!("{:064x}", u64::from(i) + 1))));
    seeds
}

/// Seed list for a substrate book: `//Alice`, `//Bob`, then `count`
/// `//Sender/{i}` paths in index order.
pub fn substrate_seeds(count: u32) -> Vec<Seed> {
    let mut seeds = Vec::with_capacity(count as usize + 2);
    seeds.push(Seed::Path("//Alice".to_owned()));
    seeds.push(Seed::Path("//Bob".to_owned()));
    seeds.extend((0..count).map(|i| Seed::Path(format!("//Sender/{i}"))));
    seeds
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eth_layout() {
        let seeds = eth_seeds(3);
        assert_eq!(seeds.len(), 4);
        // well-known prefix first
        assert_eq!(seeds[0], Seed::RawKey(BALTATHAR_KEY.to_owned()));
        // index 0 maps to scalar 1
        assert_eq!(seeds[1], Seed::RawKey(format!("{:064x}", 1)));
        assert_eq!(seeds[3], Seed::RawKey(format!("{:064x}", 3)));
    }

    #[test]
    fn eth_seeds_are_valid_hex() {
        for seed in eth_seeds(50) {
            let Seed::RawKey(raw) = seed else {
                panic!("eth book only holds raw keys");
            };
            assert_eq!(raw.len(), 64);
            assert!(raw.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn substrate_layout() {
        let seeds = substrate_seeds(2);
        assert_eq!(
            seeds,
            vec![
                Seed::Path("//Alice".to_owned()),
                Seed::Path("//Bob".to_owned()),
                Seed::Path("//Sender/0".to_owned()),
                Seed::Path("//Sender/1".to_owned()),
            ]
        );
    }

    #[test]
    fn empty_tail_keeps_prefix() {
        assert_eq!(eth_seeds(0).len(), 1);
        assert_eq!(substrate_seeds(0).len(), 2);
    }
}
