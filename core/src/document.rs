//! JSON share document ingestion.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every key other than `keys` names a share; the key doubles as the share's
//! abscissa. Shares come out ordered by identifier, compared as strings.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::warn;
use math::BigInt;
use num_traits::Num;
use serde::Deserialize;

use crate::error::{DocumentError, DocumentResult, RecoveryError, RecoveryResult};
use crate::search::{Recovery, SubsetSearch};
use crate::share::{is_bare_numeral, Share};

/// Inclusive range of radixes accepted for share values.
pub const SUPPORTED_BASES: std::ops::RangeInclusive<u32> = 2..=36;

/// Integer field written either as a JSON number or a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(u64),
    Text(String),
}

impl Numeric {
    fn parse<T>(self, field: &'static str) -> DocumentResult<T>
    where
        T: TryFrom<u64>,
    {
        let invalid = |text: String| DocumentError::InvalidNumber { field, text };
        let value = match self {
            Numeric::Number(value) => value,
            Numeric::Text(text) => text.trim().parse().map_err(|_| invalid(text.clone()))?,
        };
        T::try_from(value).map_err(|_| invalid(value.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct RawKeys {
    n: Numeric,
    k: Numeric,
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: Numeric,
    value: String,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    keys: RawKeys,
    #[serde(flatten)]
    shares: BTreeMap<String, RawShare>,
}

/// Decode `value` written in `base`, retrying lower-cased if the first parse fails.
pub fn decode_value(identifier: &str, value: &str, base: u32) -> DocumentResult<BigInt> {
    if !SUPPORTED_BASES.contains(&base) {
        return Err(DocumentError::InvalidBase {
            identifier: identifier.to_string(),
            base,
        });
    }

    let invalid = || DocumentError::InvalidValue {
        identifier: identifier.to_string(),
        base,
        value: value.to_string(),
    };
    if !is_bare_numeral(value) {
        return Err(invalid());
    }

    BigInt::from_str_radix(value, base)
        .or_else(|_| BigInt::from_str_radix(&value.to_lowercase(), base))
        .map_err(|_| invalid())
}

/// A parsed share document: declared share count, threshold and shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDocument {
    declared_shares: usize,
    threshold: usize,
    shares: Vec<Share>,
}

impl ShareDocument {
    pub fn new(declared_shares: usize, threshold: usize, shares: Vec<Share>) -> Self {
        ShareDocument {
            declared_shares,
            threshold,
            shares,
        }
    }

    pub fn from_json(text: &str) -> DocumentResult<Self> {
        Self::from_raw(serde_json::from_str(text)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> DocumentResult<Self> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> DocumentResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawDocument) -> DocumentResult<Self> {
        let declared_shares = raw.keys.n.parse("keys.n")?;
        let threshold = raw.keys.k.parse("keys.k")?;

        let shares = raw
            .shares
            .into_iter()
            .map(|(identifier, share)| {
                let base = share.base.parse("base")?;
                let y = decode_value(&identifier, &share.value, base)?;
                Share::from_identifier(identifier, y)
            })
            .collect::<DocumentResult<Vec<_>>>()?;

        Ok(Self::new(declared_shares, threshold, shares))
    }

    /// The `n` the document claims; advisory only.
    pub fn declared_shares(&self) -> usize {
        self.declared_shares
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    pub fn into_shares(self) -> Vec<Share> {
        self.shares
    }

    /// [`RecoveryError::ShareCountMismatch`] if the declared `n` is not the actual count.
    pub fn count_mismatch(&self) -> Option<RecoveryError> {
        (self.declared_shares != self.shares.len()).then(|| {
            RecoveryError::ShareCountMismatch {
                declared: self.declared_shares,
                actual: self.shares.len(),
            }
        })
    }

    /// Recover with the document's own threshold.
    pub fn recover(&self) -> RecoveryResult<Recovery> {
        self.recover_with_threshold(self.threshold)
    }

    /// Recover with an explicit threshold, warning (not failing) on a count mismatch.
    pub fn recover_with_threshold(&self, threshold: usize) -> RecoveryResult<Recovery> {
        if let Some(mismatch) = self.count_mismatch() {
            warn!("{mismatch}; using {} shares", self.shares.len());
        }
        SubsetSearch::new(threshold).recover(&self.shares)
    }
}
