use math::{traits::Point, BigInt};

use crate::error::{DocumentError, DocumentResult};

/// A single sample `(x, y)` of the hidden polynomial, keyed by an opaque identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    identifier: String,
    x: BigInt,
    y: BigInt,
}

impl Share {
    pub fn new(identifier: impl Into<String>, x: BigInt, y: BigInt) -> Self {
        Share {
            identifier: identifier.into(),
            x,
            y,
        }
    }

    /// Build a share whose abscissa is its identifier read as a base-10 integer.
    pub fn from_identifier(
        identifier: impl Into<String>,
        y: BigInt,
    ) -> DocumentResult<Self> {
        let identifier = identifier.into();
        let x = Some(identifier.as_str())
            .filter(|text| is_bare_numeral(text))
            .and_then(|text| text.parse::<BigInt>().ok())
            .ok_or_else(|| DocumentError::InvalidIdentifier(identifier.clone()))?;

        Ok(Share { identifier, x, y })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// No `_` separators and no surrounding whitespace.
///
/// `BigInt` parsing tolerates underscores, which would let distinct
/// identifiers such as `"10"` and `"1_0"` share an abscissa.
pub(crate) fn is_bare_numeral(text: &str) -> bool {
    !text.contains('_') && text.trim() == text
}

impl Point for Share {
    fn x(&self) -> &BigInt {
        &self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}
