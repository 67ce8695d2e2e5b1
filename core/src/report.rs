//! Text and JSON renderings of a [`Recovery`].

use std::fmt;

use crate::error::RecoveryResult;
use crate::search::Recovery;

/// Rendered in place of the mismatched list when every share agrees.
pub const NONE_MISMATCHED: &str = "None";

/// Comma-joined identifiers, or [`NONE_MISMATCHED`] when there are none.
pub fn render_mismatched(identifiers: &[String]) -> String {
    if identifiers.is_empty() {
        NONE_MISMATCHED.to_string()
    } else {
        identifiers.join(",")
    }
}

/// Borrowed view of a recovery that knows how to print itself.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    recovery: &'a Recovery,
}

impl<'a> Report<'a> {
    pub fn new(recovery: &'a Recovery) -> Self {
        Report { recovery }
    }

    pub fn to_json(&self) -> RecoveryResult<String> {
        Ok(serde_json::to_string_pretty(self.recovery)?)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Secret: {}", self.recovery.secret())?;
        write!(
            f,
            "Wrong shares: {}",
            render_mismatched(self.recovery.mismatched())
        )
    }
}

impl<'a> From<&'a Recovery> for Report<'a> {
    fn from(recovery: &'a Recovery) -> Self {
        Report::new(recovery)
    }
}
