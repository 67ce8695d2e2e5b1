//! Tamper-tolerant recovery of a Shamir-style threshold secret.
//!
//! Every `k`-subset of the shares is interpolated exactly over the rationals;
//! the polynomial that agrees with the most shares wins, and the shares it
//! disagrees with are reported as mismatched.

pub mod combinations;
pub mod document;
pub mod error;
pub mod report;
pub mod search;
pub mod share;

pub use document::ShareDocument;
pub use error::{DocumentError, DocumentResult, RecoveryError, RecoveryResult};
pub use report::Report;
pub use search::{recover, Candidate, Recovery, SubsetSearch};
pub use share::Share;
