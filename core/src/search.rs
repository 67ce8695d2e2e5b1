//! Best-fit subset search over all `k`-combinations of the shares.

use log::{debug, trace, warn};
use math::{prelude::*, Result as MathResult};
use serde::Serialize;

use crate::combinations::{binomial, Combinations};
use crate::error::{RecoveryError, RecoveryResult};
use crate::share::Share;

/// The polynomial interpolated through one combination, scored against every share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    subset: Vec<usize>,
    secret: Rational,
    agreement: Vec<bool>,
    matches: usize,
}

impl Candidate {
    /// Interpolate through `shares[subset]` and check every share against it.
    ///
    /// Fails with [`MathError::DivisionByZero`] when the subset has colliding
    /// abscissae.
    pub fn evaluate(shares: &[Share], subset: Vec<usize>) -> MathResult<Self> {
        let points: Vec<&Share> = subset.iter().map(|&idx| &shares[idx]).collect();
        let interpolant = Interpolant::new(&points)?;

        let agreement: Vec<bool> = shares
            .iter()
            .map(|share| {
                interpolant
                    .evaluate(share.x())
                    .into_integer_if_exact()
                    .is_some_and(|predicted| &predicted == share.y())
            })
            .collect();
        let matches = agreement.iter().filter(|&&agrees| agrees).count();

        Ok(Candidate {
            subset,
            secret: interpolant.at_zero(),
            agreement,
            matches,
        })
    }

    /// Share indices the polynomial was interpolated through, ascending.
    pub fn subset(&self) -> &[usize] {
        &self.subset
    }

    pub fn secret(&self) -> &Rational {
        &self.secret
    }

    /// Per-share agreement flags, in share order.
    pub fn agreement(&self) -> &[bool] {
        &self.agreement
    }

    pub fn matches(&self) -> usize {
        self.matches
    }
}

/// Keep the first candidate with the highest score.
///
/// A later candidate replaces the current best only with strictly more
/// matches, so ties resolve to the earliest candidate in iteration order.
pub fn select_best<I>(candidates: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.matches <= current.matches => Some(current),
        _ => Some(candidate),
    })
}

/// Outcome of a successful recovery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Recovery {
    secret: Rational,
    mismatched: Vec<String>,
    matches: usize,
    shares: usize,
    threshold: usize,
    subset: Vec<String>,
    #[serde(skip)]
    agreement: Vec<bool>,
}

impl Recovery {
    fn from_candidate(shares: &[Share], threshold: usize, best: Candidate) -> Self {
        let mismatched = shares
            .iter()
            .zip(&best.agreement)
            .filter(|(_, agrees)| !**agrees)
            .map(|(share, _)| share.identifier().to_string())
            .collect();
        let subset = best
            .subset
            .iter()
            .map(|&idx| shares[idx].identifier().to_string())
            .collect();

        Recovery {
            secret: best.secret,
            mismatched,
            matches: best.matches,
            shares: shares.len(),
            threshold,
            subset,
            agreement: best.agreement,
        }
    }

    /// The recovered constant term, exact.
    pub fn secret(&self) -> &Rational {
        &self.secret
    }

    /// The secret as an integer, if it is one.
    pub fn secret_integer(&self) -> Option<BigInt> {
        self.secret.to_integer_if_exact()
    }

    /// Identifiers of shares that disagree with the winning polynomial, in share order.
    pub fn mismatched(&self) -> &[String] {
        &self.mismatched
    }

    pub fn is_unanimous(&self) -> bool {
        self.mismatched.is_empty()
    }

    pub fn matches(&self) -> usize {
        self.matches
    }

    pub fn share_count(&self) -> usize {
        self.shares
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Identifiers of the winning combination.
    pub fn subset(&self) -> &[String] {
        &self.subset
    }

    pub fn agreement(&self) -> &[bool] {
        &self.agreement
    }
}

/// Exhaustive best-fit search for a threshold `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetSearch {
    threshold: usize,
}

impl SubsetSearch {
    pub fn new(threshold: usize) -> Self {
        SubsetSearch { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Valid candidates in lexicographic combination order; colliding subsets are skipped.
    pub fn candidates<'a>(
        &self,
        shares: &'a [Share],
    ) -> impl Iterator<Item = Candidate> + 'a {
        Combinations::new(shares.len(), self.threshold)
            .filter_map(move |subset| Self::score(shares, subset))
    }

    fn score(shares: &[Share], subset: Vec<usize>) -> Option<Candidate> {
        match Candidate::evaluate(shares, subset.clone()) {
            Ok(candidate) => Some(candidate),
            Err(err) => {
                trace!("skipping subset {subset:?}: {err}");
                None
            }
        }
    }

    /// The best-scoring candidate over every combination.
    pub fn best(&self, shares: &[Share]) -> RecoveryResult<Candidate> {
        let no_polynomial = || RecoveryError::NoValidPolynomial {
            threshold: self.threshold,
            shares: shares.len(),
        };

        if self.threshold == 0 || self.threshold > shares.len() {
            return Err(no_polynomial());
        }

        debug!(
            "searching {} combinations of {} shares with threshold {}",
            binomial(shares.len(), self.threshold)
                .map_or_else(|| "too many".to_string(), |c| c.to_string()),
            shares.len(),
            self.threshold,
        );

        self.select(shares).ok_or_else(no_polynomial)
    }

    #[cfg(not(feature = "parallel"))]
    fn select(&self, shares: &[Share]) -> Option<Candidate> {
        select_best(self.candidates(shares))
    }

    #[cfg(feature = "parallel")]
    fn select(&self, shares: &[Share]) -> Option<Candidate> {
        use rayon::prelude::*;

        // collect preserves enumeration order, so the fold below sees the
        // same sequence as the sequential search
        let scored: Vec<Candidate> = Combinations::new(shares.len(), self.threshold)
            .collect::<Vec<_>>()
            .into_par_iter()
            .filter_map(|subset| Self::score(shares, subset))
            .collect();
        select_best(scored)
    }

    /// Recover the secret and the identifiers of disagreeing shares.
    pub fn recover(&self, shares: &[Share]) -> RecoveryResult<Recovery> {
        let best = self.best(shares)?;
        debug!(
            "subset {:?} agrees with {}/{} shares",
            best.subset,
            best.matches,
            shares.len()
        );
        if !best.secret.is_integer() {
            warn!(
                "recovered secret {} is not an integer; input may be inconsistent",
                best.secret
            );
        }
        Ok(Recovery::from_candidate(shares, self.threshold, best))
    }
}

/// Recover the secret from `shares` with threshold `k`.
pub fn recover(shares: &[Share], threshold: usize) -> RecoveryResult<Recovery> {
    SubsetSearch::new(threshold).recover(shares)
}
