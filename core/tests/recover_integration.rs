use math::{rat, BigInt, Rational};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recover_core::{
    recover, RecoveryError, Report, Share, ShareDocument, SubsetSearch,
};

const SEED: u64 = 0x5ec2e7;

/// Integer polynomial, lowest coefficient first.
fn evaluate(coeffs: &[BigInt], x: &BigInt) -> BigInt {
    coeffs
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, c| acc * x + c)
}

fn random_polynomial(rng: &mut StdRng, degree: usize) -> Vec<BigInt> {
    (0..=degree)
        .map(|_| {
            // products of two i64 draws push values well past machine width
            let hi = BigInt::from(rng.random_range(-1_000_000_000i64..1_000_000_000));
            let lo = BigInt::from(rng.random_range(0..i64::MAX));
            hi * BigInt::from(i64::MAX) + lo
        })
        .collect()
}

fn sample_shares(coeffs: &[BigInt], n: usize) -> Vec<Share> {
    (1..=n)
        .map(|x| {
            let x = BigInt::from(x);
            Share::new(x.to_string(), x.clone(), evaluate(coeffs, &x))
        })
        .collect()
}

fn corrupt(shares: &mut [Share], index: usize, delta: i64) {
    let share = &shares[index];
    let x = math::Point::x(share).clone();
    let y = math::Point::y(share) + BigInt::from(delta);
    shares[index] = Share::new(share.identifier().to_string(), x, y);
}

fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn helper<T: Clone>(
        items: &[T],
        k: usize,
        start: usize,
        current: &mut Vec<T>,
        result: &mut Vec<Vec<T>>,
    ) {
        if current.len() == k {
            result.push(current.clone());
            return;
        }
        for idx in start..items.len() {
            current.push(items[idx].clone());
            helper(items, k, idx + 1, current, result);
            current.pop();
        }
    }

    let mut result = Vec::new();
    let mut current = Vec::new();
    helper(items, k, 0, &mut current, &mut result);
    result
}

#[test]
fn single_corruption_scenario() {
    let mut shares = sample_shares(&[1.into(), 0.into(), 1.into()], 5);
    corrupt(&mut shares, 2, 1);

    let recovery = recover(&shares, 3).expect("recovery succeeds");
    assert_eq!(recovery.secret(), &rat!(1));
    assert_eq!(recovery.mismatched(), ["3".to_string()]);
    assert_eq!(recovery.matches(), 4);
    assert_eq!(
        Report::new(&recovery).to_string(),
        "Secret: 1\nWrong shares: 3"
    );
}

#[test]
fn single_corruption_without_spare_share_is_undetectable() {
    let mut shares = sample_shares(&[1.into(), 0.into(), 1.into()], 4);
    corrupt(&mut shares, 2, 1);

    let recovery = recover(&shares, 3).expect("recovery succeeds");
    assert_eq!(recovery.secret(), &rat!(2));
    assert_eq!(recovery.subset(), ["1", "2", "3"]);
    assert_eq!(recovery.mismatched(), ["4".to_string()]);
}

#[test]
fn different_threshold_configurations_succeed() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let configs = [(2, 3), (3, 5), (4, 6), (5, 8)];

    for (threshold, participants) in configs {
        let coeffs = random_polynomial(&mut rng, threshold - 1);
        let shares = sample_shares(&coeffs, participants);

        let recovery = recover(&shares, threshold).expect("recovery succeeds");
        assert_eq!(recovery.secret_integer(), Some(coeffs[0].clone()));
        assert!(recovery.is_unanimous());
        assert_eq!(recovery.matches(), participants);
    }
}

#[test]
fn every_threshold_subset_recovers_the_secret() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let coeffs = random_polynomial(&mut rng, 2);
    let shares = sample_shares(&coeffs, 6);

    for subset in combinations(&shares, 3) {
        let recovery = recover(&subset, 3).expect("recovery succeeds");
        assert_eq!(recovery.secret(), &Rational::from(coeffs[0].clone()));
    }
}

#[test]
fn tolerates_up_to_redundancy_minus_threshold_corruptions() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    let threshold = 3;
    let participants = 9;
    let coeffs = random_polynomial(&mut rng, threshold - 1);
    let mut shares = sample_shares(&coeffs, participants);

    // honest shares (6) must outvote any polynomial through corrupted ones,
    // which agrees with at most threshold - 1 honest shares plus the corrupted
    for (index, delta) in [(0, 17), (4, -3), (7, 1)] {
        corrupt(&mut shares, index, delta);
    }

    let recovery = recover(&shares, threshold).expect("recovery succeeds");
    assert_eq!(recovery.secret_integer(), Some(coeffs[0].clone()));
    assert_eq!(recovery.mismatched(), ["1", "5", "8"]);
    assert_eq!(recovery.matches(), participants - 3);
}

#[test]
fn duplicated_share_is_skipped_without_aborting() {
    let coeffs: Vec<BigInt> = vec![42.into(), (-7).into()];
    let mut shares = sample_shares(&coeffs, 3);
    let duplicate = shares[0].clone();
    shares.insert(1, duplicate);

    let recovery = recover(&shares, 2).expect("recovery succeeds");
    assert_eq!(recovery.secret(), &rat!(42));
    assert!(recovery.is_unanimous());
}

#[test]
fn failure_when_threshold_exceeds_shares() {
    let shares = sample_shares(&[5.into()], 2);
    let err = SubsetSearch::new(3).recover(&shares).unwrap_err();
    assert!(matches!(
        err,
        RecoveryError::NoValidPolynomial { threshold: 3, shares: 2 }
    ));
    assert_eq!(
        err.to_string(),
        "No valid polynomial found: threshold 3 over 2 shares"
    );
}

#[test]
fn document_round_trip_through_recovery() {
    let doc = ShareDocument::from_json(
        r#"{
            "keys": { "n": 6, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": "10", "value": "12" },
            "4": { "base": "4", "value": "103" },
            "6": { "base": "16", "value": "2a" }
        }"#,
    )
    .expect("document parses");

    // f(x) = x^2 + 3: 4, 7, 12, 19, 39; "6" should be 39 but is 42
    assert!(doc.count_mismatch().is_some());
    let recovery = doc.recover().expect("recovery succeeds");
    assert_eq!(recovery.secret_integer(), Some(BigInt::from(3)));
    assert_eq!(recovery.mismatched(), ["6".to_string()]);
    assert_eq!(recovery.subset(), ["1", "2", "3"]);
}

#[test]
fn threshold_override_is_honoured() {
    let doc = ShareDocument::from_json(
        r#"{
            "keys": { "n": 3, "k": 3 },
            "1": { "base": "10", "value": "5" },
            "2": { "base": "10", "value": "7" },
            "3": { "base": "10", "value": "9" }
        }"#,
    )
    .expect("document parses");

    let linear = doc.recover_with_threshold(2).expect("recovery succeeds");
    let quadratic = doc.recover().expect("recovery succeeds");
    assert_eq!(linear.threshold(), 2);
    assert_eq!(quadratic.threshold(), 3);
    // collinear points: the quadratic fit degenerates to the same line
    assert_eq!(linear.secret(), quadratic.secret());
    assert_eq!(linear.secret(), &rat!(3));
}
