//! Randomized property tests over the public matrix API

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sptx::SparseMatrix;

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, writes: usize) -> SparseMatrix {
    let mut m = SparseMatrix::new(rows, cols);
    for _ in 0..writes {
        let r = rng.gen_range(0..rows);
        let c = rng.gen_range(0..cols);
        // Skewed toward small magnitudes so additive cancellation happens
        m.set(r, c, rng.gen_range(-4..=4));
    }
    m
}

#[test]
fn round_trip_preserves_random_matrices() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..50 {
        let m = random_matrix(&mut rng, 30, 17, 100);
        let text = m.to_text();
        assert_eq!(SparseMatrix::parse_str(&text, "prop").unwrap(), m);
    }
}

#[test]
fn add_and_subtract_never_store_zero() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..50 {
        let a = random_matrix(&mut rng, 12, 12, 60);
        let b = random_matrix(&mut rng, 12, 12, 60);

        for result in [a.add(&b).unwrap(), a.subtract(&b).unwrap()] {
            assert!(result.iter().all(|(_, value)| value != 0));
        }
    }
}

#[test]
fn additive_identity_and_inverse() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let a = random_matrix(&mut rng, 9, 14, 40);
        let zero = SparseMatrix::new(9, 14);

        assert_eq!(a.add(&zero).unwrap(), a);

        let diff = a.subtract(&a).unwrap();
        assert_eq!(diff.nnz(), 0);
        assert_eq!(diff.shape(), a.shape());
    }
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..50 {
        let a = random_matrix(&mut rng, 21, 8, 70);
        assert_eq!(a.transpose().transpose(), a);
    }
}

#[test]
fn multiplication_shape_law() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let a = random_matrix(&mut rng, 7, 11, 30);
        let b = random_matrix(&mut rng, 11, 5, 30);
        let product = a.multiply(&b).unwrap();

        assert_eq!(product.rows(), a.rows());
        assert_eq!(product.cols(), b.cols());
        assert!(product.iter().all(|(_, value)| value != 0));
    }
}

#[test]
fn multiplication_matches_dense_reference() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..20 {
        let a = random_matrix(&mut rng, 6, 8, 25);
        let b = random_matrix(&mut rng, 8, 7, 25);
        let product = a.multiply(&b).unwrap();

        for r in 0..a.rows() {
            for c in 0..b.cols() {
                let expected: i64 = (0..a.cols()).map(|k| a.get(r, k) * b.get(k, c)).sum();
                assert_eq!(product.get(r, c), expected);
            }
        }
    }
}

#[test]
fn transpose_distributes_over_multiplication() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let a = random_matrix(&mut rng, 5, 9, 20);
        let b = random_matrix(&mut rng, 9, 4, 20);

        // (A * B)^T = B^T * A^T
        let lhs = a.multiply(&b).unwrap().transpose();
        let rhs = b.transpose().multiply(&a.transpose()).unwrap();
        assert_eq!(lhs, rhs);
    }
}
