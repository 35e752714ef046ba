//! Tests for the public vector API: construction, ownership, indexing, arithmetic
//! and the free functions.

use approx::assert_abs_diff_eq;
use rand::Rng;
use vctr::{are_perpendicular, dot_product, unit_vector, vector, VError, Vector};

/// Writing any valid index and reading it back returns the written value, and
/// every index at or past the end fails with `OutOfBounds`.
#[test]
fn write_then_read_and_bounds() {
    let mut rng = rand::thread_rng();
    let n = 64;
    let mut v: Vector<f64> = Vector::with_dimensions(n);
    for i in 0..n {
        let x: f64 = rng.r#gen();
        *v.get_mut(i).unwrap() = x;
        assert_eq!(*v.get(i).unwrap(), x);
    }
    for i in [n, n + 1, usize::MAX] {
        assert_eq!(v.get(i), Err(VError::OutOfBounds { index: i, dimensions: n }));
    }
}

/// A copy compares equal to its source and mutating it leaves the source alone.
#[test]
fn copy_isolation() {
    let v = vector![1, 2, 3];
    let mut c = v.clone();
    assert_eq!(c, v);
    c[0] = 99;
    assert_eq!(v[0], 1);
    assert_eq!(c[0], 99);
}

/// Moving out leaves the source at zero dimensions and the destination intact.
#[test]
fn move_semantics() {
    let mut v = vector![1, 2, 3, 4];
    let w = v.take();
    assert_eq!(w.dimensions(), 4);
    assert_eq!(w, vector![1, 2, 3, 4]);
    assert_eq!(v.dimensions(), 0);
    assert_eq!(v.get(0), Err(VError::OutOfBounds { index: 0, dimensions: 0 }));

    // the neutralized source is still usable
    v.assign(&w);
    assert_eq!(v, w);
}

#[test]
fn add_is_commutative() {
    let mut rng = rand::thread_rng();
    let a: Vector<f64> = (0..100).map(|_| rng.r#gen()).collect();
    let b: Vector<f64> = (0..100).map(|_| rng.r#gen()).collect();
    assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());

    let sum = a.add(&b).unwrap();
    let back = sum.subtract(&b).unwrap();
    for i in 0..a.dimensions() {
        assert_abs_diff_eq!(back[i], a[i], epsilon = 1e-12);
    }
}

#[test]
fn size_mismatch_detected() {
    let a = vector![7, 8, 9, 12];
    let b = vector![2, 3, 4, 14, 7];
    assert!(matches!(a.add(&b), Err(VError::SizeMismatch { .. })));
    assert!(matches!(a.subtract(&b), Err(VError::SizeMismatch { .. })));
    assert!(matches!(dot_product(&a, &b), Err(VError::SizeMismatch { .. })));
    let msg = a.add(&b).unwrap_err().to_string();
    assert!(msg.contains("unequal vector sizes"), "{msg}");
}

#[test]
fn dot_product_and_magnitude_exact() {
    assert_eq!(dot_product(&vector![7, 3, 9, 12], &vector![2, 8, 4, 17]), Ok(278));
    assert_eq!(vector![3, 4].magnitude(), 5.0);
}

#[test]
fn empty_operands() {
    let e: Vector<i32> = vector![];
    assert_eq!(dot_product(&e, &e), Err(VError::EmptyOperand));
    assert_eq!(
        VError::EmptyOperand.to_string(),
        "cannot dot product null vectors"
    );
    assert_eq!(e.add(&e), Ok(Vector::default()));
    assert_eq!(e.magnitude(), 0.0);
}

#[test]
fn perpendicular_and_unit() {
    assert_eq!(are_perpendicular(&vector![2.0, 0.0], &vector![0.0, -3.0]), Ok(true));
    let u = unit_vector(&vector![0.0, 0.0, 9.0]).unwrap();
    assert_eq!(u, vector![0.0, 0.0, 1.0]);
    assert_eq!(unit_vector(&vector![0, 0]), Err(VError::DegenerateVector));
}

/// `begin()..end()` visits exactly `v[0], ..., v[n-1]`.
#[test]
fn cursor_traversal_equals_indexed_traversal() {
    let mut rng = rand::thread_rng();
    for n in [0usize, 1, 17] {
        let v: Vector<i64> = (0..n).map(|_| rng.gen_range(-100..100)).collect();
        let mut seen = Vec::new();
        let mut it = v.begin();
        while it < v.end() {
            seen.push(*it.get().unwrap());
            it += 1;
        }
        let indexed: Vec<i64> = (0..v.dimensions()).map(|i| v[i]).collect();
        assert_eq!(seen, indexed);
        assert_eq!(v.end() - v.begin(), n as isize);
    }
}
