use float_cmp::approx_eq;
use test_case::test_case;

use vector_distances::vectors::{
    chebyshev, city_block, cosine, euclidean, hamming, jaccard, minkowski, sq_euclidean,
};

const X: [f64; 4] = [4.0, 5.0, 6.0, 7.0];
const Y: [f64; 4] = [3.0, 9.0, 8.0, 1.0];

#[test_case(&[1.0] ; "one")]
#[test_case(&[2.0] ; "two")]
#[test_case(&[3.0] ; "three")]
fn one_dimension_equal(x: &[f64]) {
    assert_eq!(euclidean(x, x), Ok(0.0));
    assert_eq!(sq_euclidean(x, x), Ok(0.0));
    assert_eq!(city_block(x, x), Ok(0.0));
    assert_eq!(chebyshev(x, x), Ok(0.0));
    assert_eq!(minkowski(x, x, 1.0), Ok(0.0));
    assert_eq!(minkowski(x, x, 2.0), Ok(0.0));
    assert_eq!(minkowski(x, x, f64::INFINITY), Ok(0.0));
    assert_eq!(hamming(x, x), Ok(0.0));
    assert_eq!(cosine(x, x), Ok(0.0));
    assert_eq!(jaccard(x, x), Ok(0.0));
}

#[test_case(&[1.0], &[2.0] ; "one_two")]
#[test_case(&[2.0], &[3.0] ; "two_three")]
#[test_case(&[3.0], &[4.0] ; "three_four")]
fn one_dimension_different(x: &[f64], y: &[f64]) {
    assert_eq!(euclidean(x, y), Ok(1.0));
    assert_eq!(sq_euclidean(x, y), Ok(1.0));
    assert_eq!(city_block(x, y), Ok(1.0));
    assert_eq!(chebyshev(x, y), Ok(1.0));
    assert_eq!(minkowski(x, y, 1.0), Ok(1.0));
    assert_eq!(minkowski(x, y, 2.0), Ok(1.0));
    assert_eq!(minkowski(x, y, f64::INFINITY), Ok(1.0));
    assert_eq!(hamming(x, y), Ok(1.0));
    assert_eq!(jaccard(x, y), Ok(1.0));
}

#[test]
fn lp_norms() {
    assert_eq!(sq_euclidean(&X, &Y), Ok(57.0));
    assert_eq!(euclidean(&X, &Y), Ok(57_f64.sqrt()));
    assert_eq!(euclidean(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 1.0]), Ok(3.0));
    assert_eq!(city_block(&X, &Y), Ok(13.0));
    assert_eq!(chebyshev(&X, &Y), Ok(6.0));
}

#[test_case(&X, &Y, 1.0, 13.0 ; "l1")]
#[test_case(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 1.0], 2.0, 3.0 ; "l2_small")]
#[test_case(&X, &Y, 2.0, 57_f64.sqrt() ; "l2")]
#[test_case(&X, &Y, f64::INFINITY, 6.0 ; "l_inf")]
fn minkowski_orders(x: &[f64], y: &[f64], p: f64, expected: f64) {
    let actual = minkowski(x, y, p).unwrap();
    assert!(
        approx_eq!(f64, actual, expected, ulps = 2),
        "Minkowski p={p}: expected: {expected}, actual: {actual}"
    );
}

#[test]
fn minkowski_infinity_is_chebyshev() {
    let x = [0.5_f32, -1.25, 3.0];
    let y = [2.0_f32, 0.75, -4.5];
    assert_eq!(minkowski(&x, &y, f32::INFINITY), chebyshev(&x, &y));
}

#[test]
fn minkowski_degenerate_orders() {
    let x = [1.0_f64, 2.0];
    let y = [2.0_f64, 4.0];

    // Every |d|^0 is one, and 2^(1/0) overflows.
    assert_eq!(minkowski(&x, &y, 0.0), Ok(f64::INFINITY));

    // (1^-1 + 2^-1)^-1
    let actual = minkowski(&x, &y, -1.0).unwrap();
    assert!(approx_eq!(f64, actual, 2.0 / 3.0, ulps = 2), "{actual}");

    assert!(minkowski(&x, &y, f64::NAN).unwrap().is_nan());
}

#[test_case(&X, &Y, 4.0 ; "all_differ")]
#[test_case(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 1.0], 1.0 ; "last_differs")]
#[test_case(&[1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0], &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0], 2.0 ; "binary")]
fn hamming_counts(x: &[f64], y: &[f64], expected: f64) {
    assert_eq!(hamming(x, y), Ok(expected));
}

#[test]
fn hamming_uses_exact_equality() {
    let x = [1.0_f64, 2.0];
    let y = [1.0 + f64::EPSILON, 2.0];
    assert_eq!(hamming(&x, &y), Ok(1.0));
}

#[test]
fn cosine_distances() {
    assert_eq!(cosine(&X, &Y), Ok(1.0 - 112.0 / 19530_f64.sqrt()));

    let opposite = X.map(|v| -v);
    let actual = cosine(&X, &opposite).unwrap();
    assert!(approx_eq!(f64, actual, 2.0, ulps = 2), "{actual}");

    assert_eq!(cosine(&[1.0_f32, 0.0], &[0.0, 1.0]), Ok(1.0));
}

#[test]
fn cosine_zero_vector_is_nan() {
    let zero = [0.0_f64; 4];
    assert!(cosine(&X, &zero).unwrap().is_nan());
    assert!(cosine(&zero, &X).unwrap().is_nan());
    assert!(cosine(&zero, &zero).unwrap().is_nan());
}

#[test]
fn jaccard_mismatch_ratio() {
    let x = [2.5, 3.5, 3.0, 3.5, 2.5, 3.0];
    let y = [3.0, 3.5, 1.5, 5.0, 3.5, 3.0];
    assert_eq!(jaccard(&x, &y), Ok(0.666_666_666_666_666_7));

    assert_eq!(jaccard(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]), Ok(0.0));
    assert_eq!(jaccard(&X, &Y), Ok(1.0));
}

#[test]
fn empty_vectors() {
    let e: [f64; 0] = [];

    assert_eq!(sq_euclidean(&e, &e), Ok(0.0));
    assert_eq!(euclidean(&e, &e), Ok(0.0));
    assert_eq!(city_block(&e, &e), Ok(0.0));
    assert_eq!(chebyshev(&e, &e), Ok(0.0));
    assert_eq!(minkowski(&e, &e, 3.0), Ok(0.0));
    assert_eq!(hamming(&e, &e), Ok(0.0));
    assert!(cosine(&e, &e).unwrap().is_nan());
    assert!(jaccard(&e, &e).unwrap().is_nan());
}

type Distance = fn(&[f64], &[f64]) -> vector_distances::Result<f64>;

fn minkowski_3(x: &[f64], y: &[f64]) -> vector_distances::Result<f64> {
    minkowski(x, y, 3.0)
}

fn minkowski_inf(x: &[f64], y: &[f64]) -> vector_distances::Result<f64> {
    minkowski(x, y, f64::INFINITY)
}

#[test_case(sq_euclidean ; "sq_euclidean")]
#[test_case(euclidean ; "euclidean")]
#[test_case(city_block ; "city_block")]
#[test_case(chebyshev ; "chebyshev")]
#[test_case(minkowski_3 ; "minkowski")]
#[test_case(minkowski_inf ; "minkowski_inf")]
#[test_case(cosine ; "cosine")]
fn nan_element_propagates(distance: Distance) {
    let x = [1.0, f64::NAN, 3.0];
    let y = [1.0, 2.0, 5.0];

    assert!(distance(&x, &y).unwrap().is_nan(), "{:?}", distance(&x, &y));
    assert!(distance(&y, &x).unwrap().is_nan(), "{:?}", distance(&y, &x));
}

#[test]
fn nan_element_counts_as_mismatch() {
    let x = [1.0, f64::NAN, 3.0];
    let y = [1.0, 2.0, 3.0];
    assert_eq!(hamming(&x, &y), Ok(1.0));

    // NaN is not equal to itself either.
    assert_eq!(hamming(&x, &x), Ok(1.0));

    let actual = jaccard(&x, &y).unwrap();
    assert!(approx_eq!(f64, actual, 1.0 / 3.0, ulps = 2), "{actual}");
}

#[test_case(sq_euclidean ; "sq_euclidean")]
#[test_case(euclidean ; "euclidean")]
#[test_case(city_block ; "city_block")]
#[test_case(chebyshev ; "chebyshev")]
#[test_case(minkowski_3 ; "minkowski")]
#[test_case(minkowski_inf ; "minkowski_inf")]
fn infinite_element_propagates(distance: Distance) {
    let y = [1.0, 2.0, 5.0];

    let x = [1.0, f64::INFINITY, 3.0];
    assert_eq!(distance(&x, &y), Ok(f64::INFINITY));

    let x = [1.0, f64::NEG_INFINITY, 3.0];
    assert_eq!(distance(&x, &y), Ok(f64::INFINITY));
}

#[test]
fn chebyshev_infinity_beats_nan() {
    let x = [f64::NAN, f64::INFINITY];
    let y = [0.0, 0.0];

    assert_eq!(chebyshev(&x, &y), Ok(f64::INFINITY));
    assert_eq!(minkowski(&x, &y, f64::INFINITY), Ok(f64::INFINITY));
}
