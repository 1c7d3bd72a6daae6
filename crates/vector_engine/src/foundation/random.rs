//! Random ranges used for jitter, spawn positions and debris

use rand::Rng;

/// Uniform value in `[-|range|, |range|]`
pub fn signed<R: Rng + ?Sized>(rng: &mut R, range: f64) -> f64 {
    let range = range.abs();
    if range == 0.0 {
        0.0
    } else {
        rng.gen_range(-range..=range)
    }
}

/// Uniform value in `[0, |range|]`
pub fn unsigned<R: Rng + ?Sized>(rng: &mut R, range: f64) -> f64 {
    let range = range.abs();
    if range == 0.0 {
        0.0
    } else {
        rng.gen_range(0.0..=range)
    }
}

/// Either `-1.0` or `1.0`
pub fn sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// Uniform value in `[0, 1)`
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>()
}
