use rand::Rng;
use std::f64::consts::TAU;

/// Standard normal CDF: `Φ(a)`.
pub fn normal_probability(a: f64) -> f64 {
    0.5 * (1.0 + libm::erf(a / (2.0f64).sqrt()))
}

/// Draws one standard-normal variate via the Box–Muller transform.
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    // random() is in [0, 1); reflect u1 into (0, 1] to keep the log finite.
    (-2.0 * (1.0 - u1).ln()).sqrt() * (TAU * u2).cos()
}
