//! Normal-distribution approximation for the shock index
//!
//! The shock index asks: what is the probability that an endurance check
//! succeeds against a difficulty that grows with the universal penalty?
//! Modeled as a normal CDF with mean 3.5 x penalty and stddev = penalty.

use std::f64::consts::PI;

// Abramowitz & Stegun 26.2.17 rational approximation coefficients
const P: f64 = 0.231_641_9;
const B1: f64 = 0.319_381_530;
const B2: f64 = -0.356_563_782;
const B3: f64 = 1.781_477_937;
const B4: f64 = -1.821_255_978;
const B5: f64 = 1.330_274_429;

/// Standard normal CDF, accurate to about 1e-7.
pub fn normal_cdf(z: f64) -> f64 {
    let t = 1.0 / (1.0 + P * z.abs());
    let poly = t * (B1 + t * (B2 + t * (B3 + t * (B4 + t * B5))));
    let pdf = (-z * z / 2.0).exp() / (2.0 * PI).sqrt();
    let upper = 1.0 - pdf * poly;
    if z >= 0.0 {
        upper
    } else {
        1.0 - upper
    }
}

/// Probability, as a rounded percentage, that `observed` beats a check
/// distributed as Normal(mean, stddev). A zero stddev degenerates to a
/// step function: 0 below the mean, 100 at or above it.
pub fn success_probability_percent(observed: f64, mean: f64, stddev: f64) -> i32 {
    if stddev == 0.0 {
        if observed < mean {
            0
        } else {
            100
        }
    } else {
        (normal_cdf((observed - mean) / stddev) * 100.0).round() as i32
    }
}
