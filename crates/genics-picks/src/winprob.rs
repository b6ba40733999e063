//! Normal-model win probability for a prop line.

use crate::types::Direction;

/// Standard normal CDF.
///
/// Uses the Abramowitz–Stegun 7.1.26 erf approximation (max absolute error
/// ~1.5e-7), which is plenty for probabilities displayed to two decimals.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();

    sign * y
}

/// P(outcome clears the line) under Normal(projection, sigma).
///
/// `Over` is P(X > line), `Under` is P(X < line). Degenerate sigma (≤ 0)
/// collapses to a step function at the line.
pub fn win_probability(line: f64, projection: f64, sigma: f64, direction: Direction) -> f64 {
    if sigma <= 0.0 {
        let over_hits = projection > line;
        return match direction {
            Direction::Over if over_hits => 1.0,
            Direction::Under if !over_hits => 1.0,
            _ => 0.0,
        };
    }
    let z = (line - projection) / sigma;
    match direction {
        Direction::Over => 1.0 - normal_cdf(z),
        Direction::Under => normal_cdf(z),
    }
}
