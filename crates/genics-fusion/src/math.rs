//! Clamped log-odds primitives.
//!
//! `logit` clamps its argument into [ε, 1−ε] before taking the log-odds, so
//! no probability input can produce ±∞; `sigmoid` therefore always maps back
//! strictly inside (0, 1).

/// Log-odds of a probability, domain-clamped by `epsilon`.
pub fn logit(p: f64, epsilon: f64) -> f64 {
    let p = p.clamp(epsilon, 1.0 - epsilon);
    (p / (1.0 - p)).ln()
}

/// Inverse of `logit`: map log-odds back to a probability.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1.0e-4;

    #[test]
    fn logit_is_finite_at_the_degenerate_ends() {
        assert!(logit(0.0, EPS).is_finite());
        assert!(logit(1.0, EPS).is_finite());
        assert_eq!(logit(0.5, EPS), 0.0);
    }

    #[test]
    fn sigmoid_inverts_logit() {
        for p in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let back = sigmoid(logit(p, EPS));
            assert!((back - p).abs() < 1e-12, "{p} round-tripped to {back}");
        }
    }

    #[test]
    fn sigmoid_strictly_inside_unit_interval() {
        for z in [-30.0, -5.0, 0.0, 5.0, 30.0] {
            let p = sigmoid(z);
            assert!(p > 0.0 && p < 1.0, "sigmoid({z}) = {p}");
        }
    }
}
