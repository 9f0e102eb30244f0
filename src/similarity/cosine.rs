// Cosine similarity between non-negative weight vectors.

/// Norms below this are treated as zero vectors.
const EPSILON: f64 = 1e-12;

/// Cosine of the angle between `a` and `b`, clamped to [0, 1].
///
/// The inputs are same-length TF-IDF vectors with non-negative components,
/// so the mathematical result already lies in [0, 1]; the clamp absorbs
/// floating-point overshoot. A vanishing norm on either side scores 0.0.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a < EPSILON || norm_b < EPSILON {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
