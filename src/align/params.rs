//!
//! AlignParams for alignment calculation
//!
use derive_new::new;
use serde::{Deserialize, Serialize};

///
/// How the per-example scalar cost is derived from the partition function Z
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostNorm {
    /// `-log Z`
    Total,
    /// `-log Z / T` (T = number of source frames)
    PerFrame,
}

///
/// AlignParams for forced alignment
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, new)]
pub struct AlignParams {
    ///
    /// lower bound applied to each source probability before the match
    /// lattice is built (the row is renormalized afterwards), so a hard
    /// zero in a prediction cannot kill the whole lattice
    pub prob_floor: f64,
    ///
    /// cost normalization of the batch variant
    pub cost_norm: CostNorm,
}

impl AlignParams {
    /// floor=f, total cost
    pub fn uniform_floor(f: f64) -> AlignParams {
        assert!(f >= 0.0 && f < 1.0);
        AlignParams::new(f, CostNorm::Total)
    }
    /// default floor, cost divided by the number of source frames
    pub fn per_frame() -> AlignParams {
        AlignParams::new(1e-6, CostNorm::PerFrame)
    }
}

impl Default for AlignParams {
    fn default() -> Self {
        AlignParams::uniform_floor(1e-6)
    }
}

impl std::fmt::Display for AlignParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "prob_floor: {}", self.prob_floor)?;
        writeln!(f, "cost_norm: {:?}", self.cost_norm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default() {
        let params = AlignParams::default();
        assert_eq!(params.prob_floor, 1e-6);
        assert_eq!(params.cost_norm, CostNorm::Total);
    }
    #[test]
    fn params_serialize() {
        let params = AlignParams::per_frame();
        let json = serde_json::to_string(&params).unwrap();
        let params2: AlignParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, params2);
    }
}
