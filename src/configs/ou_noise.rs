use serde::{
    Serialize,
    Deserialize,
};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OuNoiseConfig {
    // The mean the process reverts towards.
    pub mu: f64,
    // The mean-reversion rate.
    pub theta: f64,
    // The scale of the noise term.
    pub sigma: f64,
}
impl Default for OuNoiseConfig {
    fn default() -> Self {
        Self {
            mu: 0.0,
            theta: 0.15,
            sigma: 0.3,
        }
    }
}
impl OuNoiseConfig {
    pub fn new(
        mu: f64,
        theta: f64,
        sigma: f64,
    ) -> Self {
        Self {
            mu,
            theta,
            sigma,
        }
    }
}
