use serde::{
    Serialize,
    Deserialize,
};


/// Activation function applied between or after the layers of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nonlinearity {
    Relu,
    Tanh,
    Linear,
}

/// How the standard deviation of a Gaussian policy is parameterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StdParameterization {
    // Fixed at its initial value.
    Fixed,
    // The log-std vector is a trainable parameter.
    Learned,
    // Predicted from the observation by a second network head.
    // Reserved: rejected at construction.
    Adaptive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianMlpConfig {
    // The sizes of the hidden layers of the mean network.
    pub hidden_sizes: Vec<usize>,
    // Whether the standard deviation is fixed, learned, or adaptive.
    pub std_parameterization: StdParameterization,
    // The initial per-dimension standard deviation.
    pub init_std: f64,
    // Activations for the hidden layers and the output layer.
    pub hidden_nonlinearity: Nonlinearity,
    pub output_nonlinearity: Nonlinearity,
}
impl Default for GaussianMlpConfig {
    fn default() -> Self {
        Self {
            hidden_sizes: vec![32, 32],
            std_parameterization: StdParameterization::Learned,
            init_std: 1.0,
            hidden_nonlinearity: Nonlinearity::Tanh,
            output_nonlinearity: Nonlinearity::Tanh,
        }
    }
}
impl GaussianMlpConfig {
    pub fn new(
        hidden_sizes: Vec<usize>,
        std_parameterization: StdParameterization,
        init_std: f64,
        hidden_nonlinearity: Nonlinearity,
        output_nonlinearity: Nonlinearity,
    ) -> Self {
        Self {
            hidden_sizes,
            std_parameterization,
            init_std,
            hidden_nonlinearity,
            output_nonlinearity,
        }
    }
}
