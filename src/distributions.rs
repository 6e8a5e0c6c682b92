//! # Distributions
//!
//! The [`DiagGaussian`] distribution backs the stochastic policies in
//! [`crate::policies`]: a multivariate normal with zero off-diagonal
//! covariance, so sampling and log-densities factor per dimension.
//!
//! All randomness is drawn from a caller-supplied [`RngCore`] so that seeded
//! runs are reproducible.

use {
    candle_core::{
        Device,
        Result,
        Tensor,
    },
    rand::RngCore,
    rand_distr::{
        Distribution,
        StandardNormal,
    },
};


/// A vector of independent standard-normal draws as a rank-1 tensor.
pub(crate) fn standard_normal(
    dim: usize,
    rng: &mut dyn RngCore,
    device: &Device,
) -> Result<Tensor> {
    let samples: Vec<f64> = (0..dim).map(|_| StandardNormal.sample(rng)).collect();
    Tensor::from_vec(samples, dim, device)
}


/// A diagonal-covariance Gaussian over rank-1 tensors.
pub struct DiagGaussian {
    mu: Tensor,
    std: Tensor,
}
impl DiagGaussian {
    pub fn new(
        mu: Tensor,
        std: Tensor,
    ) -> Self {
        Self { mu, std }
    }

    pub fn mean(&self) -> &Tensor {
        &self.mu
    }

    pub fn std(&self) -> &Tensor {
        &self.std
    }

    /// Draw one value via the reparameterization `mu + std * eps`.
    pub fn sample(
        &self,
        rng: &mut dyn RngCore,
    ) -> Result<Tensor> {
        let eps = standard_normal(self.mu.dims1()?, rng, self.mu.device())?;
        &self.mu + self.std.mul(&eps)?
    }

    /// The per-dimension log-probability-density of `value`.
    ///
    /// Returns a vector; summing it gives the joint log-density, since the
    /// dimensions are independent.
    pub fn log_prob(
        &self,
        value: &Tensor,
    ) -> Result<Tensor> {
        let var = self.std.sqr()?;
        let log_std = self.std.log()?;
        let log_sqrt_2pi = Tensor::full(
            f64::ln(f64::sqrt(2.0 * std::f64::consts::PI)),
            self.mu.shape(),
            self.mu.device(),
        )?;

        ((((value - &self.mu)?.sqr()? / (2.0 * var)?)?.neg()? - &log_std)? - &log_sqrt_2pi)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{
        SeedableRng,
        rngs::StdRng,
    };

    fn unit_gaussian(dim: usize) -> DiagGaussian {
        let device = Device::Cpu;
        DiagGaussian::new(
            Tensor::zeros(dim, candle_core::DType::F64, &device).unwrap(),
            Tensor::ones(dim, candle_core::DType::F64, &device).unwrap(),
        )
    }

    #[test]
    fn test_sample_shape_and_finite_log_prob() {
        let dist = unit_gaussian(4);
        let mut rng = StdRng::seed_from_u64(42);

        let value = dist.sample(&mut rng).unwrap();
        assert_eq!(value.dims1().unwrap(), 4);

        let log_prob = dist.log_prob(&value).unwrap();
        let summed = log_prob.sum_all().unwrap().to_scalar::<f64>().unwrap();
        assert!(summed.is_finite());
    }

    #[test]
    fn test_log_prob_at_mean() {
        // At the mean of a unit Gaussian the density is 1/sqrt(2*pi) per
        // dimension.
        let dist = unit_gaussian(2);
        let value = Tensor::zeros(2, candle_core::DType::F64, &Device::Cpu).unwrap();

        let log_prob = dist.log_prob(&value).unwrap().to_vec1::<f64>().unwrap();
        let expected = -f64::ln(f64::sqrt(2.0 * std::f64::consts::PI));

        for lp in log_prob {
            assert!((lp - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let dist = unit_gaussian(3);

        let a = dist
            .sample(&mut StdRng::seed_from_u64(7))
            .unwrap()
            .to_vec1::<f64>()
            .unwrap();
        let b = dist
            .sample(&mut StdRng::seed_from_u64(7))
            .unwrap()
            .to_vec1::<f64>()
            .unwrap();

        assert_eq!(a, b);
    }
}
