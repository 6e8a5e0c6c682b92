//! # Policies
//!
//! A policy maps an observation to an action. The [`Policy`] trait is the
//! contract consumed by the exploration components in [`crate::components`]:
//! anything that can produce an action for an observation, with optional
//! auxiliary data alongside it.
//!
//! The [`GaussianMlpPolicy`] struct implements a stochastic policy whose
//! action distribution is a diagonal Gaussian with a network-predicted mean.

mod gaussian_mlp;

pub use gaussian_mlp::GaussianMlpPolicy;

use {
    anyhow::Result,
    candle_core::Tensor,
};


pub trait Policy {
    /// The action for this observation, plus any auxiliary data the policy
    /// computes alongside it (e.g. the action's log-density).
    fn get_action(
        &mut self,
        observation: &Tensor,
    ) -> Result<(Tensor, Option<Tensor>)>;
}
