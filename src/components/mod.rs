//! # Components
//!
//! This module contains the components that can be used to build an agent.
//!
//! ## Noise
//!
//! The `Noise` components are typically used to add noise to the actions of
//! an agent. The [`OuNoise`] struct implements the Ornstein-Uhlenbeck
//! process, which wraps a base [`crate::policies::Policy`] and perturbs its
//! actions with temporally correlated noise, as is typically done in
//! deterministic-policy algorithms such as DDPG.

mod ou_noise;

pub use ou_noise::OuNoise;
