use {
    crate::{
        configs::OuNoiseConfig,
        distributions::standard_normal,
        policies::Policy,
        spaces::EnvSpec,
        ConfigError,
    },
    anyhow::Result,
    candle_core::{
        Device,
        Tensor,
    },
    rand::rngs::StdRng,
};


/// Temporally correlated exploration noise from an Ornstein-Uhlenbeck
/// process.
///
/// The process state follows the Euler-Maruyama discretization of
/// `dx = theta * (mu - x) * dt + sigma * dW` with `dt = 1`, so successive
/// noise values are correlated rather than i.i.d. The state persists across
/// calls; [`OuNoise::reset`] reinitializes it to `mu`, typically at episode
/// boundaries.
#[derive(Debug)]
pub struct OuNoise {
    mu: f64,
    theta: f64,
    sigma: f64,
    low: Tensor,
    high: Tensor,
    state: Tensor,
    rng: StdRng,
    device: Device,
}
impl OuNoise {
    /// Fails with [`ConfigError::InvalidSpace`] unless the action space is a
    /// bounded continuous box.
    pub fn new(
        env_spec: &EnvSpec,
        config: &OuNoiseConfig,
        rng: StdRng,
        device: &Device,
    ) -> Result<Self> {
        if !env_spec.action_space.is_continuous() {
            Err(ConfigError::InvalidSpace(
                "the action space must be a continuous box".into(),
            ))?
        }
        if !env_spec.action_space.is_bounded() {
            Err(ConfigError::InvalidSpace(
                "the action space must have finite bounds".into(),
            ))?
        }

        let (low, high) = env_spec
            .action_space
            .bounds()
            .expect("continuous spaces have bounds, we checked above");
        let dim = env_spec.action_dim();

        Ok(Self {
            mu: config.mu,
            theta: config.theta,
            sigma: config.sigma,
            low: Tensor::from_vec(low, dim, device)?,
            high: Tensor::from_vec(high, dim, device)?,
            state: Tensor::full(config.mu, dim, device)?,
            rng,
            device: device.clone(),
        })
    }

    /// Reinitialize the process state to `mu`, discarding the prior state.
    pub fn reset(&mut self) -> candle_core::Result<()> {
        self.state = Tensor::full(self.mu, self.state.dims1()?, &self.device)?;
        Ok(())
    }

    /// Advance the process by one step and return a snapshot of the new
    /// state.
    pub fn evolve_state(&mut self) -> candle_core::Result<Tensor> {
        let noise = standard_normal(self.state.dims1()?, &mut self.rng, &self.device)?;
        let dx = ((self.theta * (self.mu - &self.state)?)? + (self.sigma * noise)?)?;
        self.state = (&self.state + dx)?;

        Ok(self.state.clone())
    }

    /// The base policy's action for this observation, perturbed by the
    /// evolved process state and clipped into the action bounds.
    ///
    /// The timestep `_t` is accepted but unused, reserved for time-varying
    /// noise schedules.
    pub fn get_action(
        &mut self,
        _t: usize,
        observation: &Tensor,
        policy: &mut dyn Policy,
    ) -> Result<Tensor> {
        let (action, _) = policy.get_action(observation)?;
        let noise = self.evolve_state()?;

        let action = (action + noise)?
            .maximum(&self.low)?
            .minimum(&self.high)?;

        Ok(action)
    }

    /// A read-only view of the current process state.
    pub fn state(&self) -> &Tensor {
        &self.state
    }

    #[cfg(test)]
    fn set_state(&mut self, state: Tensor) {
        self.state = state;
    }
}
