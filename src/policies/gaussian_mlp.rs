use {
    super::Policy,
    crate::{
        configs::{
            GaussianMlpConfig,
            Nonlinearity,
            StdParameterization,
        },
        distributions::DiagGaussian,
        spaces::EnvSpec,
        ConfigError,
    },
    anyhow::Result,
    candle_core::{
        DType,
        Device,
        Module,
        Tensor,
    },
    candle_nn::{
        func,
        linear,
        sequential::seq,
        Activation,
        Init,
        Sequential,
        VarBuilder,
        VarMap,
    },
    rand::rngs::StdRng,
    tracing::info,
};


fn add_nonlinearity(
    network: Sequential,
    nonlinearity: Nonlinearity,
) -> Sequential {
    match nonlinearity {
        Nonlinearity::Relu => network.add(Activation::Relu),
        Nonlinearity::Tanh => network.add(func(|xs| xs.tanh())),
        Nonlinearity::Linear => network,
    }
}

fn make_mean_network(
    vb: &VarBuilder,
    obs_dim: usize,
    action_dim: usize,
    config: &GaussianMlpConfig,
) -> candle_core::Result<Sequential> {
    let mut network = seq();
    let mut in_dim = obs_dim;

    for (i, &hidden) in config.hidden_sizes.iter().enumerate() {
        network = network.add(linear(in_dim, hidden, vb.pp(format!("mean-fc{i}")))?);
        network = add_nonlinearity(network, config.hidden_nonlinearity);
        in_dim = hidden;
    }
    network = network.add(linear(in_dim, action_dim, vb.pp("mean-out"))?);

    Ok(add_nonlinearity(network, config.output_nonlinearity))
}


/// A stochastic policy with a diagonal-Gaussian action distribution.
///
/// The mean is predicted from the observation by a small feed-forward
/// network; the standard deviation is `exp(log_std)` with one entry per
/// action dimension, shared across observations. All parameters live in the
/// [`VarMap`] so that an external optimizer can update them; the policy
/// itself never takes a gradient step.
pub struct GaussianMlpPolicy {
    varmap: VarMap,
    mean_network: Sequential,
    log_std: Tensor,
    obs_dim: usize,
    action_dim: usize,
    rng: StdRng,
}
impl GaussianMlpPolicy {
    pub fn new(
        env_spec: &EnvSpec,
        config: &GaussianMlpConfig,
        rng: StdRng,
        device: &Device,
    ) -> Result<Self> {
        if let StdParameterization::Adaptive = config.std_parameterization {
            Err(ConfigError::NotSupported(
                "adaptive std requires a second network head".into(),
            ))?
        }

        let obs_dim = env_spec.obs_dim();
        let action_dim = env_spec.action_dim();

        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F64, device);

        let mean_network = make_mean_network(&vb, obs_dim, action_dim, config)?;
        let log_std = match config.std_parameterization {
            StdParameterization::Learned => vb.get_with_hints(
                action_dim,
                "log-std",
                Init::Const(config.init_std.ln()),
            )?,
            StdParameterization::Fixed => {
                Tensor::full(config.init_std.ln(), action_dim, device)?
            },
            StdParameterization::Adaptive => unreachable!("rejected above"),
        };

        info!(
            "Built Gaussian MLP policy: {} -> {:?} -> {}",
            obs_dim,
            config.hidden_sizes,
            action_dim,
        );

        Ok(Self {
            varmap,
            mean_network,
            log_std,
            obs_dim,
            action_dim,
            rng,
        })
    }

    /// The action distribution conditioned on `obs`, as a pure function of
    /// the current parameters.
    pub fn distribution(
        &self,
        obs: &Tensor,
    ) -> candle_core::Result<DiagGaussian> {
        // Candle assumes a batch dimension, so when we don't have one we need
        // to pretend we do by un- and resqueezing the observation tensor.
        let mean = self.mean_network.forward(&obs.unsqueeze(0)?)?.squeeze(0)?;
        let std = self.log_std.exp()?;

        Ok(DiagGaussian::new(mean, std))
    }

    /// Draw one action and the log-density of that same draw, summed over
    /// the action dimensions.
    pub fn sample(
        &mut self,
        obs: &Tensor,
    ) -> candle_core::Result<(Tensor, Tensor)> {
        let dist = self.distribution(obs)?;
        let action = dist.sample(&mut self.rng)?.detach();
        let log_density = dist.log_prob(&action)?.sum_all()?;

        Ok((action, log_density))
    }

    /// The summed log-density of a given (e.g. replayed) action under the
    /// distribution conditioned on `obs`.
    pub fn log_density(
        &self,
        obs: &Tensor,
        action: &Tensor,
    ) -> candle_core::Result<Tensor> {
        self.distribution(obs)?.log_prob(action)?.sum_all()
    }

    pub fn log_std(&self) -> &Tensor {
        &self.log_std
    }

    pub fn obs_dim(&self) -> usize {
        self.obs_dim
    }

    pub fn action_dim(&self) -> usize {
        self.action_dim
    }

    /// The parameter store, for wiring up an external optimizer.
    pub fn varmap(&self) -> &VarMap {
        &self.varmap
    }
}

impl Policy for GaussianMlpPolicy {
    fn get_action(
        &mut self,
        observation: &Tensor,
    ) -> Result<(Tensor, Option<Tensor>)> {
        let (action, log_density) = self.sample(observation)?;
        Ok((action, Some(log_density)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::Space;
    use rand::SeedableRng;

    fn spec() -> EnvSpec {
        EnvSpec::new(
            Space::uniform_box(f64::NEG_INFINITY, f64::INFINITY, 3),
            Space::uniform_box(-1.0, 1.0, 2),
        )
    }

    fn policy(config: &GaussianMlpConfig) -> GaussianMlpPolicy {
        GaussianMlpPolicy::new(
            &spec(),
            config,
            StdRng::seed_from_u64(42),
            &Device::Cpu,
        ).unwrap()
    }

    fn observation() -> Tensor {
        Tensor::zeros(3, DType::F64, &Device::Cpu).unwrap()
    }

    #[test]
    fn test_sample_shape_and_finite_density() {
        let mut policy = policy(&GaussianMlpConfig::default());

        let (action, log_density) = policy.sample(&observation()).unwrap();

        assert_eq!(action.dims1().unwrap(), 2);
        assert!(log_density.to_scalar::<f64>().unwrap().is_finite());
    }

    #[test]
    fn test_sample_density_matches_log_density() {
        let mut policy = policy(&GaussianMlpConfig::default());
        let obs = observation();

        let (action, log_density) = policy.sample(&obs).unwrap();
        let recomputed = policy.log_density(&obs, &action).unwrap();

        let diff = log_density.to_scalar::<f64>().unwrap()
            - recomputed.to_scalar::<f64>().unwrap();
        assert!(diff.abs() < 1e-12);
    }

    #[test]
    fn test_init_std_is_monotonic() {
        let narrow = policy(&GaussianMlpConfig {
            init_std: 0.5,
            ..GaussianMlpConfig::default()
        });
        let wide = policy(&GaussianMlpConfig {
            init_std: 1.5,
            ..GaussianMlpConfig::default()
        });

        let narrow = narrow.log_std().to_vec1::<f64>().unwrap();
        let wide = wide.log_std().to_vec1::<f64>().unwrap();

        for (lo, hi) in narrow.iter().zip(wide.iter()) {
            assert!(lo < hi);
        }
    }

    #[test]
    fn test_adaptive_std_is_rejected() {
        let err = GaussianMlpPolicy::new(
            &spec(),
            &GaussianMlpConfig {
                std_parameterization: StdParameterization::Adaptive,
                ..GaussianMlpConfig::default()
            },
            StdRng::seed_from_u64(42),
            &Device::Cpu,
        ).err().unwrap();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotSupported(_)),
        ));
    }

    #[test]
    fn test_std_parameterization_controls_trainability() {
        let learned = policy(&GaussianMlpConfig::default());
        let fixed = policy(&GaussianMlpConfig {
            std_parameterization: StdParameterization::Fixed,
            ..GaussianMlpConfig::default()
        });

        let has_log_std = |p: &GaussianMlpPolicy| {
            p.varmap().data().lock().unwrap().contains_key("log-std")
        };
        assert!(has_log_std(&learned));
        assert!(!has_log_std(&fixed));
    }
}
