//! # Configs
//!
//! Configuration structs for the components in this crate, plus helpers to
//! persist them as pretty-printed RON files so that a run's configuration can
//! be stored next to its results.

mod gaussian_mlp;
mod ou_noise;

pub use gaussian_mlp::{
    GaussianMlpConfig,
    Nonlinearity,
    StdParameterization,
};
pub use ou_noise::OuNoiseConfig;

use {
    anyhow::Result,
    serde::{
        de::DeserializeOwned,
        Serialize,
    },
    std::{
        fs::File,
        io::Write,
        path::Path,
    },
};


pub fn save_config<C: Serialize>(
    config: &C,
    path: &Path,
) -> Result<()> {
    File::create(path)?.write_all(
        ron::ser::to_string_pretty(
            config,
            ron::ser::PrettyConfig::default(),
        )?.as_bytes()
    )?;

    Ok(())
}

pub fn load_config<C: DeserializeOwned>(
    path: &Path,
) -> Result<C> {
    Ok(ron::de::from_reader(File::open(path)?)?)
}
