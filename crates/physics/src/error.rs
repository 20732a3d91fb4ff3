use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("simulation has no spheres")]
    NoSpheres,
}
