use punto_types::ConfigError;
use thiserror::Error;

/// Failure of a shoe or batch simulation.
///
/// `OutOfCards` means the dealer was asked for a card past the end of the shoe. The shoe
/// loop never lets that happen, so seeing it indicates a bug and the batch is aborted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("shoe out of cards (position={position}, len={len})")]
    OutOfCards { position: usize, len: usize },
}
