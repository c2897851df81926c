//! Stochastic nucleon positions for heavy-ion initial conditions.
//!
//! Proton and spherical Woods-Saxon nuclei, a piecewise-linear inverse-CDF
//! sampler, and seeded event batches.

pub mod events;
pub mod nucleon;
pub mod nucleus;
pub mod piecewise;
pub mod proton;
pub mod random;
pub mod woods_saxon;

pub use nucleon::{Nucleon, ParticipantMut, ParticipantsMut};
pub use nucleus::Nucleus;
pub use piecewise::PiecewiseLinear;
pub use proton::Proton;
pub use woods_saxon::WoodsSaxonNucleus;
