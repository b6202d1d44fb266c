//! # voxel-pom
//!
//! A *planes of motion* model of modular voxel robots.
//!
//! Servos are mounted on the faces of a voxel lattice. Each servo turns one
//! lattice plane, and every node lying in that plane is displaced linearly in
//! the servo's actuation amount. This crate derives those couplings and
//! composes them into the map from servo commands to effector displacements:
//!
//! - [`lattice`]: node addressing and identity from coordinate parity.
//! - [`sign`]: the constant rotational sign table.
//! - [`servo`]: plane-of-motion derivation and single-servo contributions.
//! - [`assembly`]: conflict checking and the superposed actuation map.
//! - [`gait`]: command sequences and the trajectories they produce.
//! - [`presets`]: example robots built on the public API.
//!
//! The model is purely kinematic and first order: no dynamics, collisions or
//! state carried between timesteps.

pub mod assembly;
pub mod error;
pub mod gait;
pub mod lattice;
pub mod presets;
pub mod servo;
pub mod sign;

pub use assembly::*;
pub use error::*;
pub use gait::*;
pub use lattice::*;
pub use servo::*;
pub use sign::*;
