//! Error type shared by every construction and query in the crate.

use crate::lattice::Axis;
use glam::IVec3;
use thiserror::Error;

/// Everything that can go wrong while building or querying a voxel robot.
///
/// All variants are deterministic input errors: the caller fixes the input
/// and tries again. A failed constructor or insertion never leaves a partial
/// value behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// The coordinates do not have exactly one even component.
    #[error("{position} is not a lattice node: exactly one coordinate must be even")]
    InvalidPosition { position: IVec3 },

    /// The supplied id is out of range or belongs to another axis family.
    #[error("node id {id} is invalid at {position}, whose free axis is {free_axis}")]
    InvalidId {
        id: u8,
        position: IVec3,
        free_axis: Axis,
    },

    /// The servo would rotate about the axis that defines its node.
    #[error("servo at {position} cannot actuate about {direction}, its node's own axis")]
    DegenerateServo { position: IVec3, direction: Axis },

    /// Two servos would drive the same plane of motion.
    #[error(
        "servo makes system overdetermined: plane {plane}={coordinate} is already driven by servo {existing}"
    )]
    OverdeterminedSystem {
        existing: usize,
        plane: Axis,
        coordinate: i32,
    },

    /// An amounts vector or gait does not have one entry per servo.
    #[error("expected {expected} actuation amounts, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// Ideality must be finite and in `(0, 1]`.
    #[error("ideality {0} is outside (0, 1]")]
    InvalidIdeality(f64),

    /// Gait rows (or frames) of unequal length.
    #[error("gait row {row} has {actual} entries, expected {expected}")]
    RaggedGait {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, KinematicsError>;
