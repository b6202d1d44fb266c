//! Gaits (actuation commands over time) and the effector trajectories they
//! produce.

use crate::error::{KinematicsError, Result};
use crate::lattice::Axis;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A sequence of actuation-amount vectors, one per timestep.
///
/// Conceptually a `(num_servos, num_timesteps)` matrix. Frames are stored
/// timestep-major so each column can be handed to
/// [`Assembly::actuate`](crate::Assembly::actuate) without copying.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGait")]
pub struct Gait {
    servos: usize,
    frames: Vec<Vec<f64>>,
}

impl Gait {
    /// Builds a gait from one row of amounts per servo.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let timesteps = rows.first().map_or(0, Vec::len);
        check_rectangular(&rows, timesteps)?;

        let frames = (0..timesteps)
            .map(|t| rows.iter().map(|row| row[t]).collect())
            .collect();

        Ok(Self {
            servos: rows.len(),
            frames,
        })
    }

    /// Builds a gait from one command vector per timestep.
    pub fn from_frames(frames: Vec<Vec<f64>>) -> Result<Self> {
        let servos = frames.first().map_or(0, Vec::len);
        check_rectangular(&frames, servos)?;
        Ok(Self { servos, frames })
    }

    /// Plays the gait `cycles` times back to back.
    pub fn repeat(&self, cycles: usize) -> Self {
        Self {
            servos: self.servos,
            frames: self
                .frames
                .iter()
                .cycle()
                .take(self.frames.len() * cycles)
                .cloned()
                .collect(),
        }
    }

    pub fn num_servos(&self) -> usize {
        self.servos
    }

    pub fn num_timesteps(&self) -> usize {
        self.frames.len()
    }

    /// The command vector for timestep `t`.
    pub fn frame(&self, t: usize) -> Option<&[f64]> {
        self.frames.get(t).map(Vec::as_slice)
    }

    pub fn frames(&self) -> impl Iterator<Item = &[f64]> {
        self.frames.iter().map(Vec::as_slice)
    }
}

fn check_rectangular(rows: &[Vec<f64>], expected: usize) -> Result<()> {
    match rows.iter().position(|row| row.len() != expected) {
        Some(row) => Err(KinematicsError::RaggedGait {
            row,
            expected,
            actual: rows[row].len(),
        }),
        None => Ok(()),
    }
}

#[derive(Deserialize)]
struct RawGait {
    #[serde(default)]
    servos: Option<usize>,
    frames: Vec<Vec<f64>>,
}

impl TryFrom<RawGait> for Gait {
    type Error = KinematicsError;

    fn try_from(raw: RawGait) -> Result<Self> {
        if raw.frames.is_empty() {
            return Ok(Gait {
                servos: raw.servos.unwrap_or(0),
                frames: raw.frames,
            });
        }

        let gait = Gait::from_frames(raw.frames)?;
        match raw.servos {
            Some(servos) if servos != gait.servos => Err(KinematicsError::RaggedGait {
                row: 0,
                expected: servos,
                actual: gait.servos,
            }),
            _ => Ok(gait),
        }
    }
}

/// Effector displacements over time.
///
/// Conceptually a `(num_effectors, 3, num_timesteps)` tensor, stored as one
/// frame of effector displacements per timestep.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Trajectory {
    effectors: usize,
    frames: Vec<Vec<DVec3>>,
}

impl Trajectory {
    pub(crate) fn new(effectors: usize, frames: Vec<Vec<DVec3>>) -> Self {
        debug_assert!(frames.iter().all(|f| f.len() == effectors));
        Self { effectors, frames }
    }

    pub fn num_effectors(&self) -> usize {
        self.effectors
    }

    pub fn num_timesteps(&self) -> usize {
        self.frames.len()
    }

    /// Displacement of every effector at timestep `t`.
    pub fn at(&self, t: usize) -> Option<&[DVec3]> {
        self.frames.get(t).map(Vec::as_slice)
    }

    /// Element `[effector, axis, t]` of the trajectory tensor.
    pub fn displacement(&self, effector: usize, axis: Axis, t: usize) -> Option<f64> {
        self.frames
            .get(t)?
            .get(effector)
            .map(|d| d[axis.index()])
    }

    /// One effector's displacement at each timestep.
    pub fn path(&self, effector: usize) -> Option<Vec<DVec3>> {
        (effector < self.effectors)
            .then(|| self.frames.iter().map(|frame| frame[effector]).collect())
    }

    /// Running sum of one effector's displacements, i.e. its offset from the
    /// start after each timestep.
    pub fn cumulative(&self, effector: usize) -> Option<Vec<DVec3>> {
        let path = self.path(effector)?;
        Some(
            path.into_iter()
                .scan(DVec3::ZERO, |acc, step| {
                    *acc += step;
                    Some(*acc)
                })
                .collect(),
        )
    }
}
