//! The actuator model: plane-of-motion derivation and per-servo contributions.

use crate::error::{KinematicsError, Result};
use crate::lattice::{Axis, Node};
use crate::sign::{plane_column, sign};
use glam::DVec3;
use serde::Serialize;

/// A rotary actuator mounted at a lattice node.
///
/// Rotating about `direction` turns the lattice plane perpendicular to the
/// *plane of motion*, which is the one axis that is neither `direction` nor
/// the mounting node's free axis. Every node lying in that plane is coupled to
/// the servo; all other nodes are unaffected.
#[derive(Clone, Debug, Serialize)]
pub struct Servo {
    node: Node,
    direction: Axis,
    plane_of_motion: Axis,
    other_node: Node,
    sign_correction: i8,
    ideality: f64,
}

impl Servo {
    /// Mounts a servo at `node` actuating about `direction`.
    ///
    /// `ideality` scales the coupling to every node other than the two the
    /// servo drives directly.
    pub fn new(node: Node, direction: Axis, ideality: f64) -> Result<Self> {
        validate_ideality(ideality)?;

        let plane_of_motion = node
            .free_axis()
            .third(direction)
            .ok_or(KinematicsError::DegenerateServo {
                position: node.position(),
                direction,
            })?;

        let other_node = node
            .paired_offset(direction, 2)
            .ok_or(KinematicsError::InvalidPosition {
                position: node.position(),
            })?;

        Ok(Self {
            node,
            direction,
            plane_of_motion,
            other_node,
            sign_correction: sign(plane_of_motion, direction, node.id()),
            ideality,
        })
    }

    /// A servo with perfect transmission.
    pub fn ideal(node: Node, direction: Axis) -> Result<Self> {
        Self::new(node, direction, 1.0)
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn direction(&self) -> Axis {
        self.direction
    }

    pub fn plane_of_motion(&self) -> Axis {
        self.plane_of_motion
    }

    /// The second node the servo drives directly, one voxel along `direction`.
    pub fn other_node(&self) -> &Node {
        &self.other_node
    }

    pub fn sign_correction(&self) -> i8 {
        self.sign_correction
    }

    pub fn ideality(&self) -> f64 {
        self.ideality
    }

    /// Coordinate of the driven plane along the plane-of-motion axis.
    pub fn plane_coordinate(&self) -> i32 {
        self.node.coordinate(self.plane_of_motion)
    }

    /// Whether both servos would drive the same plane.
    pub fn conflicts_with(&self, other: &Servo) -> bool {
        self.plane_of_motion == other.plane_of_motion
            && self.plane_coordinate() == other.plane_coordinate()
    }

    /// Whether `target` lies in the plane this servo drives.
    pub fn couples_to(&self, target: &Node) -> bool {
        target.coordinate(self.plane_of_motion) == self.plane_coordinate()
    }

    /// Whether `target` is one of the two directly driven nodes.
    pub fn drives(&self, target: &Node) -> bool {
        *target == self.node || *target == self.other_node
    }

    /// Signed scalar coupling between one unit of actuation and `target`.
    pub fn connectivity(&self, target: &Node) -> f64 {
        if !self.couples_to(target) {
            return 0.0;
        }

        let transmission = if self.drives(target) {
            1.0
        } else {
            self.ideality
        };

        // Coupled nodes share the plane coordinate and differ by an even
        // number of lattice units in total.
        let distance = (self.node.position().as_i64vec3() - target.position().as_i64vec3())
            .abs()
            .element_sum();
        let parity = if (distance / 2) % 2 == 0 { 1.0 } else { -1.0 };

        transmission * f64::from(self.sign_correction) * parity
    }

    /// Displacement of `target` when this servo is actuated by `amount`.
    pub fn actuate(&self, target: &Node, amount: f64) -> DVec3 {
        plane_column(self.plane_of_motion, target.id()) * (amount * self.connectivity(target))
    }
}

pub(crate) fn validate_ideality(ideality: f64) -> Result<()> {
    if ideality.is_finite() && ideality > 0.0 && ideality <= 1.0 {
        Ok(())
    } else {
        Err(KinematicsError::InvalidIdeality(ideality))
    }
}
