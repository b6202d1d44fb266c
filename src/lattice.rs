//! Lattice addressing: axes, node positions and node identities.
//!
//! Coordinates are integer *lattice units*; one voxel edge spans two units, so
//! every voxel face center lands on an integer point. A face center has exactly
//! one even coordinate (the face normal, called the node's *free axis*); every
//! other integer point is rejected.
//!
//! The six node ids name the faces of a voxel: `id % 3` is the free axis and
//! `id / 3` tells whether the node is labelled as the lower (`0..=2`) or the
//! upper (`3..=5`) face. A face shared by two voxels can therefore carry
//! either of two congruent ids.

use crate::error::{KinematicsError, Result};
use glam::{BVec3, DVec3, IVec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One of the three lattice axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Axis> {
        match index {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }

    /// Unit lattice step along this axis.
    pub const fn unit(self) -> IVec3 {
        match self {
            Axis::X => IVec3::X,
            Axis::Y => IVec3::Y,
            Axis::Z => IVec3::Z,
        }
    }

    /// The axis that is neither `self` nor `other`, if the two differ.
    pub fn third(self, other: Axis) -> Option<Axis> {
        if self == other {
            return None;
        }
        Axis::ALL.into_iter().find(|&a| a != self && a != other)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        })
    }
}

/// Infers the free axis of a lattice point from coordinate parity.
///
/// Succeeds only when exactly one coordinate is even.
pub fn free_axis_of(position: IVec3) -> Result<Axis> {
    let mut even = Axis::ALL
        .into_iter()
        .filter(|a| position[a.index()].rem_euclid(2) == 0);

    match (even.next(), even.next()) {
        (Some(axis), None) => Ok(axis),
        _ => Err(KinematicsError::InvalidPosition { position }),
    }
}

/// The axis family of a node id.
fn family(id: u8) -> Axis {
    match id % 3 {
        0 => Axis::X,
        1 => Axis::Y,
        _ => Axis::Z,
    }
}

/// An addressable point on the voxel lattice.
///
/// Equality and hashing consider the position only; the id is a label.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct Node {
    position: IVec3,
    id: u8,
}

impl Node {
    /// Creates a node at `(x, y, z)` with the lower-face id of its axis family.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self> {
        Self::at(IVec3::new(x, y, z), None)
    }

    /// Creates a node at `(x, y, z)` with an explicit id.
    pub fn with_id(x: i32, y: i32, z: i32, id: u8) -> Result<Self> {
        Self::at(IVec3::new(x, y, z), Some(id))
    }

    /// Creates a node at `position`, inferring the id when `id` is `None`.
    pub fn at(position: IVec3, id: Option<u8>) -> Result<Self> {
        let free_axis = free_axis_of(position)?;
        let id = match id {
            None => free_axis.index() as u8,
            Some(id) if id < 6 && usize::from(id % 3) == free_axis.index() => id,
            Some(id) => {
                return Err(KinematicsError::InvalidId {
                    id,
                    position,
                    free_axis,
                });
            }
        };
        Ok(Self { position, id })
    }

    /// Creates the node for face `id` of the voxel at index `voxel`.
    ///
    /// Fails with `InvalidPosition` if the face lies outside the `i32` range.
    pub fn from_voxel(voxel: IVec3, id: u8) -> Result<Self> {
        if id >= 6 {
            return Err(KinematicsError::InvalidId {
                id,
                position: voxel,
                free_axis: family(id),
            });
        }
        let free = usize::from(id % 3);
        let mut position = [0; 3];
        for (axis, slot) in position.iter_mut().enumerate() {
            let offset = if axis == free { 2 * i32::from(id / 3) } else { 1 };
            *slot = voxel[axis]
                .checked_mul(2)
                .and_then(|c| c.checked_add(offset))
                .ok_or(KinematicsError::InvalidPosition { position: voxel })?;
        }
        Ok(Self {
            position: IVec3::from_array(position),
            id,
        })
    }

    pub fn position(&self) -> IVec3 {
        self.position
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn free_axis(&self) -> Axis {
        family(self.id)
    }

    pub fn coordinate(&self, axis: Axis) -> i32 {
        self.position[axis.index()]
    }

    /// Absolute position in voxel units.
    pub fn world_position(&self) -> DVec3 {
        self.position.as_dvec3() * 0.5
    }

    /// Index of the voxel this node is a face of, according to its id.
    pub fn voxel(&self) -> IVec3 {
        let free = self.free_axis();
        IVec3::from_array(Axis::ALL.map(|axis| {
            let c = self.coordinate(axis);
            if axis == free {
                c.div_euclid(2) - i32::from(self.id / 3)
            } else {
                // Odd, so `c - 1` cannot underflow.
                (c - 1).div_euclid(2)
            }
        }))
    }

    /// The same point labelled from the neighbouring voxel.
    pub fn partner(&self) -> Node {
        Node {
            position: self.position,
            id: (self.id + 3) % 6,
        }
    }

    /// Per-axis coordinate equality with `other`.
    pub fn planes_match(&self, other: &Node) -> BVec3 {
        self.position.cmpeq(other.position)
    }

    /// Moves the node by `steps` lattice units along `axis`, relabelling it
    /// with the paired id.
    ///
    /// An even step keeps the parity pattern, so the result is a valid node
    /// of the same family. `None` if the step leaves the `i32` range.
    pub(crate) fn paired_offset(&self, axis: Axis, steps: i32) -> Option<Node> {
        debug_assert!(steps % 2 == 0);
        let mut position = self.position;
        position[axis.index()] = self.coordinate(axis).checked_add(steps)?;
        Some(Node {
            position,
            id: (self.id + 3) % 6,
        })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})#{}",
            self.position.x, self.position.y, self.position.z, self.id
        )
    }
}

#[derive(Deserialize)]
struct RawNode {
    position: IVec3,
    #[serde(default)]
    id: Option<u8>,
}

impl TryFrom<RawNode> for Node {
    type Error = KinematicsError;

    fn try_from(raw: RawNode) -> Result<Self> {
        Node::at(raw.position, raw.id)
    }
}
