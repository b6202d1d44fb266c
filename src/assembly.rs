//! Servo/effector assemblies and their actuation-to-displacement map.
//!
//! An [`Assembly`] is built with [`add_servo`](Assembly::add_servo) and
//! [`add_effector`](Assembly::add_effector), then queried with
//! [`actuate`](Assembly::actuate), [`connectivity_matrix`](Assembly::connectivity_matrix)
//! and [`simulate`](Assembly::simulate). Queries take `&self`, so a finished
//! assembly can be shared across threads.

use crate::error::{KinematicsError, Result};
use crate::gait::{Gait, Trajectory};
use crate::lattice::{Axis, Node};
use crate::servo::{Servo, validate_ideality};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Configuration for a new [`Assembly`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// Transmission efficiency applied to every servo's indirect couplings.
    /// Must be in `(0, 1]`. Default: 1.0 (ideal hardware).
    pub ideality: f64,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self { ideality: 1.0 }
    }
}

/// An append-only collection of servos and effectors.
#[derive(Clone, Debug)]
pub struct Assembly {
    config: AssemblyConfig,
    servos: Vec<Servo>,
    effectors: Vec<Node>,
}

impl Default for Assembly {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembly {
    /// An empty assembly of ideal servos.
    pub fn new() -> Self {
        Self {
            config: AssemblyConfig::default(),
            servos: Vec::new(),
            effectors: Vec::new(),
        }
    }

    pub fn with_ideality(ideality: f64) -> Result<Self> {
        Self::with_config(AssemblyConfig { ideality })
    }

    pub fn with_config(config: AssemblyConfig) -> Result<Self> {
        validate_ideality(config.ideality)?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }

    pub fn ideality(&self) -> f64 {
        self.config.ideality
    }

    pub fn servos(&self) -> &[Servo] {
        &self.servos
    }

    pub fn effectors(&self) -> &[Node] {
        &self.effectors
    }

    /// Mounts a servo at `node` actuating about `direction`.
    ///
    /// Fails without modifying the assembly if the servo is degenerate or
    /// would drive a plane that an existing servo already drives.
    pub fn add_servo(&mut self, node: Node, direction: Axis) -> Result<&Servo> {
        let servo = Servo::new(node, direction, self.config.ideality)?;

        if let Some(existing) = self.servos.iter().position(|s| s.conflicts_with(&servo)) {
            debug!(
                node = %node,
                %direction,
                existing,
                "rejected servo: overdetermined system"
            );
            return Err(KinematicsError::OverdeterminedSystem {
                existing,
                plane: servo.plane_of_motion(),
                coordinate: servo.plane_coordinate(),
            });
        }

        debug!(
            node = %node,
            %direction,
            plane = %servo.plane_of_motion(),
            index = self.servos.len(),
            "added servo"
        );
        self.servos.push(servo);
        Ok(&self.servos[self.servos.len() - 1])
    }

    /// Registers a node whose displacement should be reported.
    pub fn add_effector(&mut self, node: Node) {
        debug!(node = %node, index = self.effectors.len(), "added effector");
        self.effectors.push(node);
    }

    /// Displacement of every effector when servo `i` is actuated by
    /// `amounts[i]`.
    ///
    /// The result is the plain sum of each servo's individual contribution.
    pub fn actuate(&self, amounts: &[f64]) -> Result<Vec<DVec3>> {
        self.check_arity(amounts.len())?;
        Ok(self
            .effectors
            .iter()
            .map(|effector| {
                self.servos
                    .iter()
                    .zip(amounts)
                    .fold(DVec3::ZERO, |acc, (servo, &amount)| {
                        acc + servo.actuate(effector, amount)
                    })
            })
            .collect())
    }

    /// Scalar coupling of every servo (rows) to every effector (columns).
    pub fn connectivity_matrix(&self) -> Vec<Vec<f64>> {
        self.servos
            .iter()
            .map(|servo| {
                self.effectors
                    .iter()
                    .map(|effector| servo.connectivity(effector))
                    .collect()
            })
            .collect()
    }

    /// Actuates every timestep of `gait` independently.
    pub fn simulate(&self, gait: &Gait) -> Result<Trajectory> {
        self.check_arity(gait.num_servos())?;
        trace!(
            timesteps = gait.num_timesteps(),
            effectors = self.effectors.len(),
            "simulating gait"
        );

        let frames = gait
            .frames()
            .map(|amounts| self.actuate(amounts))
            .collect::<Result<Vec<_>>>()?;

        Ok(Trajectory::new(self.effectors.len(), frames))
    }

    fn check_arity(&self, actual: usize) -> Result<()> {
        if actual == self.servos.len() {
            Ok(())
        } else {
            Err(KinematicsError::ArityMismatch {
                expected: self.servos.len(),
                actual,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, y: i32, z: i32) -> Node {
        Node::new(x, y, z).unwrap()
    }

    #[test]
    fn rejects_overdetermined_servo_and_keeps_state() {
        let mut assembly = Assembly::new();
        assembly.add_servo(node(1, 0, 1), Axis::Z).unwrap();
        assembly.add_servo(node(1, 3, 0), Axis::X).unwrap();

        let err = assembly.add_servo(node(1, 2, 3), Axis::Z).unwrap_err();
        assert_eq!(
            err,
            KinematicsError::OverdeterminedSystem {
                existing: 0,
                plane: Axis::X,
                coordinate: 1,
            }
        );
        assert_eq!(assembly.servos().len(), 2);
    }

    #[test]
    fn degenerate_servo_is_not_added() {
        let mut assembly = Assembly::new();
        assert!(matches!(
            assembly.add_servo(node(1, 0, 1), Axis::Y),
            Err(KinematicsError::DegenerateServo { .. })
        ));
        assert!(assembly.servos().is_empty());
    }

    #[test]
    fn servos_inherit_assembly_ideality() {
        let mut assembly = Assembly::with_ideality(0.6).unwrap();
        let servo = assembly.add_servo(node(1, 0, 1), Axis::Z).unwrap();
        assert_eq!(servo.ideality(), 0.6);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert_eq!(
            Assembly::with_ideality(0.0).unwrap_err(),
            KinematicsError::InvalidIdeality(0.0)
        );
    }

    #[test]
    fn config_defaults_when_fields_are_missing() {
        let config: AssemblyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AssemblyConfig::default());
    }

    #[test]
    fn arity_is_checked() {
        let mut assembly = Assembly::new();
        assembly.add_servo(node(1, 0, 1), Axis::Z).unwrap();
        assembly.add_effector(node(1, 1, 0));
        assert_eq!(
            assembly.actuate(&[1.0, 2.0]).unwrap_err(),
            KinematicsError::ArityMismatch {
                expected: 1,
                actual: 2
            }
        );
        assert_eq!(assembly.actuate(&[2.0]).unwrap().len(), 1);
    }

    #[test]
    fn empty_assembly_actuates_to_nothing() {
        let assembly = Assembly::new();
        assert!(assembly.actuate(&[]).unwrap().is_empty());
        assert!(assembly.connectivity_matrix().is_empty());
    }

    #[test]
    fn effectors_without_servos_stay_put() {
        let mut assembly = Assembly::new();
        assembly.add_effector(node(1, 1, 0));
        assert_eq!(assembly.actuate(&[]).unwrap(), vec![DVec3::ZERO]);
    }

    #[test]
    fn simulate_checks_gait_width() {
        let mut assembly = Assembly::new();
        assembly.add_servo(node(1, 0, 1), Axis::Z).unwrap();
        let gait = Gait::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        assert!(matches!(
            assembly.simulate(&gait),
            Err(KinematicsError::ArityMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }
}
