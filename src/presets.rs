//! Ready-made robots built through the public [`Assembly`] API.

use crate::assembly::{Assembly, AssemblyConfig};
use crate::error::Result;
use crate::lattice::{Axis, Node};

/// Transmission efficiency of the VoxelBot's servos.
pub const VOXEL_BOT_IDEALITY: f64 = 0.8;

/// The four-servo, four-effector VoxelBot.
///
/// Two servos turn the `X = 1` and `X = 3` planes about Z, two turn the
/// `Y = 3` and `Y = 1` planes about X. The effectors are the four floor faces
/// `(1,1,0)`, `(3,1,0)`, `(1,3,2)` and `(3,3,2)`.
pub fn voxel_bot() -> Result<Assembly> {
    let mut bot = Assembly::with_config(AssemblyConfig {
        ideality: VOXEL_BOT_IDEALITY,
    })?;

    bot.add_servo(Node::new(1, 0, 1)?, Axis::Z)?;
    bot.add_servo(Node::new(1, 3, 0)?, Axis::X)?;
    bot.add_servo(Node::new(3, 0, 1)?, Axis::Z)?;
    bot.add_servo(Node::new(-1, 1, 0)?, Axis::X)?;

    for (x, y, z) in [(1, 1, 0), (3, 1, 0), (1, 3, 2), (3, 3, 2)] {
        bot.add_effector(Node::new(x, y, z)?);
    }

    Ok(bot)
}
