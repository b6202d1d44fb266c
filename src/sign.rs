//! The rotational sign table.
//!
//! `SIGN_TENSOR[plane][direction][id]` is the signed displacement along
//! `direction` of a node labelled `id` when the plane `plane` turns by one
//! unit. It is non-zero only when `plane`, `direction` and `id % 3` are three
//! distinct axes, and flipping the label (`id` to `id + 3`) flips the sign.

use crate::lattice::Axis;
use glam::DVec3;

/// Rotational signs indexed as `SIGN_TENSOR[plane][direction][node_id]`.
pub const SIGN_TENSOR: [[[i8; 6]; 3]; 3] = [
    [[0, 0, 0, 0, 0, 0], [0, 0, 1, 0, 0, -1], [0, -1, 0, 0, 1, 0]],
    [[0, 0, -1, 0, 0, 1], [0, 0, 0, 0, 0, 0], [1, 0, 0, -1, 0, 0]],
    [[0, 1, 0, 0, -1, 0], [-1, 0, 0, 1, 0, 0], [0, 0, 0, 0, 0, 0]],
];

/// Looks up one entry of [`SIGN_TENSOR`].
///
/// # Panics
///
/// If `node_id > 5`. Valid [`Node`](crate::Node)s never carry such an id.
pub fn sign(plane: Axis, direction: Axis, node_id: u8) -> i8 {
    SIGN_TENSOR[plane.index()][direction.index()][usize::from(node_id)]
}

/// The column `SIGN_TENSOR[plane][..][node_id]` as a vector over directions.
pub fn plane_column(plane: Axis, node_id: u8) -> DVec3 {
    DVec3::new(
        f64::from(sign(plane, Axis::X, node_id)),
        f64::from(sign(plane, Axis::Y, node_id)),
        f64::from(sign(plane, Axis::Z, node_id)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_only_for_three_distinct_axes() {
        for plane in Axis::ALL {
            for direction in Axis::ALL {
                for id in 0..6u8 {
                    let family = Axis::from_index(usize::from(id % 3)).unwrap();
                    let distinct = plane.third(direction) == Some(family);
                    assert_eq!(
                        sign(plane, direction, id) != 0,
                        distinct,
                        "A[{plane}][{direction}][{id}]"
                    );
                }
            }
        }
    }

    #[test]
    fn paired_labels_have_opposite_signs() {
        for plane in Axis::ALL {
            for direction in Axis::ALL {
                for id in 0..3u8 {
                    assert_eq!(sign(plane, direction, id), -sign(plane, direction, id + 3));
                }
            }
        }
    }

    #[test]
    fn antisymmetric_in_plane_and_direction() {
        for plane in Axis::ALL {
            for direction in Axis::ALL {
                for id in 0..6u8 {
                    assert_eq!(sign(plane, direction, id), -sign(direction, plane, id));
                }
            }
        }
    }

    #[test]
    fn table_is_indexed_plane_direction_id() {
        assert_eq!(SIGN_TENSOR[2][0][1], sign(Axis::Z, Axis::X, 1));
        assert_eq!(SIGN_TENSOR[2][0][1], 1);
        assert_eq!(SIGN_TENSOR[0][2][1], -1);
    }

    #[test]
    fn column_reads_across_directions() {
        assert_eq!(plane_column(Axis::Z, 1), DVec3::new(1.0, 0.0, 0.0));
        assert_eq!(plane_column(Axis::X, 5), DVec3::new(0.0, -1.0, 0.0));
        assert_eq!(plane_column(Axis::Y, 1), DVec3::ZERO);
    }

    #[test]
    #[should_panic]
    fn out_of_range_id_panics() {
        sign(Axis::X, Axis::Y, 6);
    }
}
