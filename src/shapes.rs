//! Reference solids for tests and demos.

use crate::float_types::Real;
use crate::point::Point3D;
use crate::solid::{Face, Solid};

impl Solid {
    /// Axis-aligned rectangular box centered at the origin.
    ///
    /// Vertex layout (8 corners, shared by 6 outward-wound quads):
    /// ```text
    ///     4-------5
    ///    /|      /|
    ///   0-------1 |
    ///   | |     | |
    ///   | 7-----|-6
    ///   |/      |/
    ///   3-------2
    /// ```
    pub fn cuboid(width: Real, length: Real, height: Real) -> Solid {
        let hw = width / 2.0;
        let hl = length / 2.0;
        let hh = height / 2.0;

        let corner = |x: Real, y: Real, z: Real| {
            // Half-extents of finite inputs are finite
            Point3D::new(x, y, z).expect("cuboid corner must be finite")
        };
        let corners = [
            corner(-hw, -hl, -hh), // 0
            corner(hw, -hl, -hh),  // 1
            corner(hw, hl, -hh),   // 2
            corner(-hw, hl, -hh),  // 3
            corner(-hw, -hl, hh),  // 4
            corner(hw, -hl, hh),   // 5
            corner(hw, hl, hh),    // 6
            corner(-hw, hl, hh),   // 7
        ];

        // CCW from outside
        let face_indices = [
            [0, 3, 2, 1], // bottom, -Z
            [4, 5, 6, 7], // top, +Z
            [0, 1, 5, 4], // front, -Y
            [3, 7, 6, 2], // back, +Y
            [0, 4, 7, 3], // left, -X
            [1, 2, 6, 5], // right, +X
        ];

        let faces = face_indices
            .iter()
            .map(|quad| {
                Face::new(quad.iter().map(|&i| corners[i]).collect())
                    .expect("cuboid faces have 4 vertices")
            })
            .collect();

        Solid::new(faces)
    }

    /// Cube of edge `width` centered at the origin.
    pub fn cube(width: Real) -> Solid {
        Self::cuboid(width, width, width)
    }
}
