//! Pieces module - the shape catalog
//!
//! Every shape has four rotation states of four `(dx, dy)` offsets relative to the
//! piece anchor. Offsets may be negative; `dy` grows downwards.
//!
//! The order of the rotation states matters: rotating always advances to the next
//! state, so reordering an entry changes how that shape turns.

use crate::types::{Rotation, Shape};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the anchor
pub type PieceShape = [CellOffset; 4];

/// Rotation states of every catalog entry, indexed by shape id
pub const CATALOG: [[PieceShape; 4]; 8] = [
    // Placeholder: never spawned
    [
        [(0, 0), (0, 0), (0, 0), (0, 0)],
        [(0, 0), (0, 0), (0, 0), (0, 0)],
        [(0, 0), (0, 0), (0, 0), (0, 0)],
        [(0, 0), (0, 0), (0, 0), (0, 0)],
    ],
    // Cube
    [
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
    ],
    // I
    [
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
        [(0, -1), (0, 0), (0, 1), (0, 2)],
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
        [(0, -1), (0, 0), (0, 1), (0, 2)],
    ],
    // T
    [
        [(0, 0), (1, 0), (0, 1), (0, -1)],
        [(0, 0), (-1, 0), (1, 0), (0, 1)],
        [(0, 0), (-1, 0), (0, 1), (0, -1)],
        [(0, 0), (-1, 0), (1, 0), (0, -1)],
    ],
    // InverseL
    [
        [(0, 0), (0, 1), (0, -1), (1, -1)],
        [(0, 0), (1, 0), (-1, 0), (1, 1)],
        [(0, 0), (0, 1), (0, -1), (-1, 1)],
        [(0, 0), (-1, 0), (1, 0), (-1, -1)],
    ],
    // L
    [
        [(0, 0), (0, 1), (0, -1), (1, 1)],
        [(0, 0), (1, 0), (-1, 0), (-1, 1)],
        [(0, 0), (0, 1), (0, -1), (-1, -1)],
        [(0, 0), (1, 0), (-1, 0), (1, -1)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (0, 1), (1, -1)],
        [(0, 0), (1, 0), (0, -1), (-1, -1)],
        [(0, 0), (1, 0), (0, 1), (1, -1)],
        [(0, 0), (1, 0), (0, -1), (-1, -1)],
    ],
    // InverseZ
    [
        [(0, 0), (0, -1), (1, 0), (1, 1)],
        [(0, 0), (-1, 0), (0, -1), (1, -1)],
        [(0, 0), (0, -1), (1, 0), (1, 1)],
        [(0, 0), (-1, 0), (0, -1), (1, -1)],
    ],
];

/// Get the cell offsets for a shape and rotation
pub fn get_shape(shape: Shape, rotation: Rotation) -> PieceShape {
    CATALOG[shape.id() as usize][rotation.index()]
}

/// Bounding box `(width, height)` of a shape in a rotation state
pub fn bounding_size(shape: Shape, rotation: Rotation) -> (i8, i8) {
    let offsets = get_shape(shape, rotation);
    let (mut min_x, mut max_x) = (i8::MAX, i8::MIN);
    let (mut min_y, mut max_y) = (i8::MAX, i8::MIN);
    for (dx, dy) in offsets {
        min_x = min_x.min(dx);
        max_x = max_x.max(dx);
        min_y = min_y.min(dy);
        max_y = max_y.max(dy);
    }
    (max_x - min_x + 1, max_y - min_y + 1)
}
