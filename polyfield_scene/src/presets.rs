// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in polygon seeds.
//!
//! These are the shapes a fresh scene starts with: a convex triangle and
//! square, a concave L-shape, and a pentagon, spread out so none overlap.
//! Coordinates are in surface-local logical units. The list is consumed once
//! at startup; nothing refers back to it afterwards.

use alloc::vec::Vec;
use kurbo::Point;

use crate::Polygon;

/// A named polygon seed.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    /// Display name of the shape.
    pub name: &'static str,
    /// Vertex loop as (x, y) pairs.
    pub vertices: &'static [(f64, f64)],
}

impl Preset {
    /// Materialize this seed as a scene polygon.
    pub fn to_polygon(&self) -> Polygon {
        let vertices: Vec<Point> = self
            .vertices
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();
        Polygon::new(vertices)
    }
}

/// The default seed list, in scene order.
pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Triangle",
        vertices: &[(150.0, 100.0), (250.0, 300.0), (50.0, 300.0)],
    },
    Preset {
        name: "Square",
        vertices: &[
            (450.0, 100.0),
            (650.0, 100.0),
            (650.0, 300.0),
            (450.0, 300.0),
        ],
    },
    Preset {
        name: "L-Shape",
        vertices: &[
            (50.0, 400.0),
            (150.0, 400.0),
            (150.0, 550.0),
            (300.0, 550.0),
            (300.0, 650.0),
            (50.0, 650.0),
        ],
    },
    Preset {
        name: "Pentagon",
        vertices: &[
            (550.0, 450.0),
            (650.0, 530.0),
            (610.0, 650.0),
            (490.0, 650.0),
            (450.0, 530.0),
        ],
    },
];
