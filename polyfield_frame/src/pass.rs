// Copyright 2025 the Polyfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame render pass.
//!
//! [`render_frame`] walks the scene's polygons once, asks the geometry
//! kernel for each polygon's containment and closest point, and emits draw
//! ops in a fixed paint order:
//!
//! 1. clear the surface;
//! 2. per polygon with at least one vertex: the dashed connector from the
//!    probe to the closest point (only when the probe is outside a proper
//!    polygon), then the polygon fill and outline (inside/outside palette
//!    branch), then the closest-point marker (proper polygons only);
//! 3. the probe marker, always, whatever the containment results were.
//!
//! The pass is pure with respect to the scene: it reads a snapshot and
//! mutates only the surface. Colors come from a [`Palette`]; the geometric
//! styling constants (marker radii, dash pattern) are fixed here because
//! they are part of what the visualization *is*, not its theming.

use peniko::Color;
use polyfield_geom::{closest_point_in_polygon, contains_point};
use polyfield_scene::Scene;

use crate::{FrameSurface, StrokeStyle};

/// Outline width for polygon strokes and the connector line.
const OUTLINE_WIDTH: f64 = 1.0;
/// On/off lengths of the connector dash pattern.
const CONNECTOR_DASH: [f64; 2] = [3.0, 3.0];
/// Radius of the closest-point marker.
const CLOSEST_MARKER_RADIUS: f64 = 2.5;
/// Radius of the probe marker dot.
const PROBE_RADIUS: f64 = 4.0;
/// Radius of the translucent halo under the probe dot.
const PROBE_HALO_RADIUS: f64 = 9.0;

/// Colors for one frame. The defaults match the dark theme the
/// visualization shipped with; hosts can override any entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Surface background.
    pub background: Color,
    /// Polygon fill while the probe is outside.
    pub fill_outside: Color,
    /// Polygon fill while the probe is inside.
    pub fill_inside: Color,
    /// Polygon outline while the probe is outside.
    pub stroke_outside: Color,
    /// Polygon outline while the probe is inside.
    pub stroke_inside: Color,
    /// Dashed probe-to-closest connector.
    pub connector: Color,
    /// Closest-point marker.
    pub closest_marker: Color,
    /// Probe marker dot.
    pub probe: Color,
    /// Translucent halo under the probe dot.
    pub probe_halo: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            fill_outside: Color::from_rgb8(20, 20, 20),
            fill_inside: Color::from_rgb8(40, 40, 40),
            stroke_outside: Color::from_rgb8(0x33, 0x33, 0x33),
            stroke_inside: Color::from_rgb8(0x66, 0x66, 0x66),
            connector: Color::WHITE.with_alpha(0.15),
            closest_marker: Color::WHITE,
            probe: Color::WHITE,
            probe_halo: Color::WHITE.with_alpha(0.2),
        }
    }
}

fn connector_style() -> StrokeStyle {
    StrokeStyle::new(OUTLINE_WIDTH).with_dashes(0.0, CONNECTOR_DASH)
}

/// Render one frame of `scene` onto `surface`.
///
/// Runs in O(total vertex count): each polygon is queried once for
/// containment and once for its closest point, against the scene state as
/// it is *right now*; there is no caching, so a vertex dragged on the
/// previous event is already reflected in this frame.
pub fn render_frame<S: FrameSurface + ?Sized>(scene: &Scene, surface: &mut S, palette: &Palette) {
    surface.clear(palette.background);

    let probe = scene.probe();
    for poly in scene.polygons() {
        let points = poly.vertices();
        if points.is_empty() {
            continue;
        }
        let closest = closest_point_in_polygon(points, probe);
        let inside = contains_point(points, probe);
        // Degenerate loops (< 3 vertices) never classify as inside and get
        // neither connector nor closest marker, but still paint.
        let proper = points.len() >= 3;

        if !inside && proper {
            surface.stroke_path(
                &[probe, closest],
                false,
                connector_style(),
                palette.connector,
            );
        }

        let (fill, stroke) = if inside {
            (palette.fill_inside, palette.stroke_inside)
        } else {
            (palette.fill_outside, palette.stroke_outside)
        };
        surface.fill_path(points, fill);
        surface.stroke_path(points, true, StrokeStyle::new(OUTLINE_WIDTH), stroke);

        if proper {
            surface.fill_circle(closest, CLOSEST_MARKER_RADIUS, palette.closest_marker);
        }
    }

    surface.fill_circle(probe, PROBE_HALO_RADIUS, palette.probe_halo);
    surface.fill_circle(probe, PROBE_RADIUS, palette.probe);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrawOp;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Point;
    use polyfield_scene::Polygon;

    /// Trivial surface that records ops for assertions.
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<DrawOp>,
    }

    impl FrameSurface for RecordingSurface {
        fn draw(&mut self, op: DrawOp) {
            self.ops.push(op);
        }
    }

    fn square_scene(probe: Point) -> Scene {
        let mut scene = Scene::with_polygons(vec![Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ])]);
        scene.set_probe(probe);
        scene
    }

    fn render(scene: &Scene) -> Vec<DrawOp> {
        let mut surface = RecordingSurface::default();
        render_frame(scene, &mut surface, &Palette::default());
        surface.ops
    }

    #[test]
    fn frame_starts_with_clear_and_ends_with_probe_marker() {
        let ops = render(&square_scene(Point::new(5.0, 5.0)));
        assert!(matches!(ops.first(), Some(DrawOp::Clear { .. })));
        let palette = Palette::default();
        match ops.last() {
            Some(DrawOp::FillCircle { center, color, .. }) => {
                assert_eq!(*center, Point::new(5.0, 5.0));
                assert_eq!(*color, palette.probe);
            }
            other => panic!("expected probe marker last, got {other:?}"),
        }
    }

    #[test]
    fn inside_probe_skips_connector_and_uses_inside_palette() {
        let ops = render(&square_scene(Point::new(5.0, 5.0)));
        let palette = Palette::default();

        // clear, fill, outline, closest marker, halo, probe dot.
        assert_eq!(ops.len(), 6);
        match &ops[1] {
            DrawOp::FillPath { color, .. } => assert_eq!(*color, palette.fill_inside),
            other => panic!("expected polygon fill, got {other:?}"),
        }
        // The closest marker sits on the probe itself while inside.
        match &ops[3] {
            DrawOp::FillCircle { center, .. } => assert_eq!(*center, Point::new(5.0, 5.0)),
            other => panic!("expected closest marker, got {other:?}"),
        }
    }

    #[test]
    fn outside_probe_draws_dashed_connector_before_the_polygon() {
        let ops = render(&square_scene(Point::new(15.0, 5.0)));
        match &ops[1] {
            DrawOp::StrokePath {
                points,
                closed,
                style,
                ..
            } => {
                assert!(!closed);
                assert_eq!(points.len(), 2, "connector is probe -> closest");
                assert_eq!(points[0], Point::new(15.0, 5.0));
                assert_eq!(points[1], Point::new(10.0, 5.0));
                assert_eq!(style.dash_pattern.as_slice(), CONNECTOR_DASH);
            }
            other => panic!("expected connector, got {other:?}"),
        }
        let palette = Palette::default();
        match &ops[2] {
            DrawOp::FillPath { color, .. } => assert_eq!(*color, palette.fill_outside),
            other => panic!("expected polygon fill, got {other:?}"),
        }
    }

    #[test]
    fn empty_polygon_paints_nothing_but_probe_still_shows() {
        let mut scene = Scene::with_polygons(vec![Polygon::new(vec![])]);
        scene.set_probe(Point::new(3.0, 3.0));
        let ops = render(&scene);
        // clear, halo, probe dot only.
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn degenerate_loops_paint_without_connector_or_marker() {
        for vertices in [
            vec![Point::new(4.0, 4.0)],
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        ] {
            let mut scene = Scene::with_polygons(vec![Polygon::new(vertices)]);
            scene.set_probe(Point::new(30.0, 30.0));
            let ops = render(&scene);
            // clear, fill, outline, halo, probe dot; no connector, no
            // closest marker.
            assert_eq!(ops.len(), 5);
            assert!(matches!(ops[1], DrawOp::FillPath { .. }));
            assert!(matches!(
                ops[2],
                DrawOp::StrokePath { closed: true, .. }
            ));
        }
    }

    #[test]
    fn every_nonempty_polygon_is_visited_in_scene_order() {
        let mut scene = Scene::with_presets();
        scene.set_probe(Point::new(-50.0, -50.0));
        let ops = render(&scene);
        let fills: Vec<usize> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillPath { points, .. } => Some(points.len()),
                _ => None,
            })
            .collect();
        // Preset order: triangle, square, L-shape, pentagon.
        assert_eq!(fills, vec![3, 4, 6, 5]);
    }
}
