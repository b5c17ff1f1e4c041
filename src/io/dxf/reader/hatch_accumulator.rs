//! Hatch boundary decoding
//!
//! A hatch carries its boundary loops between the header fields and the
//! pattern data:
//!
//! ```text
//! 91 loop count
//!   92 boundary flags        (bit 2 = polyline loop)
//!     polyline loop: 72 has bulge, 73 closed, 93 vertex count, 10/20/42 ...
//!     edge loop:     93 edge count, then per edge 72 type and its fields
//!   97 source object count, 330 source handles
//! 75 style, 76 pattern type, 52 angle, 41 scale, 78 pattern lines ...
//! 98 seed count, 10/20 seeds
//! ```
//!
//! Edge fields reuse codes across edge types (73 is "counter-clockwise"
//! for arcs and "rational" for splines), so they can only be interpreted
//! with the current edge at hand.

use super::accumulator::{CountedList, Imbalance};
use crate::entities::{BoundaryPathFlags, BoundaryVertex, ControlPoint, HatchBoundary, HatchEdge, SplineEdge};
use crate::types::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Header fields before the loop count
    Header,
    /// Inside the boundary loops
    Loops,
    /// Pattern definition and seed points
    Trailer,
}

/// Edge being filled
#[derive(Debug, Clone)]
struct EdgeBuilder {
    edge: HatchEdge,
    knots: CountedList<f64>,
    control_points: CountedList<ControlPoint>,
    fit_points: CountedList<Vector3>,
}

impl EdgeBuilder {
    fn new(type_code: i64) -> Option<Self> {
        let edge = match type_code {
            1 => HatchEdge::Line {
                start: Vector3::ZERO,
                end: Vector3::ZERO,
            },
            2 => HatchEdge::CircularArc {
                center: Vector3::ZERO,
                radius: 0.0,
                start_angle: 0.0,
                end_angle: 0.0,
                counter_clockwise: true,
            },
            3 => HatchEdge::EllipticArc {
                center: Vector3::ZERO,
                major_axis: Vector3::ZERO,
                ratio: 1.0,
                start_angle: 0.0,
                end_angle: 0.0,
                counter_clockwise: true,
            },
            4 => HatchEdge::Spline(SplineEdge::default()),
            _ => return None,
        };
        Some(EdgeBuilder {
            edge,
            knots: CountedList::new(),
            control_points: CountedList::new(),
            fit_points: CountedList::new(),
        })
    }

    /// Apply one pair; `false` when the code is not an edge field
    fn apply(&mut self, code: i32, real: f64, int: i64) -> bool {
        match &mut self.edge {
            HatchEdge::Line { start, end } => match code {
                10 => start.x = real,
                20 => start.y = real,
                11 => end.x = real,
                21 => end.y = real,
                _ => return false,
            },
            HatchEdge::CircularArc {
                center,
                radius,
                start_angle,
                end_angle,
                counter_clockwise,
            } => match code {
                10 => center.x = real,
                20 => center.y = real,
                40 => *radius = real,
                50 => *start_angle = real.to_radians(),
                51 => *end_angle = real.to_radians(),
                73 => *counter_clockwise = int != 0,
                _ => return false,
            },
            HatchEdge::EllipticArc {
                center,
                major_axis,
                ratio,
                start_angle,
                end_angle,
                counter_clockwise,
            } => match code {
                10 => center.x = real,
                20 => center.y = real,
                11 => major_axis.x = real,
                21 => major_axis.y = real,
                40 => *ratio = real,
                50 => *start_angle = real.to_radians(),
                51 => *end_angle = real.to_radians(),
                73 => *counter_clockwise = int != 0,
                _ => return false,
            },
            HatchEdge::Spline(spline) => match code {
                94 => spline.degree = int as i32,
                73 => spline.rational = int != 0,
                74 => spline.periodic = int != 0,
                95 => self.knots.declare(int.max(0) as usize),
                96 => self.control_points.declare(int.max(0) as usize),
                40 => {
                    self.knots.push(real);
                }
                10 => {
                    self.control_points.push(ControlPoint::new(real, 0.0, 0.0, 1.0));
                }
                20 => {
                    if let Some(cp) = self.control_points.last_mut() {
                        cp.location.y = real;
                    }
                }
                42 => {
                    if let Some(cp) = self.control_points.last_mut() {
                        cp.weight = real;
                    }
                }
                97 => {
                    // Fit data count only follows complete control points;
                    // otherwise 97 belongs to the loop
                    if self.fit_points.declared().is_some() || !self.control_points.is_full() {
                        return false;
                    }
                    self.fit_points.declare(int.max(0) as usize);
                }
                11 => {
                    self.fit_points.push(Vector3::new(real, 0.0, 0.0));
                }
                21 => {
                    if let Some(fp) = self.fit_points.last_mut() {
                        fp.y = real;
                    }
                }
                12 => spline.start_tangent.x = real,
                22 => spline.start_tangent.y = real,
                13 => spline.end_tangent.x = real,
                23 => spline.end_tangent.y = real,
                _ => return false,
            },
            HatchEdge::Polyline { .. } => return false,
        }
        true
    }

    /// A source handle arrived: a 97 taken as fit count was the loop's
    fn release_fit_count(&mut self) {
        if self.fit_points.is_empty() {
            self.fit_points.undeclare();
        }
    }

    fn finish(mut self, issues: &mut Vec<Imbalance>) -> HatchEdge {
        if let HatchEdge::Spline(spline) = &mut self.edge {
            issues.extend(self.knots.imbalance("HATCH spline edge knots"));
            issues.extend(self.control_points.imbalance("HATCH spline edge control points"));
            issues.extend(self.fit_points.imbalance("HATCH spline edge fit points"));
            spline.knots = self.knots.take();
            spline.control_points = self.control_points.take();
            spline.fit_points = self.fit_points.take();
        }
        self.edge
    }
}

/// Loop being filled
#[derive(Debug, Clone)]
struct LoopBuilder {
    flags: BoundaryPathFlags,
    closed: bool,
    vertices: CountedList<BoundaryVertex>,
    edges: CountedList<HatchEdge>,
    edge: Option<EdgeBuilder>,
    /// The current edge exceeded the count; its fields are ignored
    dropping_edge: bool,
}

impl LoopBuilder {
    fn new(flags: i64) -> Self {
        LoopBuilder {
            flags: BoundaryPathFlags::from_bits_retain(flags as i32),
            closed: false,
            vertices: CountedList::new(),
            edges: CountedList::new(),
            edge: None,
            dropping_edge: false,
        }
    }

    fn is_polyline(&self) -> bool {
        self.flags.contains(BoundaryPathFlags::POLYLINE)
    }

    fn close_edge(&mut self, issues: &mut Vec<Imbalance>) {
        if let Some(edge) = self.edge.take() {
            let edge = edge.finish(issues);
            self.edges.push(edge);
        }
    }

    fn apply(&mut self, code: i32, real: f64, int: i64, issues: &mut Vec<Imbalance>) -> bool {
        if self.is_polyline() {
            match code {
                72 => {}
                73 => self.closed = int != 0,
                93 => self.vertices.declare(int.max(0) as usize),
                10 => {
                    self.vertices.push(BoundaryVertex::new(real, 0.0, 0.0));
                }
                20 => {
                    if let Some(v) = self.vertices.last_mut() {
                        v.y = real;
                    }
                }
                42 => {
                    if let Some(v) = self.vertices.last_mut() {
                        v.bulge = real;
                    }
                }
                97 | 330 => {}
                _ => return false,
            }
            return true;
        }

        match code {
            93 => self.edges.declare(int.max(0) as usize),
            72 => {
                self.close_edge(issues);
                let room = !self.edges.is_full();
                match EdgeBuilder::new(int) {
                    Some(edge) if room => {
                        self.edge = Some(edge);
                        self.dropping_edge = false;
                    }
                    _ => {
                        if !room {
                            // Counted as dropped through push
                            self.edges.push(HatchEdge::Line {
                                start: Vector3::ZERO,
                                end: Vector3::ZERO,
                            });
                        }
                        self.dropping_edge = true;
                    }
                }
            }
            330 => {
                if let Some(edge) = self.edge.as_mut() {
                    edge.release_fit_count();
                }
            }
            _ => {
                if self.dropping_edge {
                    return is_edge_code(code);
                }
                let consumed = self
                    .edge
                    .as_mut()
                    .map_or(false, |edge| edge.apply(code, real, int));
                if !consumed && code != 97 {
                    return false;
                }
            }
        }
        true
    }

    fn finish(mut self, issues: &mut Vec<Imbalance>) -> HatchBoundary {
        if self.is_polyline() {
            issues.extend(self.vertices.imbalance("HATCH polyline loop vertices"));
            HatchBoundary {
                flags: self.flags,
                edges: vec![HatchEdge::Polyline {
                    closed: self.closed,
                    vertices: self.vertices.take(),
                }],
            }
        } else {
            self.close_edge(issues);
            issues.extend(self.edges.imbalance("HATCH loop edges"));
            HatchBoundary {
                flags: self.flags,
                edges: self.edges.take(),
            }
        }
    }
}

fn is_edge_code(code: i32) -> bool {
    matches!(
        code,
        10 | 20 | 11 | 21 | 12 | 22 | 13 | 23 | 40 | 42 | 50 | 51 | 73 | 74 | 94 | 95 | 96 | 97
    )
}

/// Decode state of one hatch
#[derive(Debug, Clone)]
pub struct HatchAccumulator {
    phase: Phase,
    loops: CountedList<HatchBoundary>,
    current: Option<LoopBuilder>,
    issues: Vec<Imbalance>,
}

impl HatchAccumulator {
    pub fn new() -> Self {
        HatchAccumulator {
            phase: Phase::Header,
            loops: CountedList::new(),
            current: None,
            issues: Vec::new(),
        }
    }

    /// Inside the boundary data
    pub fn in_loops(&self) -> bool {
        self.phase == Phase::Loops
    }

    /// Offer a pair to the accumulator. Returns `true` when it was consumed
    /// as boundary, pattern or seed data; header fields return `false`.
    pub fn accept(&mut self, code: i32, real: f64, int: i64) -> bool {
        match self.phase {
            Phase::Header => {
                if code == 91 {
                    self.loops.declare(int.max(0) as usize);
                    self.phase = Phase::Loops;
                    true
                } else {
                    false
                }
            }
            Phase::Loops => {
                if code == 92 {
                    self.close_loop();
                    if self.loops.is_full() {
                        // Counted as dropped
                        self.loops.push(HatchBoundary::edges(Vec::new()));
                        self.current = None;
                    } else {
                        self.current = Some(LoopBuilder::new(int));
                    }
                    return true;
                }
                let consumed = match self.current.as_mut() {
                    Some(current) => current.apply(code, real, int, &mut self.issues),
                    None => is_edge_code(code) || matches!(code, 72 | 93 | 330),
                };
                if consumed {
                    return true;
                }
                self.close_loop();
                self.phase = Phase::Trailer;
                self.accept(code, real, int)
            }
            Phase::Trailer => matches!(
                code,
                43..=46 | 49 | 53 | 75..=79 | 98 | 10 | 20 | 97 | 330 | 453 | 460..=463 | 470 | 421 | 63
            ),
        }
    }

    fn close_loop(&mut self) {
        if let Some(current) = self.current.take() {
            let boundary = current.finish(&mut self.issues);
            self.loops.push(boundary);
        }
    }

    /// Complete the hatch: the loops received and every count mismatch seen
    pub fn finish(&mut self) -> (Vec<HatchBoundary>, Vec<Imbalance>) {
        self.close_loop();
        let mut issues = std::mem::take(&mut self.issues);
        issues.extend(self.loops.imbalance("HATCH loops"));
        self.phase = Phase::Header;
        (self.loops.take(), issues)
    }

    pub fn clear(&mut self) {
        *self = HatchAccumulator::new();
    }
}

impl Default for HatchAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(acc: &mut HatchAccumulator, pairs: &[(i32, f64)]) -> Vec<bool> {
        pairs
            .iter()
            .map(|&(code, v)| acc.accept(code, v, v as i64))
            .collect()
    }

    #[test]
    fn test_polyline_loop() {
        let mut acc = HatchAccumulator::new();
        feed(
            &mut acc,
            &[
                (91, 1.0),
                (92, 7.0),
                (72, 1.0),
                (73, 1.0),
                (93, 2.0),
                (10, 0.0),
                (20, 0.0),
                (42, 0.5),
                (10, 4.0),
                (20, 3.0),
                (97, 0.0),
            ],
        );
        assert!(!acc.accept(41, 2.0, 2));
        let (loops, issues) = acc.finish();
        assert!(issues.is_empty());
        assert_eq!(loops.len(), 1);
        match &loops[0].edges[0] {
            HatchEdge::Polyline { closed, vertices } => {
                assert!(*closed);
                assert_eq!(vertices[0].bulge, 0.5);
                assert_eq!(vertices[1], BoundaryVertex::new(4.0, 3.0, 0.0));
            }
            other => panic!("unexpected edge {:?}", other),
        }
    }

    #[test]
    fn test_edge_loop_with_arc() {
        let mut acc = HatchAccumulator::new();
        feed(
            &mut acc,
            &[
                (91, 1.0),
                (92, 1.0),
                (93, 2.0),
                (72, 1.0),
                (10, 0.0),
                (20, 0.0),
                (11, 10.0),
                (21, 0.0),
                (72, 2.0),
                (10, 5.0),
                (20, 0.0),
                (40, 5.0),
                (50, 0.0),
                (51, 180.0),
                (73, 1.0),
                (97, 0.0),
                (75, 1.0),
            ],
        );
        let (loops, issues) = acc.finish();
        assert!(issues.is_empty());
        assert_eq!(loops[0].edges.len(), 2);
        match &loops[0].edges[1] {
            HatchEdge::CircularArc { radius, end_angle, .. } => {
                assert_eq!(*radius, 5.0);
                assert!((end_angle - std::f64::consts::PI).abs() < 1e-12);
            }
            other => panic!("unexpected edge {:?}", other),
        }
    }

    #[test]
    fn test_spline_edge() {
        let mut acc = HatchAccumulator::new();
        feed(
            &mut acc,
            &[
                (91, 1.0),
                (92, 1.0),
                (93, 1.0),
                (72, 4.0),
                (94, 3.0),
                (73, 0.0),
                (74, 0.0),
                (95, 2.0),
                (96, 1.0),
                (40, 0.0),
                (40, 1.0),
                (10, 1.0),
                (20, 2.0),
                (97, 1.0),
                (11, 3.0),
                (21, 4.0),
            ],
        );
        let (loops, issues) = acc.finish();
        assert!(issues.is_empty(), "{:?}", issues);
        match &loops[0].edges[0] {
            HatchEdge::Spline(spline) => {
                assert_eq!(spline.knots, vec![0.0, 1.0]);
                assert_eq!(spline.control_points[0].location, Vector3::new(1.0, 2.0, 0.0));
                assert_eq!(spline.fit_points, vec![Vector3::new(3.0, 4.0, 0.0)]);
            }
            other => panic!("unexpected edge {:?}", other),
        }
    }

    #[test]
    fn test_missing_loops_reported() {
        let mut acc = HatchAccumulator::new();
        feed(&mut acc, &[(91, 2.0), (92, 1.0), (93, 0.0)]);
        let (loops, issues) = acc.finish();
        assert_eq!(loops.len(), 1);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].declared, 2);
        assert_eq!(issues[0].received, 1);
    }

    #[test]
    fn test_extra_edges_dropped() {
        let mut acc = HatchAccumulator::new();
        feed(
            &mut acc,
            &[
                (91, 1.0),
                (92, 1.0),
                (93, 1.0),
                (72, 1.0),
                (10, 0.0),
                (72, 1.0),
                (10, 9.0),
            ],
        );
        let (loops, issues) = acc.finish();
        assert_eq!(loops[0].edges.len(), 1);
        assert_eq!(issues[0].dropped, 1);
    }
}
