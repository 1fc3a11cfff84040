use std::f64::consts::TAU;

use crate::math::mat3::Mat3;
use crate::math::vec2::Vec2;

use super::line_segment::LineSegment;

/// A convex polygon defined by its vertices in local space.
///
/// Insertion order is significant: vertex `i` and `i + 1` (wrapping) form edge `i`.
/// Vertices should be ordered counter-clockwise for outward edge normals; clockwise
/// loops are tolerated by the collision code, which checks the winding.
/// Fewer than three vertices make a degenerate polygon that never collides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Polygon { vertices }
    }

    /// Appends a vertex to the end of the loop.
    pub fn add_vertex(&mut self, vertex: Vec2) {
        self.vertices.push(vertex);
    }

    /// Regular n-gon of radius 0.5 centred on the origin, first vertex at (0.5, 0),
    /// counter-clockwise. Fewer than three sides yield an empty polygon.
    pub fn regular(sides: usize) -> Self {
        if sides < 3 {
            return Polygon::default();
        }
        let step = TAU / sides as f64;
        let vertices = (0..sides)
            .map(|i| Vec2::new(0.5, 0.0).rotate(step * i as f64))
            .collect();
        Polygon { vertices }
    }

    /// Unit square centred on the origin, counter-clockwise from the top-left corner.
    pub fn quad() -> Self {
        Polygon::new(vec![
            Vec2::new(-0.5, 0.5),
            Vec2::new(-0.5, -0.5),
            Vec2::new(0.5, -0.5),
            Vec2::new(0.5, 0.5),
        ])
    }

    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// World-space copy of the vertices under `matrix`.
    pub fn transformed_vertices(&self, matrix: &Mat3) -> Vec<Vec2> {
        self.vertices
            .iter()
            .map(|v| matrix.transform_point(*v))
            .collect()
    }

    /// Polygon with every vertex transformed by `matrix`.
    pub fn transformed(&self, matrix: &Mat3) -> Polygon {
        Polygon::new(self.transformed_vertices(matrix))
    }

    /// Edge list of a vertex loop, closing the last vertex back to the first.
    pub fn edges(vertices: &[Vec2]) -> Vec<LineSegment> {
        let n = vertices.len();
        (0..n)
            .map(|i| LineSegment::new(vertices[i], vertices[(i + 1) % n]))
            .collect()
    }

    /// Signed area of a vertex loop using the Shoelace formula.
    /// Positive for counter-clockwise loops.
    pub fn signed_area(vertices: &[Vec2]) -> f64 {
        let n = vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            let v1 = vertices[i];
            let v2 = vertices[(i + 1) % n];
            area += v1.cross(v2);
        }
        area / 2.0
    }

    /// Calculates the area of the polygon.
    pub fn area(&self) -> f64 {
        Self::signed_area(&self.vertices).abs()
    }

    /// Area centroid of a vertex loop. Falls back to the vertex average for
    /// collinear or degenerate loops.
    pub fn centroid(vertices: &[Vec2]) -> Vec2 {
        let n = vertices.len();
        if n == 0 {
            return Vec2::ZERO;
        }

        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;
        let origin = vertices[0];

        for i in 1..n.saturating_sub(1) {
            let v2 = vertices[i];
            let v3 = vertices[i + 1];

            let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += triangle_signed_area;
            centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
        }

        if signed_area_sum.abs() < 1e-10 {
            let sum = vertices.iter().fold(Vec2::ZERO, |acc, v| acc + *v);
            sum / n as f64
        } else {
            centroid / signed_area_sum
        }
    }
}
