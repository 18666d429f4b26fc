//! Segment crossing tests used for line-of-sight occlusion
//!
//! Only the general-position crossing case is reported. Collinear overlap
//! falls through to "no crossing".

use crate::Point;

/// Turn direction of the triple (p, q, r)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of r relative to the directed line p -> q
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True iff segment p1-p2 properly straddles segment p3-p4
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);

    o1 != o2 && o3 != o4
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges in order top, right, bottom, left
    pub fn edges(&self) -> [(Point, Point); 4] {
        let tl = Point::new(self.x, self.y);
        let tr = Point::new(self.x + self.width, self.y);
        let br = Point::new(self.x + self.width, self.y + self.height);
        let bl = Point::new(self.x, self.y + self.height);
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
    }
}

/// Corners of a `width` x `height` rectangle turned by `rotation` about
/// `center`, in order top-left, top-right, bottom-right, bottom-left (as seen
/// before rotation, y down)
pub fn rotated_rect_corners(center: Point, width: f32, height: f32, rotation: f32) -> [Point; 4] {
    let half = Point::new(width / 2.0, height / 2.0);
    let rot = Point::from_angle(rotation);
    [
        Point::new(-half.x, -half.y),
        Point::new(half.x, -half.y),
        Point::new(half.x, half.y),
        Point::new(-half.x, half.y),
    ]
    .map(|corner| center + rot.rotate(corner))
}

/// True if the segment crosses any edge of the axis-aligned rectangle.
///
/// A segment lying entirely inside the rectangle crosses nothing and is not
/// reported.
pub fn ray_intersects_rectangle(ray_start: Point, ray_end: Point, rect: &Rect) -> bool {
    rect.edges()
        .iter()
        .any(|&(a, b)| segments_intersect(ray_start, ray_end, a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_diagonals_intersect() {
        assert!(segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        ));
    }

    #[test]
    fn test_parallel_segments_do_not_intersect() {
        assert!(!segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
        ));
    }

    #[test]
    fn test_disjoint_segments_on_crossing_lines() {
        // Lines cross at (5,5) but the second segment stops short of it
        assert!(!segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(7.0, 3.0),
        ));
    }

    #[test]
    fn test_collinear_overlap_is_not_reported() {
        assert!(!segments_intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(15.0, 0.0),
        ));
    }

    #[test]
    fn test_orientation() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(10.0, 0.0);
        assert_eq!(orientation(p, q, Point::new(20.0, 0.0)), Orientation::Collinear);
        assert_ne!(
            orientation(p, q, Point::new(5.0, 5.0)),
            orientation(p, q, Point::new(5.0, -5.0))
        );
    }

    #[test]
    fn test_rect_corners_unrotated() {
        let corners = rotated_rect_corners(Point::new(5.0, 5.0), 10.0, 4.0, 0.0);
        assert_eq!(corners[0], Point::new(0.0, 3.0));
        assert_eq!(corners[2], Point::new(10.0, 7.0));
    }

    #[test]
    fn test_rect_quarter_turn_swaps_extent() {
        let corners = rotated_rect_corners(Point::ZERO, 10.0, 4.0, std::f32::consts::FRAC_PI_2);
        let max_x = corners.iter().map(|c| c.x).fold(f32::MIN, f32::max);
        let max_y = corners.iter().map(|c| c.y).fold(f32::MIN, f32::max);
        assert!((max_x - 2.0).abs() < 1e-4);
        assert!((max_y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_through_rectangle() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(ray_intersects_rectangle(
            Point::new(-5.0, 5.0),
            Point::new(15.0, 5.0),
            &rect
        ));
    }

    #[test]
    fn test_ray_above_rectangle() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!ray_intersects_rectangle(
            Point::new(0.0, -5.0),
            Point::new(10.0, -5.0),
            &rect
        ));
    }

    #[test]
    fn test_ray_inside_rectangle() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!ray_intersects_rectangle(
            Point::new(2.0, 2.0),
            Point::new(8.0, 8.0),
            &rect
        ));
    }
}
