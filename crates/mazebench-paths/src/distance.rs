use mazebench_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a - b;
    d.x.abs() + d.y.abs()
}
