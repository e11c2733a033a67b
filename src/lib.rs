//! Minimum cost to connect a set of 2D integer points, where connecting two points costs their
//! Manhattan distance `|x1 - x2| + |y1 - y2|`. Generic over primitive integer coordinates.
//!
//! The answer is the weight of a minimum spanning tree over the complete graph of the points.
//! Since every pair of points is a candidate edge, the tree is grown with the dense `O(n^2)`
//! variant of Prim's algorithm: distances are recomputed from coordinates on the fly and no edge
//! list or priority queue is ever built. Extra memory is `O(n)`.
//!
//! Coordinates are widened to 128 bits and distances are accumulated as `u128` with checked
//! arithmetic, so extreme coordinates are reported as errors rather than wrapping.
//!
//! # Examples
//! ```
//!use manhattan_mst::{min_cost_connect_points, Point};
//!
//!let points = vec![
//!    Point::new(0, 0),
//!    Point::new(2, 2),
//!    Point::new(3, 10),
//!    Point::new(5, 2),
//!    Point::new(7, 0),
//!];
//!assert_eq!(20, min_cost_connect_points(&points).unwrap());
//! ```
//!
//! # References
//! * [Prim, R.C. Shortest connection networks and some generalizations.](https://doi.org/10.1002/j.1538-7305.1957.tb01515.x)

use num_traits::PrimInt;

pub use crate::data_wrappers::{Cost, MstEdge, Point};
pub use crate::error::MstError;
pub use crate::params::{MstParamBuilder, MstParams};
pub use crate::prims::PrimsMst;
pub use crate::validation::points_from_rows;

mod data_wrappers;
mod distance;
mod error;
mod params;
mod prims;
mod validation;

/// Calculates the minimum total Manhattan distance needed to connect all points, growing the
/// spanning tree from the first point.
///
/// # Parameters
/// * `points` - the points to connect. Duplicates are allowed and cost nothing to connect.
///
/// # Returns
/// * A result that, if successful, contains the total cost. An empty input or a single point
///   costs 0. An Error will be returned if a coordinate cannot be widened to 128 bits or the
///   cost overflows a `u128`.
///
/// # Examples
/// ```
///use manhattan_mst::{min_cost_connect_points, Point};
///
///let points = vec![Point::new(3, 12), Point::new(-2, 5), Point::new(-4, 1)];
///assert_eq!(18, min_cost_connect_points(&points).unwrap());
/// ```
pub fn min_cost_connect_points<T: PrimInt>(points: &[Point<T>]) -> Result<Cost, MstError> {
    PrimsMst::default_params(points).min_cost()
}
