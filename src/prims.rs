use crate::data_wrappers::WidePoint;
use crate::distance::manhattan_distance;
use crate::validation::DataValidator;
use crate::{Cost, MstEdge, MstError, MstParams, Point};
use num_traits::PrimInt;
use tracing::{debug, warn};

/// Dense Prim's minimum spanning tree over the complete graph of a set of points, where every
/// pair of points is joined by an edge weighted by their Manhattan distance.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimsMst<'a, T> {
    points: &'a [Point<T>],
    n_points: usize,
    params: MstParams,
}

impl<'a, T: PrimInt> PrimsMst<'a, T> {
    /// Creates a solver over the given points using a custom parameter configuration.
    ///
    /// # Parameters
    /// * `points` - a reference to the points to connect. Duplicates are allowed.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The solver instance.
    ///
    /// # Examples
    /// ```
    ///use manhattan_mst::{MstParams, Point, PrimsMst};
    ///
    ///let points = vec![Point::new(0, 0), Point::new(2, 2), Point::new(3, 10)];
    ///let params = MstParams::builder().seed(2).build();
    ///let solver = PrimsMst::new(&points, params);
    ///assert_eq!(13, solver.min_cost().unwrap());
    /// ```
    pub fn new(points: &'a [Point<T>], params: MstParams) -> Self {
        let n_points = points.len();
        PrimsMst {
            points,
            n_points,
            params,
        }
    }

    /// Creates a solver over the given points that grows the tree from the first point.
    ///
    /// # Examples
    /// ```
    ///use manhattan_mst::{Point, PrimsMst};
    ///
    ///let points = vec![Point::new(3, 12), Point::new(-2, 5), Point::new(-4, 1)];
    ///let solver = PrimsMst::default_params(&points);
    ///assert_eq!(18, solver.min_cost().unwrap());
    /// ```
    pub fn default_params(points: &'a [Point<T>]) -> PrimsMst<'a, T> {
        PrimsMst::new(points, MstParams::default())
    }

    /// Calculates the minimum total Manhattan distance needed to connect all points.
    ///
    /// # Returns
    /// * A result that, if successful, contains the weight of a minimum spanning tree over the
    ///   points. Zero for fewer than two points. An Error will be returned if the configured
    ///   seed is not the index of a point, if a coordinate cannot be widened to 128 bits, or if a
    ///   distance or the total overflows a `Cost`.
    ///
    /// # Examples
    /// ```
    ///use manhattan_mst::{Point, PrimsMst};
    ///
    ///let points: Vec<Point<i32>> = vec![(0, 0), (2, 2), (3, 10), (5, 2), (7, 0)]
    ///    .into_iter()
    ///    .map(Point::from)
    ///    .collect();
    ///let solver = PrimsMst::default_params(&points);
    ///assert_eq!(20, solver.min_cost().unwrap());
    /// ```
    pub fn min_cost(&self) -> Result<Cost, MstError> {
        let total_cost = self
            .min_spanning_tree()?
            .iter()
            .try_fold(0, |total: Cost, edge| total.checked_add(edge.distance))
            .ok_or_else(|| {
                MstError::CostOverflow(String::from("total cost of the tree exceeds u128"))
            })?;
        debug!(total_cost, "Minimum spanning tree cost calculated");
        Ok(total_cost)
    }

    /// Finds the edges of a minimum spanning tree over the points.
    ///
    /// # Returns
    /// * A result that, if successful, contains the `n - 1` edges of the tree, in the order
    ///   the vertices were attached. An empty input or a single point gives no edges. Errors
    ///   are as for `PrimsMst::min_cost`.
    ///
    /// # Examples
    /// ```
    ///use manhattan_mst::{MstEdge, Point, PrimsMst};
    ///
    ///let points = vec![Point::new(0, 0), Point::new(0, 5), Point::new(1, 0)];
    ///let tree = PrimsMst::default_params(&points).min_spanning_tree().unwrap();
    ///assert_eq!(tree, vec![
    ///    MstEdge { parent: 0, child: 2, distance: 1 },
    ///    MstEdge { parent: 0, child: 1, distance: 5 },
    ///]);
    /// ```
    pub fn min_spanning_tree(&self) -> Result<Vec<MstEdge>, MstError> {
        if self.n_points == 0 {
            warn!("Asked to connect an empty set of points, cost is zero");
            return Ok(Vec::new());
        }
        let validator = DataValidator::new(self.points, &self.params);
        let points = validator.validate_input_data()?;
        debug!(
            n_points = self.n_points,
            seed = self.params.seed,
            "Growing minimum spanning tree"
        );
        self.prims_min_spanning_tree(&points)
    }

    fn prims_min_spanning_tree(&self, points: &[WidePoint]) -> Result<Vec<MstEdge>, MstError> {
        let mut in_tree = vec![false; self.n_points];
        let mut distances = vec![Cost::MAX; self.n_points];
        let mut parents: Vec<Option<usize>> = vec![None; self.n_points];
        distances[self.params.seed] = 0;

        let mut mst = Vec::with_capacity(self.n_points - 1);

        for _ in 0..self.n_points {
            let Some(left_node) = self.select_min_node(&distances, &in_tree) else {
                break;
            };
            in_tree[left_node] = true;
            if let Some(parent) = parents[left_node] {
                mst.push(MstEdge {
                    parent,
                    child: left_node,
                    distance: distances[left_node],
                });
            }

            for right_node in 0..self.n_points {
                if in_tree[right_node] {
                    continue;
                }
                let dist = manhattan_distance(&points[left_node], &points[right_node])
                    .ok_or_else(|| {
                        MstError::CostOverflow(format!(
                            "distance between {left_node}th and {right_node}th points exceeds u128"
                        ))
                    })?;
                // A vertex without a parent takes the first offer, even at Cost::MAX
                if dist < distances[right_node] || parents[right_node].is_none() {
                    distances[right_node] = dist;
                    parents[right_node] = Some(left_node);
                }
            }
        }
        Ok(mst)
    }

    /// Lowest indexed vertex outside the tree with the smallest distance estimate.
    fn select_min_node(&self, distances: &[Cost], in_tree: &[bool]) -> Option<usize> {
        let mut node: Option<usize> = None;
        for (i, (dist, is_in_tree)) in distances.iter().zip(in_tree).enumerate() {
            if *is_in_tree {
                continue;
            }
            match node {
                Some(n) if distances[n] <= *dist => {}
                _ => node = Some(i),
            }
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn select_min_node_prefers_lowest_index_on_ties() {
        let data = points(&[(0, 0), (0, 0), (0, 0)]);
        let solver = PrimsMst::default_params(&data);
        let distances = vec![7, 3, 3];
        assert_eq!(Some(1), solver.select_min_node(&distances, &[false, false, false]));
        assert_eq!(Some(2), solver.select_min_node(&distances, &[false, true, false]));
        assert_eq!(None, solver.select_min_node(&distances, &[true, true, true]));
    }

    #[test]
    fn select_min_node_takes_unreached_vertex() {
        let data = points(&[(0, 0), (0, 0)]);
        let solver = PrimsMst::default_params(&data);
        let distances = vec![Cost::MAX, Cost::MAX];
        assert_eq!(Some(0), solver.select_min_node(&distances, &[false, false]));
    }

    #[test]
    fn tree_from_first_point() {
        let data = points(&[(0, 0), (2, 2), (3, 10), (5, 2), (7, 0)]);
        let tree = PrimsMst::default_params(&data).min_spanning_tree().unwrap();
        assert_eq!(
            tree,
            vec![
                MstEdge { parent: 0, child: 1, distance: 4 },
                MstEdge { parent: 1, child: 3, distance: 3 },
                MstEdge { parent: 3, child: 4, distance: 4 },
                MstEdge { parent: 1, child: 2, distance: 9 },
            ]
        );
    }

    #[test]
    fn tree_from_custom_seed() {
        let data = points(&[(0, 0), (2, 2), (3, 10), (5, 2), (7, 0)]);
        let params = MstParams::builder().seed(4).build();
        let tree = PrimsMst::new(&data, params).min_spanning_tree().unwrap();
        assert_eq!(
            tree,
            vec![
                MstEdge { parent: 4, child: 3, distance: 4 },
                MstEdge { parent: 3, child: 1, distance: 3 },
                MstEdge { parent: 1, child: 0, distance: 4 },
                MstEdge { parent: 1, child: 2, distance: 9 },
            ]
        );
    }

    #[test]
    fn single_point_has_no_edges() {
        let data = points(&[(4, -4)]);
        let solver = PrimsMst::default_params(&data);
        assert!(solver.min_spanning_tree().unwrap().is_empty());
        assert_eq!(Ok(0), solver.min_cost());
    }

    #[test]
    fn empty_points() {
        let data: Vec<Point<i32>> = Vec::new();
        let solver = PrimsMst::default_params(&data);
        assert!(solver.min_spanning_tree().unwrap().is_empty());
        assert_eq!(Ok(0), solver.min_cost());
    }

    #[test]
    fn distance_overflow() {
        let data = vec![
            Point::new(i128::MIN, i128::MIN),
            Point::new(i128::MAX, i128::MAX),
        ];
        let result = PrimsMst::default_params(&data).min_cost();
        assert!(matches!(result, Err(MstError::CostOverflow(..))));
    }

    #[test]
    fn total_overflow() {
        let a = 1_i128 << 126;
        let data = vec![
            Point::new(a, 0),
            Point::new(-a, 0),
            Point::new(0, a),
            Point::new(0, -a),
        ];
        // Every edge is 2^127, three of them do not fit
        let solver = PrimsMst::default_params(&data);
        assert_eq!(3, solver.min_spanning_tree().unwrap().len());
        let result = solver.min_cost();
        assert!(matches!(result, Err(MstError::CostOverflow(..))));
    }
}
