use crate::data_wrappers::WidePoint;
use crate::{MstError, MstParams, Point};
use num_traits::PrimInt;

/// Converts untyped rows into points. Every row must hold exactly an x and a y coordinate.
///
/// # Examples
/// ```
///use manhattan_mst::{points_from_rows, MstError, Point};
///
///let rows = vec![vec![0, 0], vec![2, 2]];
///assert_eq!(vec![Point::new(0, 0), Point::new(2, 2)], points_from_rows(&rows).unwrap());
///
///let bad = vec![vec![0, 0], vec![1]];
///assert!(matches!(points_from_rows(&bad), Err(MstError::WrongDimension(..))));
/// ```
pub fn points_from_rows<T: PrimInt>(rows: &[Vec<T>]) -> Result<Vec<Point<T>>, MstError> {
    rows.iter()
        .enumerate()
        .map(|(n, row)| match row.as_slice() {
            [x, y] => Ok(Point::new(*x, *y)),
            _ => Err(MstError::WrongDimension(format!(
                "{n}th row has {} coordinates, but points need 2",
                row.len()
            ))),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataValidator<'a, T> {
    points: &'a [Point<T>],
    params: &'a MstParams,
}

impl<'a, T: PrimInt> DataValidator<'a, T> {
    pub(crate) fn new(points: &'a [Point<T>], params: &'a MstParams) -> Self {
        Self { points, params }
    }

    /// Checks the configuration against the points and widens every coordinate.
    pub(crate) fn validate_input_data(&self) -> Result<Vec<WidePoint>, MstError> {
        let n_points = self.points.len();
        if n_points > 0 && self.params.seed >= n_points {
            return Err(MstError::SeedOutOfRange(format!(
                "seed is {}, but there are only {n_points} points",
                self.params.seed
            )));
        }
        self.points
            .iter()
            .enumerate()
            .map(|(n, point)| Self::widen(n, point))
            .collect()
    }

    fn widen(n: usize, point: &Point<T>) -> Result<WidePoint, MstError> {
        let widened = if T::min_value() < T::zero() {
            match (point.x.to_i128(), point.y.to_i128()) {
                (Some(x), Some(y)) => Some(WidePoint::from_signed(x, y)),
                _ => None,
            }
        } else {
            match (point.x.to_u128(), point.y.to_u128()) {
                (Some(x), Some(y)) => Some(WidePoint::from_unsigned(x, y)),
                _ => None,
            }
        };
        widened.ok_or_else(|| {
            MstError::CoordinateOutOfRange(format!(
                "{n}th point has a coordinate that cannot be widened to 128 bits"
            ))
        })
    }
}
