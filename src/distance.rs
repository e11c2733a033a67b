use crate::data_wrappers::{Cost, WidePoint};

/// Sum of the absolute axis differences. `None` if the sum does not fit in a `Cost`.
pub(crate) fn manhattan_distance(a: &WidePoint, b: &WidePoint) -> Option<Cost> {
    a.x.abs_diff(b.x).checked_add(a.y.abs_diff(b.y))
}
