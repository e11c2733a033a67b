/// Widened unsigned type in which every distance and total cost is computed.
pub type Cost = u128;

/// A point on the integer plane. Only its position in the input identifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl<T: Copy> Point<T> {
    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point { x, y }
    }
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point { x, y }
    }
}

/// An edge of the spanning tree. `child` is the vertex attached to the tree by this edge and
/// `parent` the tree vertex it was attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MstEdge {
    pub parent: usize,
    pub child: usize,
    pub distance: Cost,
}

/// A point with coordinates mapped onto `u128` so that differences never overflow. Signed
/// coordinates are shifted by `2^127`, which keeps their order and the distance between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WidePoint {
    pub(crate) x: u128,
    pub(crate) y: u128,
}

const SIGNED_OFFSET: u128 = 1 << 127;

impl WidePoint {
    pub(crate) fn from_signed(x: i128, y: i128) -> Self {
        WidePoint {
            x: (x as u128) ^ SIGNED_OFFSET,
            y: (y as u128) ^ SIGNED_OFFSET,
        }
    }

    pub(crate) fn from_unsigned(x: u128, y: u128) -> Self {
        WidePoint { x, y }
    }
}
