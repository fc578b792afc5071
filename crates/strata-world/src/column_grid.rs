/// Dense 2D storage over world-space columns `(x, z)`.
///
/// Lookups take world coordinates and return `None` outside the extent, so callers never
/// do their own index arithmetic or bounds checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnGrid<T> {
    origin_x: i32,
    origin_z: i32,
    size_x: usize,
    size_z: usize,
    cells: Vec<T>,
}

impl<T> ColumnGrid<T> {
    /// Builds a grid by evaluating `f` at every world column, x fastest.
    pub fn from_fn(
        origin_x: i32,
        origin_z: i32,
        size_x: usize,
        size_z: usize,
        mut f: impl FnMut(i32, i32) -> T,
    ) -> Self {
        let mut cells = Vec::with_capacity(size_x * size_z);
        for z in 0..size_z {
            for x in 0..size_x {
                cells.push(f(origin_x + x as i32, origin_z + z as i32));
            }
        }
        Self {
            origin_x,
            origin_z,
            size_x,
            size_z,
            cells,
        }
    }

    /// Wraps existing cells laid out x fastest. Returns the cells back on a length mismatch.
    pub fn from_vec(
        origin_x: i32,
        origin_z: i32,
        size_x: usize,
        size_z: usize,
        cells: Vec<T>,
    ) -> Result<Self, Vec<T>> {
        if cells.len() != size_x * size_z {
            return Err(cells);
        }
        Ok(Self {
            origin_x,
            origin_z,
            size_x,
            size_z,
            cells,
        })
    }

    #[inline]
    pub fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_z)
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.size_x, self.size_z)
    }

    #[inline]
    pub fn idx(&self, x: usize, z: usize) -> usize {
        z * self.size_x + x
    }

    /// Local `(x, z)` for a world column, or `None` outside the extent.
    #[inline]
    pub fn local(&self, wx: i32, wz: i32) -> Option<(usize, usize)> {
        let lx = i64::from(wx) - i64::from(self.origin_x);
        let lz = i64::from(wz) - i64::from(self.origin_z);
        if lx < 0 || lz < 0 || lx >= self.size_x as i64 || lz >= self.size_z as i64 {
            return None;
        }
        Some((lx as usize, lz as usize))
    }

    #[inline]
    pub fn contains(&self, wx: i32, wz: i32) -> bool {
        self.local(wx, wz).is_some()
    }

    #[inline]
    pub fn get(&self, wx: i32, wz: i32) -> Option<&T> {
        self.local(wx, wz).map(|(x, z)| &self.cells[self.idx(x, z)])
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Every cell with its world column, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> + '_ {
        self.cells.iter().enumerate().map(move |(i, c)| {
            let x = i % self.size_x;
            let z = i / self.size_x;
            (self.origin_x + x as i32, self.origin_z + z as i32, c)
        })
    }
}
