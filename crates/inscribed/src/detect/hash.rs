//! Uniform spatial hash over pair space `(mx, my, d)`.
//!
//! Cells are `tol`-sized cubes keyed by rounded coordinates. A query visits
//! the 27 cells around a key, so two samples within `tol` per axis are always
//! found even when they round to adjacent cells.

use std::collections::HashMap;

use crate::lift::PairSample;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct CellKey(i64, i64, i64);

static OFFSETS: [i64; 3] = [-1, 0, 1];

pub(crate) struct SpatialHash {
    inv_tol: f64,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl SpatialHash {
    pub(crate) fn new(tol: f64) -> Self {
        Self {
            inv_tol: 1.0 / tol,
            cells: HashMap::new(),
        }
    }

    #[inline]
    fn quantize(&self, v: f64) -> i64 {
        // `as` saturates on overflow and maps NaN to 0.
        (v * self.inv_tol).round() as i64
    }

    #[inline]
    pub(crate) fn key(&self, s: &PairSample) -> CellKey {
        CellKey(self.quantize(s.mx), self.quantize(s.my), self.quantize(s.d))
    }

    pub(crate) fn insert(&mut self, key: CellKey, sample: usize) {
        self.cells.entry(key).or_default().push(sample);
    }

    /// Sample ids in the 27 cells around `key`, in a fixed order
    /// (x, then y, then d offset; insertion order within a cell).
    pub(crate) fn neighbours(&self, key: CellKey) -> impl Iterator<Item = usize> + '_ {
        OFFSETS
            .iter()
            .flat_map(|&dx| OFFSETS.iter().map(move |&dy| (dx, dy)))
            .flat_map(|(dx, dy)| OFFSETS.iter().map(move |&dz| (dx, dy, dz)))
            .filter_map(move |(dx, dy, dz)| {
                self.cells.get(&CellKey(
                    key.0.saturating_add(dx),
                    key.1.saturating_add(dy),
                    key.2.saturating_add(dz),
                ))
            })
            .flat_map(|ids| ids.iter().copied())
    }
}
