use super::range::Range;
use crate::GRID;
use crate::Probability;
use crate::cards::Class;
use crate::equity::Equities;

/// The 13×13 starting-hand matrix with an equity in every included cell.
///
/// Clients color-scale the cells by equity; excluded cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid([[Option<Probability>; GRID]; GRID]);

impl Grid {
    pub fn new(range: &Range, equities: &Equities) -> Self {
        let mut cells = [[None; GRID]; GRID];
        for class in range.classes() {
            let (row, col) = class.cell();
            cells[row][col] = Some(equities.class(class));
        }
        Self(cells)
    }
    pub fn get(&self, row: usize, col: usize) -> Option<Probability> {
        self.0[row][col]
    }
    pub fn rows(&self) -> Vec<Vec<Option<Probability>>> {
        self.0.iter().map(|row| row.to_vec()).collect()
    }
    /// [`Grid::scale`] of every included cell, in matrix layout.
    pub fn shades(&self) -> Vec<Vec<Option<Probability>>> {
        self.0
            .iter()
            .map(|row| row.iter().map(|cell| cell.map(|p| self.scale(p))).collect())
            .collect()
    }
    /// Class names in matrix layout, for axis labels.
    pub fn labels() -> Vec<Vec<String>> {
        (0..GRID)
            .map(|row| {
                (0..GRID)
                    .map(|col| Class::from((row, col)).to_string())
                    .collect()
            })
            .collect()
    }
    /// Lowest and highest equity among included cells.
    pub fn bounds(&self) -> Option<(Probability, Probability)> {
        self.0
            .iter()
            .flatten()
            .flatten()
            .fold(None, |acc, &p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
    }
    /// Position of an equity within [`Grid::bounds`], from 0 to 1.
    /// Used as the color-scale coordinate; a flat grid maps to 1.
    pub fn scale(&self, equity: Probability) -> Probability {
        match self.bounds() {
            None => 0.,
            Some((lo, hi)) if hi - lo <= f32::EPSILON => 1.,
            Some((lo, hi)) => ((equity - lo) / (hi - lo)).clamp(0., 1.),
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..GRID {
            for col in 0..GRID {
                match self.0[row][col] {
                    Some(p) => write!(f, "{:>4.0}", p * 100.)?,
                    None => write!(f, "{:>4}", "·")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
