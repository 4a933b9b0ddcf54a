use super::Palette;
use crate::{
    coloring::{Coloring, SolutionSet},
    error::{Error, Result},
};

/// Textual summary of a solve: the number of colorings and then either the
/// chosen coloring vertex by vertex or the non-colorable verdict.
pub struct Report<'a> {
    num_colorings: usize,
    chosen: Option<&'a Coloring>,
    palette: &'a Palette,
}

impl<'a> Report<'a> {
    /// Report on the `index`-th coloring of `solutions`.
    ///
    /// With no solutions any index is accepted and the report states that the
    /// graph is non-colorable.
    pub fn new(solutions: &'a SolutionSet, index: usize, palette: &'a Palette) -> Result<Self> {
        let chosen = if solutions.is_empty() {
            None
        } else {
            Some(solutions.get(index).ok_or(Error::NoSuchColoring {
                index,
                len: solutions.len(),
            })?)
        };
        Ok(Self {
            num_colorings: solutions.len(),
            chosen,
            palette,
        })
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "The number of colorings is {}.", self.num_colorings)?;
        match self.chosen {
            Some(coloring) => {
                for (v, &label) in coloring.labels().iter().enumerate() {
                    writeln!(f, "Vertex {} is colored {}", v, self.palette.name(label))?;
                }
                Ok(())
            }
            None => writeln!(f, "The graph is non-colorable."),
        }
    }
}
