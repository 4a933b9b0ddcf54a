//! The three admissible vertex labels.
//!
//! A label stands for one of the cube roots of unity. Internally a label is
//! only a tag, so comparing two labels never touches floating point. The
//! complex value is derived on demand for presentation.

use derive_more::Display;

/// One of the three cube roots of unity.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// `1`
    #[display(fmt = "0")]
    R0,
    /// `-1/2 + i·√3/2`
    #[display(fmt = "1")]
    R1,
    /// `-1/2 - i·√3/2`
    #[display(fmt = "2")]
    R2,
}

impl Label {
    /// All labels, in enumeration order.
    pub const ALL: [Label; 3] = [Label::R0, Label::R1, Label::R2];

    pub fn index(self) -> usize {
        match self {
            Label::R0 => 0,
            Label::R1 => 1,
            Label::R2 => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Label> {
        Label::ALL.get(index).copied()
    }

    /// The `(re, im)` pair of the root of unity this label stands for.
    pub fn root(self) -> (f64, f64) {
        let angle = 2.0 * std::f64::consts::PI * self.index() as f64 / 3.0;
        match self {
            Label::R0 => (1.0, 0.0),
            _ => (angle.cos(), angle.sin()),
        }
    }

    /// Maps this label through the bijection `perm`, where `perm[i]` is the
    /// image of the `i`-th label.
    ///
    /// Debug builds panic when `perm` repeats a label.
    pub fn permute(self, perm: &[Label; 3]) -> Label {
        debug_assert!(
            perm[0] != perm[1] && perm[0] != perm[2] && perm[1] != perm[2],
            "{:?} is not a permutation of the labels",
            perm
        );
        perm[self.index()]
    }
}

/// The ordered triple of labels.
pub fn labels() -> [Label; 3] {
    Label::ALL
}

/// Whether `a` and `b` are the same label.
pub fn equals(a: Label, b: Label) -> bool {
    a == b
}
