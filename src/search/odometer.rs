use crate::label::Label;

/// Every assignment of labels to `num_vertices` vertices, in lexicographic
/// order.
///
/// Works like an odometer over base-3 digits: the last vertex turns fastest.
/// With zero vertices there is exactly one, empty, assignment.
#[derive(Debug, Clone)]
pub struct Assignments {
    labels: Vec<Label>,
    done: bool,
}

impl Assignments {
    pub fn new(num_vertices: usize) -> Self {
        Self {
            labels: vec![Label::R0; num_vertices],
            done: false,
        }
    }

    /// Rewind to the first assignment.
    pub fn restart(&mut self) {
        self.labels.iter_mut().for_each(|label| *label = Label::R0);
        self.done = false;
    }

    /// The current assignment, or `None` once exhausted.
    pub(crate) fn current(&self) -> Option<&[Label]> {
        if self.done {
            None
        } else {
            Some(&self.labels)
        }
    }

    pub(crate) fn advance(&mut self) {
        for label in self.labels.iter_mut().rev() {
            match Label::from_index(label.index() + 1) {
                Some(next) => {
                    *label = next;
                    return;
                }
                None => *label = Label::R0,
            }
        }
        self.done = true;
    }
}

impl Iterator for Assignments {
    type Item = Vec<Label>;

    fn next(&mut self) -> Option<Self::Item> {
        let labels = self.current()?.to_vec();
        self.advance();
        Some(labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label::{R0, R1, R2};

    #[test]
    fn test_zero_vertices() {
        assert_eq!(Assignments::new(0).collect::<Vec<_>>(), vec![vec![]]);
    }

    #[test]
    fn test_order() {
        assert_eq!(
            Assignments::new(2).collect::<Vec<_>>(),
            vec![
                vec![R0, R0],
                vec![R0, R1],
                vec![R0, R2],
                vec![R1, R0],
                vec![R1, R1],
                vec![R1, R2],
                vec![R2, R0],
                vec![R2, R1],
                vec![R2, R2],
            ]
        );
        assert_eq!(Assignments::new(5).count(), 243);
    }

    #[test]
    fn test_restart() {
        let mut assignments = Assignments::new(3);
        assert_eq!(assignments.by_ref().count(), 27);
        assert_eq!(assignments.next(), None);
        assignments.restart();
        assert_eq!(assignments.next(), Some(vec![R0, R0, R0]));
    }
}
