use super::Palette;
use crate::{coloring::Coloring, graph::Graph};
use std::{f64::consts::PI, fmt};

/// Center of the circle the vertices are placed on, in inches.
pub const CENTER: (f64, f64) = (4.0, 4.0);

/// Radius of the circle the vertices are placed on, in inches.
pub const RADIUS: f64 = 3.0;

/// Places vertex `i` at angle `2πi/n` on the circle.
pub fn circle_layout(num_vertices: usize, center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    (0..num_vertices)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / num_vertices as f64;
            (
                center.0 + radius * angle.cos(),
                center.1 + radius * angle.sin(),
            )
        })
        .collect()
}

/// An undirected Graphviz rendering of a colored graph, with vertices pinned
/// on a circle and filled with the color of their label.
///
/// Intended for `neato -n` or `neato -Tsvg`.
pub struct Dot<'a> {
    graph: &'a Graph,
    coloring: &'a Coloring,
    palette: &'a Palette,
}

pub fn to_dot<'a>(graph: &'a Graph, coloring: &'a Coloring, palette: &'a Palette) -> Dot<'a> {
    Dot {
        graph,
        coloring,
        palette,
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph G {{")?;
        writeln!(f, "    layout=neato;")?;
        writeln!(
            f,
            "    node [shape=circle, style=filled, fontname=\"Helvetica\"];"
        )?;
        let layout = circle_layout(self.graph.num_vertices(), CENTER, RADIUS);
        for (v, (x, y)) in layout.into_iter().enumerate() {
            write!(f, "    {} [pos=\"{:.3},{:.3}!\"", v, x, y)?;
            if let Some(label) = self.coloring.get(v) {
                write!(f, ", fillcolor=\"{}\"", self.palette.swatch(label).hex())?;
            }
            writeln!(f, "];")?;
        }
        for &(u, v) in self.graph.edges() {
            writeln!(f, "    {} -- {};", u, v)?;
        }
        writeln!(f, "}}")
    }
}
