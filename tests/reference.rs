use std::io::Write;
use tricolor::{
    coloring::Coloring,
    error::Error,
    front_end::parse,
    graph::{self, Graph},
    label::Label,
    report::{Palette, Report},
    search::{Solver, Strategy},
    solve,
};

const REFERENCE: &str = "\
; the 8-vertex regression graph
(graph (vertices 8)
       (edges (0 1) (0 4) (0 5) (1 7) (1 2) (2 3) (2 7)
              (1 3) (3 4) (3 6) (4 5) (4 6) (5 6) (6 7)))
";

fn read_graph(text: &str) -> Graph {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    parse(&std::fs::read_to_string(file.path()).unwrap()).unwrap()
}

fn colorings(graph: &Graph) -> Vec<Vec<usize>> {
    Solver::new(graph)
        .solve()
        .unwrap()
        .iter()
        .map(|coloring| coloring.labels().iter().map(|label| label.index()).collect())
        .collect()
}

#[test]
fn test_reference() {
    let graph = read_graph(REFERENCE);
    assert_eq!(graph, graph::reference());
    assert_eq!(
        colorings(&graph),
        vec![
            vec![0, 1, 0, 2, 1, 2, 0, 2],
            vec![0, 2, 0, 1, 2, 1, 0, 1],
            vec![1, 0, 1, 2, 0, 2, 1, 2],
            vec![1, 2, 1, 0, 2, 0, 1, 0],
            vec![2, 0, 2, 1, 0, 1, 2, 1],
            vec![2, 1, 2, 0, 1, 0, 2, 0],
        ]
    );
    let solutions = solve(8, graph.edges().iter().copied()).unwrap();
    assert_eq!(
        Report::new(&solutions, 0, &Palette::default())
            .unwrap()
            .to_string(),
        "\
The number of colorings is 6.
Vertex 0 is colored red
Vertex 1 is colored green
Vertex 2 is colored red
Vertex 3 is colored blue
Vertex 4 is colored green
Vertex 5 is colored blue
Vertex 6 is colored red
Vertex 7 is colored blue
"
    );
}

#[test]
fn test_reference_modes_agree() {
    let graph = graph::reference();
    let expected = Solver::new(&graph).solve().unwrap();
    for &strategy in &[Strategy::Exhaustive, Strategy::Pruned] {
        for &parallel in &[false, true] {
            let solutions = Solver::new(&graph)
                .strategy(strategy)
                .parallel(parallel)
                .solve()
                .unwrap();
            assert_eq!(solutions, expected);
        }
    }
}

#[test]
fn test_reference_with_chords() {
    for &chord in &[(0, 2), (0, 6), (1, 4), (2, 6), (3, 5), (3, 7), (5, 7)] {
        let mut text = String::from(REFERENCE);
        text.truncate(text.trim_end().len() - 2);
        text.push_str(&format!(" ({} {})))", chord.0, chord.1));
        let graph = read_graph(&text);
        assert_eq!(graph.num_edges(), 15);
        let solutions = Solver::new(&graph).parallel(true).solve().unwrap();
        assert!(solutions.is_empty());
        assert_eq!(
            Report::new(&solutions, 0, &Palette::default())
                .unwrap()
                .to_string(),
            "The number of colorings is 0.\nThe graph is non-colorable.\n"
        );
    }
}

#[test]
fn test_triangle_file() {
    let graph = read_graph("(graph (vertices 3) (edges (0 1) (1 2) (2 0)))");
    let solutions = Solver::new(&graph).solve().unwrap();
    assert_eq!(solutions.len(), 6);
    assert!(solutions.contains(&Coloring::new(vec![Label::R2, Label::R0, Label::R1])));
    assert_eq!(Solver::new(&graph).count(), Ok(6));
}

#[test]
fn test_malformed_is_not_non_colorable() {
    assert_eq!(
        solve(3, vec![(0, 1), (1, 5)]),
        Err(Error::VertexOutOfRange {
            u: 1,
            v: 5,
            num_vertices: 3
        })
    );
    assert!(matches!(
        parse("(graph (vertices 3) (edges (0 1) (1 5)))"),
        Err(Error::VertexOutOfRange { .. })
    ));
}
