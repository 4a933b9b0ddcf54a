use crate::{
    error::{Error, Result},
    graph::Graph,
    types::{Edge, VId},
};
use itertools::Itertools;
use log::debug;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct GraphParser;

/// Parse a graph written as
///
/// ```text
/// (graph (vertices 3)
///        (edges (0 1) (1 2) (2 0)))
/// ```
///
/// The `edges` statement may be omitted. `;` starts a line comment.
pub fn parse(input: &str) -> Result<Graph> {
    let mut num_vertices = 0;
    let mut edges = vec![];
    for pair in GraphParser::parse(Rule::graph, input).map_err(|e| Error::Parse(e.to_string()))? {
        match pair.as_rule() {
            Rule::vertices_stat => {
                num_vertices = parse_vertices_stat(pair)?;
            }
            Rule::edges_stat => {
                edges = parse_edges_stat(pair)?;
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    debug!("parsed {} vertices, {} edges", num_vertices, edges.len());
    Graph::new(num_vertices, edges)
}

fn custom_error(pair: &pest::iterators::Pair<Rule>, message: &str) -> Error {
    Error::Parse(
        pest::error::Error::<Rule>::new_from_span(
            pest::error::ErrorVariant::CustomError {
                message: String::from(message),
            },
            pair.as_span(),
        )
        .to_string(),
    )
}

fn parse_index(pair: pest::iterators::Pair<Rule>, what: &str) -> Result<VId> {
    if pair.as_str().starts_with('-') {
        return Err(custom_error(&pair, &format!("negative {}", what)));
    }
    pair.as_str()
        .parse()
        .map_err(|_| custom_error(&pair, &format!("{} too large", what)))
}

fn parse_vertices_stat(pair: pest::iterators::Pair<Rule>) -> Result<usize> {
    match pair.into_inner().next() {
        Some(int) => parse_index(int, "vertex count"),
        None => unreachable!(),
    }
}

fn parse_edges_stat(pair: pest::iterators::Pair<Rule>) -> Result<Vec<Edge>> {
    pair.into_inner()
        .flat_map(|edge| edge.into_inner())
        .tuples::<(_, _)>()
        .map(|(u, v)| -> Result<Edge> {
            Ok((parse_index(u, "vertex index")?, parse_index(v, "vertex index")?))
        })
        .collect()
}
