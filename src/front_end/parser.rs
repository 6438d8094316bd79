use super::error::Result;
use crate::{
    front_end::{Document, GraphDef, MorphismDef},
    types::Name,
};
use itertools::Itertools;
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

pub type GispRule = Rule;

#[derive(Parser)]
#[grammar = "front_end/grammar.pest"]
struct GispParser;

/// Parse a document of graph and morphism definitions.
///
/// Every name may be defined once per document.
pub fn parse(input: &str) -> Result<Document> {
    let mut document = Document::default();
    for pair in GispParser::parse(Rule::document, input)? {
        match pair.as_rule() {
            Rule::graph_def => {
                let span = pair.as_span();
                let graph = parse_graph_def(pair);
                if document.defines(graph.name()) {
                    return Err(duplicate_error(span, graph.name()));
                }
                document.push_graph(graph);
            }
            Rule::morphism_def => {
                let span = pair.as_span();
                let morphism = parse_morphism_def(pair);
                if document.defines(morphism.name()) {
                    return Err(duplicate_error(span, morphism.name()));
                }
                document.push_morphism(morphism);
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(document)
}

fn duplicate_error(span: pest::Span<'_>, name: &Name) -> pest::error::Error<GispRule> {
    pest::error::Error::new_from_span(
        pest::error::ErrorVariant::CustomError {
            message: format!("{} is defined twice", name),
        },
        span,
    )
}

fn parse_name(pair: Pair<Rule>) -> Name {
    Name::from(pair.as_str())
}

fn parse_graph_def(pair: Pair<Rule>) -> GraphDef {
    let mut name = None;
    let mut nodes = vec![];
    let mut edges = vec![];
    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::name => name = Some(parse_name(pair)),
            Rule::nodes_stat => nodes.extend(pair.into_inner().map(parse_name)),
            Rule::edges_stat => {
                for edge in pair.into_inner() {
                    for (source, label, target) in edge.into_inner().map(parse_name).tuples() {
                        edges.push((source, label, target));
                    }
                }
            }
            _ => unreachable!(),
        }
    }
    match name {
        Some(name) => GraphDef::new(name, nodes, edges),
        None => unreachable!(),
    }
}

fn parse_morphism_def(pair: Pair<Rule>) -> MorphismDef {
    let mut names = vec![];
    let mut map: Vec<(Name, Name)> = vec![];
    for pair in pair.into_inner() {
        match pair.as_rule() {
            Rule::name => names.push(parse_name(pair)),
            Rule::from_stat | Rule::to_stat => names.extend(pair.into_inner().map(parse_name)),
            Rule::map_stat => {
                for entry in pair.into_inner() {
                    map.extend(entry.into_inner().map(parse_name).tuples());
                }
            }
            _ => unreachable!(),
        }
    }
    match names.into_iter().collect_tuple() {
        Some((name, from, to)) => MorphismDef::new(name, from, to, map),
        None => unreachable!(),
    }
}
