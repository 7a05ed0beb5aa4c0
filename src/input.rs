//! Parser for the ticket network text format.
//!
//! The input is a sequence of whitespace separated tokens:
//!
//! ```text
//! V
//! n_0 to,weight to,weight ...    (one group per vertex 0..V)
//! ...
//! T
//! from,to from,to ...            (T tickets)
//! ```
//!
//! Each edge needs to be listed at one of its endpoints only; the reverse
//! direction is added by [`Graph::from_upper_triangular`].

use crate::graph::{EdgeWeight, Graph, NodeIndex};
use std::error::Error;
use std::str::FromStr;

/// A demand pair: somebody wants to travel from `from` to `to`.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub struct Ticket {
    pub from: NodeIndex,
    pub to: NodeIndex,
}

/// A parsed input file: the base graph and the tickets to serve.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Network {
    pub graph: Graph,
    pub tickets: Vec<Ticket>,
}

impl Network {
    /// All ticket origins followed by all ticket destinations, keeping only the
    /// first occurrence of each vertex.
    pub fn terminals(&self) -> Vec<NodeIndex> {
        let mut terminals = vec![];
        let ends = self.tickets.iter().map(|t| t.from);
        for terminal in ends.chain(self.tickets.iter().map(|t| t.to)) {
            if !terminals.contains(&terminal) {
                terminals.push(terminal);
            }
        }
        terminals
    }

    pub fn ticket_pairs(&self) -> Vec<(NodeIndex, NodeIndex)> {
        self.tickets.iter().map(|t| (t.from, t.to)).collect()
    }
}

impl FromStr for Network {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_network(s)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({}:{column})", .line + 1)]
pub struct ParseError {
    line: usize,
    column: usize,
    message: String,
}

impl ParseError {
    pub fn new(line: usize, column: usize, message: String) -> Self {
        ParseError {
            line,
            column,
            message,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
/// Rest of input, line, column.
type ParseState<'a> = (&'a str, usize, usize);

/// Skip whitespace, counting lines.
fn skip_whitespace((mut input, mut line, mut column): ParseState) -> ParseState {
    while let Some(c) = input.chars().next().filter(char::is_ascii_whitespace) {
        if c == '\n' {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
        input = &input[1..];
    }
    (input, line, column)
}

/// Next whitespace delimited token. The returned state points at the token itself.
fn next_token(state: ParseState) -> ParseResult<(ParseState, ParseState)> {
    let (input, line, column) = skip_whitespace(state);
    let text = input
        .split_ascii_whitespace()
        .next()
        .ok_or_else(|| ParseError::new(line, column, "unexpected end of input".to_string()))?;
    Ok((
        (text, line, column),
        (&input[text.len()..], line, column + text.len()),
    ))
}

/// Expect end of input. Error if it's not the end.
fn expect_the_end(state: ParseState) -> ParseResult<()> {
    let (end, line, column) = skip_whitespace(state);
    if !end.is_empty() {
        Err(ParseError::new(
            line,
            column,
            format!("expected end of input but got {:?}", end.split_ascii_whitespace().next()),
        ))
    } else {
        Ok(())
    }
}

/// Parse a whole token as anything that implements `FromStr`.
fn parse<R: FromStr>((token, line, column): ParseState) -> ParseResult<R>
where
    R::Err: Error,
{
    token.parse().map_err(|err| {
        ParseError::new(
            line,
            column,
            format!("could not parse input '{}': {}", token, err),
        )
    })
}

/// Parse element of the next token.
fn parse_inline<T: FromStr>(state: ParseState) -> ParseResult<(T, ParseState)>
where
    T::Err: Error,
{
    let (token, state) = next_token(state)?;
    Ok((parse(token)?, state))
}

/// Parse the next token in the format `a,b`.
fn parse_pair<A: FromStr, B: FromStr>(state: ParseState) -> ParseResult<((A, B), ParseState)>
where
    A::Err: Error,
    B::Err: Error,
{
    let ((token, line, column), state) = next_token(state)?;
    let (a, b) = token.split_once(',').ok_or_else(|| {
        ParseError::new(line, column, format!("expected 'a,b' but got '{}'", token))
    })?;
    let first = parse((a, line, column))?;
    let second = parse((b, line, column + a.len() + 1))?;
    Ok(((first, second), state))
}

/// Parse a vertex index that must be below `num_nodes`.
fn check_vertex(
    vertex: NodeIndex,
    num_nodes: usize,
    (_, line, column): ParseState,
) -> ParseResult<NodeIndex> {
    if vertex < num_nodes {
        Ok(vertex)
    } else {
        Err(ParseError::new(
            line,
            column,
            format!("invalid vertex {} (graph has {} vertices)", vertex, num_nodes),
        ))
    }
}

/// Parse network, reporting parse errors.
/// The whole input is expected to be in memory; the algorithms run on dense
/// per-vertex arrays anyway.
pub fn parse_network(text: &str) -> ParseResult<Network> {
    let state = (text, 0, 0);
    let (num_nodes, mut state): (usize, _) = parse_inline(state)?;
    let mut edges = vec![];
    for from in 0..num_nodes {
        let (num_edges, new_state): (usize, _) = parse_inline(state)?;
        state = new_state;
        for _ in 0..num_edges {
            let (position, _) = next_token(state)?;
            let ((to, weight), new_state): ((NodeIndex, EdgeWeight), _) = parse_pair(state)?;
            state = new_state;
            edges.push((from, check_vertex(to, num_nodes, position)?, weight));
        }
    }
    let graph = Graph::from_upper_triangular(num_nodes, edges)
        .map_err(|err| ParseError::new(state.1, state.2, err.to_string()))?;

    let (num_tickets, mut state): (usize, _) = parse_inline(state)?;
    let mut tickets = Vec::with_capacity(num_tickets);
    for _ in 0..num_tickets {
        let (position, _) = next_token(state)?;
        let ((from, to), new_state) = parse_pair(state)?;
        state = new_state;
        tickets.push(Ticket {
            from: check_vertex(from, num_nodes, position)?,
            to: check_vertex(to, num_nodes, position)?,
        });
    }
    expect_the_end(state)?;
    Ok(Network { graph, tickets })
}
