//! Edge-list input format.
//!
//! One entry per line; blank lines and `#` comments are ignored:
//!
//! ```text
//! # optional kind line, before any vertex or edge
//! undirected
//! 1 2 5      # edge 1-2 with weight 5
//! 2 3        # edge 2-3 with weight 0
//! 7          # lone vertex 7
//! ```
//!
//! Entries are replayed through `add_vertex`/`add_edge` in file order, so
//! duplicate edges keep their first weight.

use std::io::Read;
use std::path::{Path, PathBuf};

use graphlens::{Graph, GraphKind, VertexId, Weight};
use thiserror::Error;
use tracing::debug;

/// Errors while reading an edge-list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed, `-` for standard input
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A line is not a vertex, an edge or a kind.
    #[error("line {line_number}: {reason}")]
    Malformed {
        /// 1-based line number
        line_number: usize,
        /// What is wrong with the line
        reason: String,
    },

    /// A kind line names something other than `directed` or `undirected`.
    #[error("line {line_number}: unknown graph kind '{kind}' (expected 'directed' or 'undirected')")]
    UnknownKind {
        /// 1-based line number
        line_number: usize,
        /// The unrecognized word
        kind: String,
    },
}

/// A parsed entry of the edge-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// A lone vertex
    Vertex(VertexId),
    /// An edge with its weight
    Edge(VertexId, VertexId, Weight),
}

/// Parsed edge-list contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    /// Kind declared in the file, if any
    pub kind: Option<GraphKind>,
    /// Entries in file order
    pub entries: Vec<Entry>,
}

impl EdgeList {
    /// Replay the entries into a graph.
    ///
    /// `kind` overrides the declared kind; with neither, the graph is undirected.
    #[must_use]
    pub fn into_graph(self, kind: Option<GraphKind>) -> Graph {
        let kind = kind.or(self.kind).unwrap_or(GraphKind::Undirected);
        let mut graph = Graph::new(kind);
        for entry in self.entries {
            match entry {
                Entry::Vertex(id) => graph.add_vertex(id),
                Entry::Edge(from, to, weight) => graph.add_edge(from, to, weight),
            }
        }
        graph
    }
}

/// Parse edge-list text.
pub fn parse(text: &str) -> Result<EdgeList, LoadError> {
    let mut list = EdgeList::default();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        if let [word] = fields.as_slice()
            && word.parse::<VertexId>().is_err()
        {
            if !list.entries.is_empty() || list.kind.is_some() {
                return Err(LoadError::Malformed {
                    line_number,
                    reason: format!("kind line '{word}' must come before any vertex or edge"),
                });
            }
            list.kind = Some(parse_kind(word, line_number)?);
            continue;
        }

        let entry = match fields.as_slice() {
            [id] => Entry::Vertex(number(id, "vertex id", line_number)?),
            [from, to] => Entry::Edge(
                number(from, "vertex id", line_number)?,
                number(to, "vertex id", line_number)?,
                0,
            ),
            [from, to, weight] => Entry::Edge(
                number(from, "vertex id", line_number)?,
                number(to, "vertex id", line_number)?,
                number(weight, "weight", line_number)?,
            ),
            _ => {
                return Err(LoadError::Malformed {
                    line_number,
                    reason: format!("expected 1 to 3 fields, found {}", fields.len()),
                });
            }
        };
        list.entries.push(entry);
    }

    Ok(list)
}

fn parse_kind(word: &str, line_number: usize) -> Result<GraphKind, LoadError> {
    match word.to_ascii_lowercase().as_str() {
        "directed" => Ok(GraphKind::Directed),
        "undirected" => Ok(GraphKind::Undirected),
        _ => Err(LoadError::UnknownKind {
            line_number,
            kind: word.to_string(),
        }),
    }
}

fn number(field: &str, what: &str, line_number: usize) -> Result<i64, LoadError> {
    field.parse().map_err(|_| LoadError::Malformed {
        line_number,
        reason: format!("invalid {what} '{field}'"),
    })
}

/// Read and replay an edge-list from `path`, or standard input when `None`.
pub fn load(path: Option<&Path>, kind: Option<GraphKind>) -> Result<Graph, LoadError> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| LoadError::Io {
                    path: PathBuf::from("-"),
                    source,
                })?;
            text
        }
    };

    let graph = parse(&text)?.into_graph(kind);
    debug!(
        kind = %graph.kind(),
        vertex_count = graph.size(),
        edge_count = graph.edge_count(),
        "Graph loaded"
    );
    Ok(graph)
}
