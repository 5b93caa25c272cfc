//! JSONL ingestion: one node-or-edge record per logical JSON value, streamed off an
//! `impl BufRead`. Grounded in `original_source/graph/json.go`'s
//! `NewGraphFromJSONLReader`, which disambiguates a node vs. an edge record by field
//! presence (`"id"` vs. `"from"`/`"to"`) rather than a tagged union.
//!
//! Unlike the Go original (one `bufio.Scanner` line == one record, explicitly marked
//! TODO for multi-line objects), we use `serde_json::Deserializer::from_reader(..)
//! .into_iter::<serde_json::Value>()`, whose whitespace-tolerant streaming parser already
//! accepts a JSON value spanning multiple lines — so the multi-line case `spec.md` §6
//! calls out just works without a hand-rolled brace counter.

use crate::graph::Graph;
use crate::value::{Attrs, Value};
use serde_json::Value as Json;
use std::io::BufRead;

/// A record that was read but could not be interpreted as a node or an edge.
#[derive(Debug, Clone)]
pub struct ParseWarning {
    pub line: usize,
    pub reason: String,
}

/// Parses a full JSONL stream into a [`Graph`], collecting warnings for unrecognized
/// records instead of failing the whole ingestion on one bad line.
pub fn parse<R: BufRead>(reader: R) -> (Graph, Vec<ParseWarning>) {
    let mut g = Graph::new();
    let mut warnings = Vec::new();

    let stream = serde_json::Deserializer::from_reader(reader).into_iter::<Json>();
    for (line, parsed) in stream.enumerate() {
        let line = line + 1;
        let value = match parsed {
            Ok(v) => v,
            Err(e) => {
                warnings.push(ParseWarning {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let Json::Object(map) = value else {
            warnings.push(ParseWarning {
                line,
                reason: "record is not a JSON object".to_string(),
            });
            continue;
        };

        let id = map.get("id").and_then(Json::as_str);
        let from = map.get("from").and_then(Json::as_str);
        let to = map.get("to").and_then(Json::as_str);

        match (id, from, to) {
            (Some(id), _, _) => {
                let attrs = attrs_excluding(&map, &["id"]);
                g.set_node_attrs(id, attrs);
            }
            (None, Some(from), Some(to)) => {
                let attrs = attrs_excluding(&map, &["from", "to"]);
                g.add_edge(from, to, attrs);
            }
            _ => warnings.push(ParseWarning {
                line,
                reason: "record is neither a node (\"id\") nor an edge (\"from\"/\"to\")"
                    .to_string(),
            }),
        }
    }

    (g, warnings)
}

fn attrs_excluding(map: &serde_json::Map<String, Json>, skip: &[&str]) -> Attrs {
    map.iter()
        .filter(|(k, _)| !skip.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), Value::from(v)))
        .collect()
}
