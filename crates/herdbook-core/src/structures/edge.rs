use serde::{Deserialize, Serialize};

/// A direct child → parent relationship in a pedigree graph.
///
/// `from` is the node nearer the traversal root and `to` is its parent. The
/// connecting-edge reconstruction depends on this orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier within the graph, conventionally `"<from>-<to>"`.
    pub id: String,

    /// ID of the node nearer the root.
    pub from: String,

    /// ID of the node further from the root.
    pub to: String,

    /// Stroke colour hint for the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Edge {
    /// Creates the edge `from → to` with the conventional `"<from>-<to>"` id.
    ///
    /// Ids containing `-` can make two pairs spell the same id; graph
    /// builders rename the later edge to `"<id>#2"` and so on.
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        let to = to.into();
        Self {
            id: format!("{from}-{to}"),
            from,
            to,
            color: None,
        }
    }
}
