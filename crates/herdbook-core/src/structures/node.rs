use serde::{Deserialize, Serialize};

/// Opaque presentation attributes for a [`Node`].
///
/// The renderer interprets these; the engine only ever sets `color` when
/// common ancestors are highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Shape hint for the renderer (e.g. `"box"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,

    /// Fill colour hint for the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl NodeStyle {
    /// Returns `true` when no presentation attribute is set.
    pub fn is_plain(&self) -> bool {
        self.shape.is_none() && self.color.is_none()
    }
}

/// One genealogical entity in a pedigree graph.
///
/// Either a registered individual (the `id` is its registry number) or a
/// synthetic placeholder for an ancestor that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the graph.
    pub id: String,

    /// Display text, typically the name and registry number.
    pub label: String,

    /// Presentation attributes, flattened into the node's JSON object.
    #[serde(flatten)]
    pub style: NodeStyle,
}

impl Node {
    /// Creates an unstyled node.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            style: NodeStyle::default(),
        }
    }

    /// Returns this node with its shape hint set.
    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.style.shape = Some(shape.into());
        self
    }
}
