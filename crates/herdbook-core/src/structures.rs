/// Node and Edge structs for the pedigree graph data model.
///
/// Key design decisions:
/// - Presentation attributes (shape, colour) are carried opaquely in
///   [`NodeStyle`] and [`Edge::color`]; no graph algorithm reads them.
/// - Absent presentation attributes are skipped on serialization so a plain
///   node is `{"id": .., "label": ..}` and a plain edge is
///   `{"id": .., "from": .., "to": ..}`.
/// - Edges point from the node nearer the traversal root to the node further
///   away, i.e. from an individual to its parent.
mod edge;
mod node;


pub use edge::Edge;
pub use node::{Node, NodeStyle};
