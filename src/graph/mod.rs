pub mod directed;
pub mod generators;
pub mod traits;

pub use directed::DirectedGraph;
pub use traits::Graph;
