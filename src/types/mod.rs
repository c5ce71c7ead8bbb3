// Records passed between the fetch layer and the renderer.
// Neither side depends on the other; both import from this module.

pub mod streak;

pub use streak::*;
