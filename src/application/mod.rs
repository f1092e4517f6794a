//! Application layer - use cases that coordinate the release feed, the link
//! derivation and the page renderer.

mod render;

pub use render::RenderAction;
