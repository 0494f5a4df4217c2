//! WebGPU rendering module
//!
//! Every frame is a single flat-colored triangle list in logical 800x600
//! pixels: shapes, bitmap text and sprite pixels alike.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{Letterbox, RenderInitError, RenderState};
pub use scene::{SceneOptions, build};
pub use vertex::Vertex;
