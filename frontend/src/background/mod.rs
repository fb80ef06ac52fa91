//! Procedural canvas background: drifting gradient blobs under a vignette
//! and a cached grain overlay.

pub mod animator;
pub mod blob;
pub mod canvas;
pub mod color;
pub mod frame;
pub mod noise;
pub mod render_loop;

pub use animator::Animator;
pub use canvas::CanvasSurface;
pub use frame::Viewport;
pub use render_loop::{RenderLoop, WindowScheduler};
