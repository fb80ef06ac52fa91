pub mod data_ticker;
pub mod fluid_background;
pub mod hero;
pub mod layout;
pub mod spline_scene;
