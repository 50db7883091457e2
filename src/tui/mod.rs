pub mod app;
pub mod draft;
pub mod help;
pub mod input;
pub mod keymap;
pub mod render;
pub mod theme;

pub use app::run;
