// Library surface shared by the binary and the headless/integration tests.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod keymap;
pub mod lesson;
pub mod logging;
pub mod navigation;
pub mod runtime;
pub mod shuffle;
pub mod study;
pub mod ui;
pub mod words;

pub use app::App;
