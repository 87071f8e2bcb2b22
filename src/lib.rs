// Library surface for the binary, headless/integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod controller;
pub mod logging;
pub mod presenter;
pub mod runtime;
pub mod session;
pub mod share;
pub mod source;
pub mod timer;
pub mod ui;
pub mod validate;
pub mod view;

pub use app::App;
pub use controller::GameController;
