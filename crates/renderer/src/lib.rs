//! `renderer` crate — selects `.dot` files in a directory and renders each one
//! to compressed SVG through a [`runner::SubprocessRunner`].

pub mod models;
pub mod error;
pub mod naming;
pub mod command;
pub mod batch;

pub use models::{BatchReport, Conversion, Outcome};
pub use error::RenderError;
pub use naming::{is_candidate, output_name, output_os_name, ReplacePolicy};
pub use command::RenderCommand;
pub use batch::{BatchRenderer, RenderConfig};
