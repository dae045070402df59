//! Target backend module
//!
//! Target formats, the backend executables that produce them and the
//! argument conventions each backend expects.

mod target_format;
mod shader_model;
mod backend;
mod backend_config;
mod backend_registry;

pub use target_format::TargetFormat;
pub use shader_model::ShaderModel;
pub use backend::{Backend, ArgumentConvention};
pub use backend_config::BackendConfig;
pub use backend_registry::BackendRegistry;
