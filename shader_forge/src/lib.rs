/*!
# Shader Forge

Core types and batch engine for cross-compiling HLSL shaders with external
compiler backends.

This crate decides *what* to run: which stages a shader has, which backend
handles a target format, how each backend wants its arguments, and where each
artifact goes. Actually spawning the backend is delegated to an [`Executor`]
implementation (see the `shader_forge_process` crate), so every plan can be
built and inspected without touching a process.

## Architecture

- **Stage**: StageSet resolution from a declared shader kind
- **Target**: target formats, backend registry and argument conventions
- **Source**: discovery of shader source files
- **Artifact**: output file naming
- **Batch**: planning, execution and aggregated results

[`Executor`]: forge::Executor
*/

// Internal modules
mod error;
mod context;
pub mod log;
pub mod stage;
pub mod target;
pub mod source;
pub mod artifact;
pub mod batch;

#[cfg(test)]
#[path = "../tests/common/scratch_dir.rs"]
mod scratch_dir;

// Main forge namespace module
pub mod forge {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::context::Forge;

    // Batch driver and executor seam
    pub use crate::batch::{
        BatchDriver, BatchConfig, BatchResult, Executor, Invocation, InvocationResult,
        SPAWN_FAILURE_EXIT_CODE,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Stage sub-module
    pub mod stage {
        pub use crate::stage::*;
    }

    // Target sub-module
    pub mod target {
        pub use crate::target::*;
    }

    // Source sub-module
    pub mod source {
        pub use crate::source::*;
    }

    // Artifact naming sub-module
    pub mod artifact {
        pub use crate::artifact::*;
    }

    // Batch sub-module
    pub mod batch {
        pub use crate::batch::*;
    }
}
