//! Tools domain: tool definitions, registry and router.

pub mod definitions;
pub mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;
