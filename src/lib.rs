//! Memory-FS MCP Servers
//!
//! Three MCP servers sharing one codebase:
//!
//! - **Memory**: a knowledge graph of entities, relations, and
//!   observations, persisted to a single JSON file
//! - **Filesystem**: sandboxed file operations restricted to an
//!   allowed-directory set
//! - **Composite**: both tool sets on one server, where filesystem
//!   activity is recorded into the graph and queryable through bridge
//!   tools
//!
//! All three speak line-delimited JSON-RPC 2.0 over stdio.
//!
//! # Modules
//!
//! - `types`: Core data structures (Entity, Relation, KnowledgeGraph)
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `graph`: Knowledge graph store with write-through persistence
//! - `sandbox`: Allowed-directory validation and sidecar persistence
//! - `fs`: Sandboxed filesystem operations
//! - `bridge`: Filesystem-to-graph event recording and queries
//! - `tools`: MCP tool implementations
//! - `server`: MCP server implementation
//! - `utils`: Utility functions (timestamps, atomic writes)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use memory_fs::{GraphStore, McpServer, ServerInfo};
//! use memory_fs::tools::register_memory_tools;
//!
//! fn main() {
//!     let store = Arc::new(GraphStore::open("memory.json"));
//!     let mut server = McpServer::with_info(ServerInfo::new("memory", "1.0.0"));
//!     register_memory_tools(&mut server, store);
//!     server.run().unwrap();
//! }
//! ```

pub mod bridge;
pub mod error;
pub mod fs;
pub mod graph;
pub mod protocol;
pub mod sandbox;
pub mod server;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use bridge::{FsEvent, GraphNotifier, Notifier, NullNotifier};
pub use error::{ToolError, ToolResult};
pub use fs::FsOps;
pub use graph::GraphStore;
pub use protocol::{McpTool, ServerInfo, Tool};
pub use sandbox::PathSandbox;
pub use server::McpServer;
pub use types::{Entity, KnowledgeGraph, Observation, ObservationDeletion, Relation};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
