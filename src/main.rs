//! Memory-FS MCP Server - Binary Entry Point
//!
//! Runs one of three servers over stdio: the knowledge-graph memory
//! server, the sandboxed filesystem server, or the composite server
//! that records filesystem activity into the graph. Logging goes to
//! stderr; stdout carries the protocol.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use memory_fs::bridge::{GraphNotifier, Notifier, NullNotifier};
use memory_fs::error::ToolResult;
use memory_fs::fs::FsOps;
use memory_fs::graph::GraphStore;
use memory_fs::protocol::ServerInfo;
use memory_fs::sandbox::PathSandbox;
use memory_fs::server::McpServer;
use memory_fs::tools::{register_all_tools, register_filesystem_tools, register_memory_tools};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Knowledge-graph tools only
    Memory,
    /// Sandboxed filesystem tools only
    Filesystem,
    /// Both tool sets, with filesystem activity recorded in the graph
    Composite,
}

#[derive(Parser, Debug)]
#[command(name = "memory-fs-server", version, about = "MCP servers for knowledge-graph memory and sandboxed filesystem access")]
struct Cli {
    /// Which server to run
    #[arg(long, value_enum, default_value_t = Mode::Composite)]
    mode: Mode,

    /// Knowledge graph JSON file
    #[arg(long, env = "MEMORY_FS_FILE", default_value = "memory.json")]
    memory_file: PathBuf,

    /// Allowed-directory sidecar file
    #[arg(long, env = "MEMORY_FS_CONFIG", default_value = "allowed_directories.json")]
    config_file: PathBuf,

    /// Directories the filesystem tools may access
    #[arg(value_name = "DIR")]
    allowed_directories: Vec<PathBuf>,
}

fn main() -> ToolResult<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut server = match cli.mode {
        Mode::Memory => {
            let store = Arc::new(GraphStore::open(&cli.memory_file));
            tracing::info!(
                file = %store.file_path().display(),
                "starting memory server"
            );
            let mut server = McpServer::with_info(ServerInfo::new("memory", env!("CARGO_PKG_VERSION")));
            register_memory_tools(&mut server, store);
            server
        }
        Mode::Filesystem => {
            let sandbox = Arc::new(PathSandbox::new(
                cli.allowed_directories,
                cli.config_file,
            )?);
            tracing::info!(directories = sandbox.count(), "starting filesystem server");
            let notifier: Arc<dyn Notifier> = Arc::new(NullNotifier);
            let ops = Arc::new(FsOps::new(sandbox, notifier));
            let mut server =
                McpServer::with_info(ServerInfo::new("filesystem", env!("CARGO_PKG_VERSION")));
            register_filesystem_tools(&mut server, ops);
            server
        }
        Mode::Composite => {
            let store = Arc::new(GraphStore::open(&cli.memory_file));
            let sandbox = Arc::new(PathSandbox::new(
                cli.allowed_directories,
                cli.config_file,
            )?);
            tracing::info!(
                file = %store.file_path().display(),
                directories = sandbox.count(),
                "starting composite server"
            );
            let notifier: Arc<dyn Notifier> = Arc::new(GraphNotifier::new(store.clone()));
            let ops = Arc::new(FsOps::new(sandbox, notifier));
            let mut server =
                McpServer::with_info(ServerInfo::new("memory-fs", env!("CARGO_PKG_VERSION")));
            register_all_tools(&mut server, store, ops);
            server
        }
    };

    tracing::info!(tools = server.tool_count(), "server ready");
    server.run()
}
