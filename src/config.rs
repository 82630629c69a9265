//! Command-line and environment configuration.
//!
//! Flags take precedence over environment variables, which take precedence
//! over the defaults below.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::store::{BoardStore, MemoryStore, RedbStore, StoreError};

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
pub const DEFAULT_DB_PATH: &str = "timerboard.redb";

/// Timer-board HTTP service.
#[derive(Debug, Clone, Parser)]
#[command(name = "timerboard", version, about)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "TIMERBOARD_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Path of the redb database file holding boards
    #[arg(long, env = "TIMERBOARD_DB", default_value = DEFAULT_DB_PATH)]
    pub db_path: PathBuf,

    /// Keep boards in memory only; everything is lost on exit
    #[arg(long, env = "TIMERBOARD_MEMORY")]
    pub memory: bool,
}

/// Where boards are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Redb(PathBuf),
}

impl StorageBackend {
    /// Open the configured store.
    pub fn open(&self) -> Result<Arc<dyn BoardStore>, StoreError> {
        let store: Arc<dyn BoardStore> = match self {
            Self::Memory => Arc::new(MemoryStore::new()),
            Self::Redb(path) => Arc::new(RedbStore::open(path)?),
        };
        Ok(store)
    }
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub storage: StorageBackend,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        let storage = if args.memory {
            StorageBackend::Memory
        } else {
            StorageBackend::Redb(args.db_path)
        };
        Self {
            bind: args.bind,
            storage,
        }
    }
}

/// Initialize tracing subscriber with environment-based filtering.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
