//! HTTP server command
//!
//! Runs the corkboard API on a fresh, empty in-memory store.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use corkboard_server::http::{run_server, ServerConfig};
use corkboard_server::BoardStore;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,
}

impl ServeArgs {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind_addr(),
    };

    tracing::info!("Starting corkboard server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(BoardStore::new(), config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        // PORT may be set in the environment running the tests
        if std::env::var_os("PORT").is_none() {
            assert_eq!(args.port, 3000);
        }
        if std::env::var_os("HOST").is_none() {
            assert!(args.host.is_unspecified());
        }
    }

    #[test]
    fn explicit_port_and_host() {
        let args = ServeArgs::try_parse_from(["serve", "--port", "8080", "--host", "127.0.0.1"]).unwrap();
        assert_eq!(args.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[test]
    fn rejects_bad_port() {
        assert!(ServeArgs::try_parse_from(["serve", "--port", "not-a-port"]).is_err());
    }
}
