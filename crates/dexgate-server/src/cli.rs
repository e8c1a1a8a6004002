//! Command-line and environment settings for the server.
//!
//! Every option can be given as a flag or through its environment variable.
//!
//! | Option | Env | Default |
//! |--------|-----|---------|
//! | `--host` | `DEXGATE_HOST` | `0.0.0.0` |
//! | `--port` | `PORT` | `4000` |
//! | `--upstream-url` | `POKEAPI_BASE_URL` | `https://pokeapi.co/api/v2` |
//! | `--upstream-resource` | `DEXGATE_UPSTREAM_RESOURCE` | `pokemon` |
//! | `--upstream-timeout-ms` | `DEXGATE_UPSTREAM_TIMEOUT_MS` | `10000` |
//! | `--log-level` | `DEXGATE_LOG_LEVEL` | `info` |
//! | `--log-json` | `DEXGATE_LOG_JSON` | `false` |
//! | `--cors-origin` | `CORS_ORIGIN` | `*` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;
use dexgate_core::config::{DEFAULT_BASE_URL, DEFAULT_RESOURCE};
use dexgate_core::http_client::DEFAULT_TIMEOUT_MS;
use dexgate_core::UpstreamConfig;

/// Creature catalogue gateway with per-caller favorites.
#[derive(Debug, Parser)]
#[command(
    name = "dexgate-server",
    author,
    version,
    about = "Creature catalogue gateway with per-caller favorites"
)]
pub struct Cli {
    /// Interface to bind.
    #[arg(long, env = "DEXGATE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Base URL of the upstream REST service.
    #[arg(long = "upstream-url", env = "POKEAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub upstream_url: String,

    /// Collection segment on the upstream (`{base}/{resource}/{id}`).
    #[arg(
        long = "upstream-resource",
        env = "DEXGATE_UPSTREAM_RESOURCE",
        default_value = DEFAULT_RESOURCE
    )]
    pub upstream_resource: String,

    #[arg(
        long = "upstream-timeout-ms",
        env = "DEXGATE_UPSTREAM_TIMEOUT_MS",
        default_value_t = DEFAULT_TIMEOUT_MS
    )]
    pub upstream_timeout_ms: u64,

    /// Fallback filter when `RUST_LOG` is not set.
    #[arg(long = "log-level", env = "DEXGATE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long = "log-json", env = "DEXGATE_LOG_JSON")]
    pub log_json: bool,

    /// Allowed CORS origin, `*` for any.
    #[arg(long = "cors-origin", env = "CORS_ORIGIN", default_value = "*")]
    pub cors_origin: String,
}

impl Cli {
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig::default()
            .with_base_url(self.upstream_url.clone())
            .with_resource(self.upstream_resource.clone())
            .with_timeout_ms(self.upstream_timeout_ms)
    }
}
