//! Runtime configuration
//!
//! Read once at startup from the environment (and a `.env` file, if the binary
//! loads one) and passed by value into whatever needs it.
//!
//! | Variable              | Required | Default        |
//! |-----------------------|----------|----------------|
//! | `DEEPLX_ENDPOINT`     | yes      |                |
//! | `DEEPLX_NAME`         | no       | auth disabled  |
//! | `HCFY_LISTEN_ADDR`    | no       | `0.0.0.0:9911` |
//! | `HCFY_ROUTE`          | no       | `/`            |
//! | `DEEPLX_TIMEOUT_SECS` | no       | `30` (`0` disables) |

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{HcfyError, HcfyResult};

pub const ENDPOINT_VAR: &str = "DEEPLX_ENDPOINT";
pub const NAME_VAR: &str = "DEEPLX_NAME";
pub const LISTEN_ADDR_VAR: &str = "HCFY_LISTEN_ADDR";
pub const ROUTE_VAR: &str = "HCFY_ROUTE";
pub const TIMEOUT_VAR: &str = "DEEPLX_TIMEOUT_SECS";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9911";
pub const DEFAULT_ROUTE: &str = "/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// DeepLX translate URL
    pub endpoint: String,
    /// Shared token clients must send as `name`; `None` disables the check
    pub name: Option<String>,
    pub listen_addr: SocketAddr,
    /// Path the relay is mounted on
    pub route: String,
    /// Deadline for one backend call
    pub timeout: Option<Duration>,
}

impl Config {
    /// Build from process environment variables
    pub fn from_env() -> HcfyResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> HcfyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let endpoint = get(ENDPOINT_VAR)
            .ok_or_else(|| HcfyError::Config(format!("{ENDPOINT_VAR} is not set")))?;

        let listen_addr = get(LISTEN_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| HcfyError::Config(format!("{LISTEN_ADDR_VAR} is not a socket address: {e}")))?;

        let route = get(ROUTE_VAR).unwrap_or_else(|| DEFAULT_ROUTE.to_string());
        validate_route(&route)?;

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                HcfyError::Config(format!("{TIMEOUT_VAR} must be a number of seconds: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        Ok(Self {
            endpoint,
            name: get(NAME_VAR),
            listen_addr,
            route,
            timeout,
        })
    }

    pub fn auth_enabled(&self) -> bool {
        self.name.is_some()
    }
}

/// Accept only literal paths
///
/// The route is mounted verbatim on the router, where `{`, `}`, `*` and `:`
/// would be read as capture syntax.
fn validate_route(route: &str) -> HcfyResult<()> {
    if !route.starts_with('/') {
        return Err(HcfyError::Config(format!(
            "{ROUTE_VAR} must start with '/', got {route:?}"
        )));
    }
    if let Some(bad) = route
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.' | '~')))
    {
        return Err(HcfyError::Config(format!(
            "{ROUTE_VAR} must be a literal path, found {bad:?} in {route:?}"
        )));
    }
    Ok(())
}
