//! Host Configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "dist";

/// Where to listen and what to serve
#[derive(Clone, Debug)]
pub struct HostConfig {
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Trunk output directory holding `index.html` (`STATIC_DIR`)
    pub static_dir: PathBuf,
}

impl HostConfig {
    /// Read `BIND_ADDR` and `STATIC_DIR`, falling back to the defaults
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("STATIC_DIR").ok().as_deref(),
        )
    }

    pub fn from_values(bind_addr: Option<&str>, static_dir: Option<&str>) -> anyhow::Result<Self> {
        let bind_addr = bind_addr.unwrap_or(DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        Ok(Self {
            bind_addr,
            static_dir: PathBuf::from(static_dir.unwrap_or(DEFAULT_STATIC_DIR)),
        })
    }

    /// Document served for every path that is not a file on disk
    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HostConfig::from_values(None, None).unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.index_file(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_invalid_bind_addr() {
        assert!(HostConfig::from_values(Some("localhost"), None).is_err());
    }
}
