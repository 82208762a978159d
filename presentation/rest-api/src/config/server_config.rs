use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8080";

/// Listener address of the cart API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IPv4 or IPv6 address to listen on (default: "127.0.0.1")
    /// - SERVICE_PORT: TCP port (default: "8080")
    pub fn from_env() -> anyhow::Result<Self> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
        let port = env::var("SERVICE_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        Self::parse(&ip, &port)
    }

    fn parse(ip: &str, port: &str) -> anyhow::Result<Self> {
        let ip: IpAddr = ip
            .trim()
            .parse()
            .with_context(|| format!("SERVICE_IP is not an IP address: '{ip}'"))?;
        let port: u16 = port
            .trim()
            .parse()
            .with_context(|| format!("SERVICE_PORT is not a TCP port: '{port}'"))?;
        Ok(Self {
            addr: SocketAddr::new(ip, port),
        })
    }

    /// Address in `host:port` form, with IPv6 hosts bracketed
    pub fn bind_address(&self) -> String {
        self.addr.to_string()
    }
}
