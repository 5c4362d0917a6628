//! 호스트 이름 해석 포트 구현 어댑터.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tokio::net::lookup_host;

use crate::application::ports::{HostResolver, ResolvedHost};

/// 시스템 리졸버를 쓰는 어댑터. IPv4 주소를 우선한다.
#[derive(Debug, Default, Clone, Copy)]
pub struct DnsHostResolver;

#[async_trait]
impl HostResolver for DnsHostResolver {
    async fn lookup(&self, host: &str) -> Result<ResolvedHost> {
        if let Ok(addr) = host.parse::<IpAddr>() {
            return Ok(ResolvedHost {
                addr,
                label: host.to_string(),
            });
        }

        let addrs: Vec<SocketAddr> = lookup_host((host, 0))
            .await
            .with_context(|| format!("failed to resolve {host}"))?
            .collect();
        let addr = addrs
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addrs.first())
            .map(SocketAddr::ip)
            .ok_or_else(|| anyhow!("no addresses for {host}"))?;

        Ok(ResolvedHost {
            addr,
            label: host.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn literal_addresses_skip_dns() {
        let resolved = DnsHostResolver.lookup("192.0.2.10").await.unwrap();
        assert_eq!(resolved.addr, "192.0.2.10".parse::<IpAddr>().unwrap());
        assert_eq!(resolved.label, "192.0.2.10");

        let v6 = DnsHostResolver.lookup("::1").await.unwrap();
        assert!(v6.addr.is_loopback());
    }
}
