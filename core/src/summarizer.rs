//! Turns a [`LinkSnapshot`] into the [`LinkSummary`] the presentation layer renders.
//!
//! The scan policies differ per field: the IPv4 address is the **last** IPv4 entry,
//! while the subnet mask and the gateway come from the **first** matching route.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use linkscope_common::error::LinkError;
use linkscope_common::network::address::LinkAddress;
use linkscope_common::network::ip;
use linkscope_common::network::route::Route;
use linkscope_common::network::snapshot::LinkSnapshot;
use linkscope_common::network::summary::LinkSummary;
use tracing::trace;

pub const DNS_SEPARATOR: &str = ",";

struct ResolvedRoute {
    destination: Option<(IpAddr, u8)>,
    gateway: Option<IpAddr>,
}

/// Summarizes the IP layer of a link.
///
/// Fails with [`LinkError::InvalidAddressFormat`] if any address of the snapshot carries
/// a family tag that disagrees with its byte length. Missing data is never an error.
pub fn summarize(snapshot: &LinkSnapshot) -> Result<LinkSummary, LinkError> {
    let addresses: Vec<IpAddr> = resolve_all(&snapshot.addresses)?;
    let routes: Vec<ResolvedRoute> = snapshot
        .routes
        .iter()
        .map(resolve_route)
        .collect::<Result<_, _>>()?;
    let dns_servers: Vec<IpAddr> = resolve_all(&snapshot.dns_servers)?;

    let summary = LinkSummary {
        ipv4_address: last_ipv4(&addresses),
        ipv6_addresses: ipv6_addresses(&addresses),
        subnet_mask: subnet_mask(&routes),
        gateway: gateway(&routes),
        dns_text: dns_text(&dns_servers),
    };

    trace!(
        interface = snapshot.interface.as_deref().unwrap_or("-"),
        ?summary,
        "summarized link"
    );
    Ok(summary)
}

fn resolve_all(addresses: &[LinkAddress]) -> Result<Vec<IpAddr>, LinkError> {
    addresses.iter().map(|addr| addr.to_ip()).collect()
}

fn resolve_route(route: &Route) -> Result<ResolvedRoute, LinkError> {
    let destination = match &route.destination {
        Some(prefix) => Some((prefix.address.to_ip()?, prefix.prefix_len)),
        None => None,
    };
    let gateway = route.gateway.as_ref().map(|gw| gw.to_ip()).transpose()?;
    Ok(ResolvedRoute {
        destination,
        gateway,
    })
}

fn last_ipv4(addresses: &[IpAddr]) -> Option<Ipv4Addr> {
    addresses.iter().rev().find_map(|addr| match addr {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(_) => None,
    })
}

fn ipv6_addresses(addresses: &[IpAddr]) -> Vec<Ipv6Addr> {
    addresses
        .iter()
        .filter_map(|addr| match addr {
            IpAddr::V6(v6) => Some(*v6),
            IpAddr::V4(_) => None,
        })
        .collect()
}

fn subnet_mask(routes: &[ResolvedRoute]) -> Option<Ipv4Addr> {
    // A prefix length above 32 stops the scan with no mask rather than failing the summary.
    let prefix_len = routes.iter().find_map(|route| match route.destination {
        Some((IpAddr::V4(_), len)) if len > 0 => Some(len),
        _ => None,
    })?;
    ip::prefix_to_subnet_mask(prefix_len)
}

fn gateway(routes: &[ResolvedRoute]) -> Option<Ipv4Addr> {
    routes.iter().find_map(|route| match route.gateway {
        Some(IpAddr::V4(gw)) => Some(gw),
        _ => None,
    })
}

fn dns_text(servers: &[IpAddr]) -> String {
    servers
        .iter()
        .filter(|server| server.is_ipv4())
        .map(|server| server.to_string())
        .collect::<Vec<String>>()
        .join(DNS_SEPARATOR)
}
