//! The host side of link observation: builds [`LinkSnapshot`]s from the machine's own
//! interfaces, routing table and resolver configuration, and turns successive polls
//! into [`LinkEvent`]s for the monitor.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use linkscope_common::error::LinkError;
use linkscope_common::network::address::LinkAddress;
use linkscope_common::network::interface::{self, LinkKind};
use linkscope_common::network::route::{Route, RoutePrefix};
use linkscope_common::network::snapshot::LinkSnapshot;
use linkscope_common::wifi::{NetworkId, WifiInfo};
use pnet::datalink::NetworkInterface;
use tracing::debug;

use crate::monitor::LinkEvent;

pub mod proc;

use proc::KernelRoute;

/// Where link state comes from.
pub trait LinkSource {
    fn interfaces(&self) -> Vec<NetworkInterface>;
    fn snapshot(&self, interface: &NetworkInterface) -> Result<LinkSnapshot, LinkError>;
    /// Connection info of a wireless interface, `None` for everything else.
    fn wifi(&self, interface: &NetworkInterface) -> Result<Option<WifiInfo>, LinkError>;
}

#[derive(Debug, Clone)]
pub struct SystemPaths {
    pub route: PathBuf,
    pub resolv_conf: PathBuf,
    pub wireless: PathBuf,
}

impl Default for SystemPaths {
    fn default() -> Self {
        Self {
            route: PathBuf::from("/proc/net/route"),
            resolv_conf: PathBuf::from("/etc/resolv.conf"),
            wireless: PathBuf::from("/proc/net/wireless"),
        }
    }
}

/// Reads live state through `pnet` and the files in [`SystemPaths`].
///
/// Files that do not exist (e.g. `/proc` outside Linux) contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct SystemLinkSource {
    paths: SystemPaths,
}

impl SystemLinkSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(paths: SystemPaths) -> Self {
        Self { paths }
    }
}

impl LinkSource for SystemLinkSource {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        pnet::datalink::interfaces()
    }

    fn snapshot(&self, interface: &NetworkInterface) -> Result<LinkSnapshot, LinkError> {
        let routes = read_optional(&self.paths.route)?
            .map(|contents| proc::parse_proc_route(&contents))
            .unwrap_or_default();
        let dns = read_optional(&self.paths.resolv_conf)?
            .map(|contents| proc::parse_resolv_conf(&contents))
            .unwrap_or_default();
        Ok(build_snapshot(interface, &routes, &dns))
    }

    fn wifi(&self, interface: &NetworkInterface) -> Result<Option<WifiInfo>, LinkError> {
        if LinkKind::of(interface) != LinkKind::Wireless {
            return Ok(None);
        }
        let rssi = read_optional(&self.paths.wireless)?
            .and_then(|contents| proc::parse_proc_wireless(&contents, &interface.name));
        Ok(Some(WifiInfo {
            ssid: None,
            rssi,
            link_speed_mbps: -1,
            frequency_mhz: None,
            mac_address: interface.mac.map(|mac| mac.to_string()),
            ephemeral: false,
        }))
    }
}

/// Assembles the snapshot of `interface`: its addresses, one connected route per address
/// followed by the kernel's gateway routes for the interface, and the resolver's servers.
pub fn build_snapshot(
    interface: &NetworkInterface,
    kernel_routes: &[KernelRoute],
    dns_servers: &[IpAddr],
) -> LinkSnapshot {
    let connected = interface.ips.iter().map(|net| Route::connected(*net));
    let gateways = kernel_routes
        .iter()
        .filter(|route| route.interface == interface.name)
        .filter_map(|route| {
            let gateway = route.gateway?;
            let destination = RoutePrefix::new(route.destination, route.prefix_len);
            Some(Route::via(destination, IpAddr::V4(gateway)))
        });

    LinkSnapshot {
        interface: Some(interface.name.clone()),
        addresses: interface.ips.iter().map(|net| LinkAddress::from(net.ip())).collect(),
        routes: connected.chain(gateways).collect(),
        dns_servers: dns_servers.iter().copied().map(LinkAddress::from).collect(),
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, LinkError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("{} not present", path.display());
            Ok(None)
        }
        Err(source) => Err(LinkError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Follows one interface across polls and reports what changed as [`LinkEvent`]s.
///
/// The first poll that finds the interface yields `Attached`. Later polls yield
/// `LinkChanged` (the monitor drops it when nothing changed) and `StateChanged` only
/// when the connection info differs from the previous poll. An interface that vanishes
/// or comes back with another index yields `Lost`.
pub struct LinkPoller<S> {
    source: S,
    interface: String,
    network: Option<NetworkId>,
    wifi: Option<WifiInfo>,
}

impl<S: LinkSource> LinkPoller<S> {
    pub fn new(source: S, interface: impl Into<String>) -> Self {
        Self {
            source,
            interface: interface.into(),
            network: None,
            wifi: None,
        }
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn poll(&mut self) -> Result<Vec<LinkEvent>, LinkError> {
        let found = interface::select_interface(Some(&self.interface), self.source.interfaces());

        let Some(current) = found else {
            let lost = self.network.take().map(|network| LinkEvent::Lost { network });
            return Ok(lost.into_iter().collect());
        };

        let id = NetworkId(current.index);
        let snapshot = self.source.snapshot(&current)?;
        let wifi = self.source.wifi(&current)?;

        match self.network {
            Some(network) if network == id => {
                let mut events = vec![LinkEvent::LinkChanged { network, snapshot }];
                if wifi != self.wifi {
                    self.wifi = wifi.clone();
                    events.push(LinkEvent::StateChanged { wifi });
                }
                Ok(events)
            }
            Some(network) => {
                self.network = None;
                Ok(vec![LinkEvent::Lost { network }])
            }
            None => {
                self.network = Some(id);
                self.wifi = wifi.clone();
                Ok(vec![LinkEvent::Attached {
                    network: id,
                    snapshot: Some(snapshot),
                    capabilities: None,
                    wifi,
                }])
            }
        }
    }
}
