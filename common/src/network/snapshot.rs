//! # Link Snapshot
//!
//! An immutable capture of a link's IP layer at one point in time, built fresh by the
//! observation layer on every attach or change. Equality is field-wise, which is what
//! the monitor relies on to skip no-op updates.

use crate::network::address::LinkAddress;
use crate::network::route::Route;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSnapshot {
    /// Name of the interface the link belongs to, when the source knows it.
    pub interface: Option<String>,
    pub addresses: Vec<LinkAddress>,
    pub routes: Vec<Route>,
    pub dns_servers: Vec<LinkAddress>,
}

impl LinkSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interface(mut self, name: impl Into<String>) -> Self {
        self.interface = Some(name.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<LinkAddress>) -> Self {
        self.addresses.push(address.into());
        self
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    pub fn with_dns_server(mut self, server: impl Into<LinkAddress>) -> Self {
        self.dns_servers.push(server.into());
        self
    }
}
