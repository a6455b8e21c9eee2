use std::net::IpAddr;

use pnet::ipnetwork::IpNetwork;

use crate::network::address::LinkAddress;

/// Destination of a route: an address and the number of leading bits that matter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePrefix {
    pub address: LinkAddress,
    pub prefix_len: u8,
}

impl RoutePrefix {
    pub fn new(address: impl Into<LinkAddress>, prefix_len: u8) -> Self {
        Self {
            address: address.into(),
            prefix_len,
        }
    }
}

impl From<IpNetwork> for RoutePrefix {
    fn from(net: IpNetwork) -> Self {
        Self::new(net.network(), net.prefix())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Route {
    pub destination: Option<RoutePrefix>,
    pub gateway: Option<LinkAddress>,
}

impl Route {
    /// A route for the subnet an interface address lives in: destination only, no gateway.
    pub fn connected(net: IpNetwork) -> Self {
        Self {
            destination: Some(net.into()),
            gateway: None,
        }
    }

    /// A route that forwards everything matching `destination` through `gateway`.
    pub fn via(destination: RoutePrefix, gateway: IpAddr) -> Self {
        Self {
            destination: Some(destination),
            gateway: Some(gateway.into()),
        }
    }

    pub fn with_destination(mut self, destination: RoutePrefix) -> Self {
        self.destination = Some(destination);
        self
    }

    pub fn with_gateway(mut self, gateway: impl Into<LinkAddress>) -> Self {
        self.gateway = Some(gateway.into());
        self
    }
}
