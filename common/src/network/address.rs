use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::LinkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    /// Number of bytes an address of this family is encoded with.
    pub const fn octet_len(self) -> usize {
        match self {
            AddressFamily::Ipv4 => 4,
            AddressFamily::Ipv6 => 16,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => f.write_str("IPv4"),
            AddressFamily::Ipv6 => f.write_str("IPv6"),
        }
    }
}

/// An address as delivered by the network-observation layer: a family tag and raw bytes.
///
/// The pair is not checked on construction. [`LinkAddress::to_ip`] is where a tag that
/// disagrees with the byte length surfaces as [`LinkError::InvalidAddressFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkAddress {
    family: AddressFamily,
    octets: Vec<u8>,
}

impl LinkAddress {
    pub fn new(family: AddressFamily, octets: impl Into<Vec<u8>>) -> Self {
        Self {
            family,
            octets: octets.into(),
        }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn octets(&self) -> &[u8] {
        &self.octets
    }

    pub fn to_ip(&self) -> Result<IpAddr, LinkError> {
        let invalid = || LinkError::InvalidAddressFormat {
            family: self.family,
            len: self.octets.len(),
        };

        match self.family {
            AddressFamily::Ipv4 => {
                let octets: [u8; 4] = self.octets.as_slice().try_into().map_err(|_| invalid())?;
                Ok(IpAddr::V4(Ipv4Addr::from(octets)))
            }
            AddressFamily::Ipv6 => {
                let octets: [u8; 16] = self.octets.as_slice().try_into().map_err(|_| invalid())?;
                Ok(IpAddr::V6(Ipv6Addr::from(octets)))
            }
        }
    }
}

impl From<Ipv4Addr> for LinkAddress {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(AddressFamily::Ipv4, addr.octets())
    }
}

impl From<Ipv6Addr> for LinkAddress {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(AddressFamily::Ipv6, addr.octets())
    }
}

impl From<IpAddr> for LinkAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
