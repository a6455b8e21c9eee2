use std::net::{Ipv4Addr, Ipv6Addr};

use pnet::ipnetwork::Ipv4Network;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Ipv6Scope {
    GlobalUnicast,
    UniqueLocal,
    LinkLocal,
    Loopback,
    #[default]
    Other,
}

impl Ipv6Scope {
    pub fn label(self) -> &'static str {
        match self {
            Ipv6Scope::GlobalUnicast => "GUA",
            Ipv6Scope::UniqueLocal => "ULA",
            Ipv6Scope::LinkLocal => "LLA",
            Ipv6Scope::Loopback => "LO",
            Ipv6Scope::Other => "IPv6",
        }
    }
}

pub fn ipv6_scope(ipv6_addr: &Ipv6Addr) -> Ipv6Scope {
    match true {
        _ if is_global_unicast(ipv6_addr) => Ipv6Scope::GlobalUnicast,
        _ if ipv6_addr.is_unique_local() => Ipv6Scope::UniqueLocal,
        _ if ipv6_addr.is_unicast_link_local() => Ipv6Scope::LinkLocal,
        _ if ipv6_addr.is_loopback() => Ipv6Scope::Loopback,
        _ => Ipv6Scope::Other,
    }
}

/// 2000::/3
pub fn is_global_unicast(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    (0x20..=0x3F).contains(&first_byte)
}

/// Subnet mask with the top `prefix_len` bits set, e.g. 24 -> `255.255.255.0`.
///
/// Returns `None` for lengths above 32.
pub fn prefix_to_subnet_mask(prefix_len: u8) -> Option<Ipv4Addr> {
    Ipv4Network::new(Ipv4Addr::BROADCAST, prefix_len)
        .ok()
        .map(|net| net.network())
}

/// Inverse of [`prefix_to_subnet_mask`]. `None` when the mask bits are not contiguous.
pub fn subnet_mask_to_prefix(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    (bits.checked_shl(ones).unwrap_or(0) == 0).then_some(ones as u8)
}
