use std::net::{Ipv4Addr, Ipv6Addr};

/// Display-ready digest of a [`LinkSnapshot`](crate::network::snapshot::LinkSnapshot).
///
/// Every field is always set; a `None` or an empty collection means "nothing to show"
/// and the presentation layer hides the matching row. Addresses render through their
/// `Display` impls (dotted quad for IPv4).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSummary {
    /// The last IPv4 address of the link.
    pub ipv4_address: Option<Ipv4Addr>,
    /// All IPv6 addresses in the order reported, duplicates included.
    pub ipv6_addresses: Vec<Ipv6Addr>,
    pub subnet_mask: Option<Ipv4Addr>,
    pub gateway: Option<Ipv4Addr>,
    /// IPv4 DNS servers joined by `,`. Empty when there are none.
    pub dns_text: String,
}

impl LinkSummary {
    pub fn has_ip_details(&self) -> bool {
        self.ipv4_address.is_some()
            || !self.ipv6_addresses.is_empty()
            || self.subnet_mask.is_some()
            || self.gateway.is_some()
            || !self.dns_text.is_empty()
    }

    /// DNS text, or `None` when there is nothing to display.
    pub fn dns(&self) -> Option<&str> {
        (!self.dns_text.is_empty()).then_some(self.dns_text.as_str())
    }
}
