use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;
#[cfg(target_os = "linux")]
use linux_impl::{is_physical, is_wireless};
#[cfg(not(target_os = "linux"))]
use fallback_impl::{is_physical, is_wireless};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// The interface is operationally down.
    IsDown,
    /// Loopback links carry nothing worth summarizing.
    IsLoopback,
    /// The interface has no address of either family.
    NoAddresses,
}

/// How an interface is attached, in the order candidates are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LinkKind {
    Wired,
    Wireless,
    Virtual,
}

impl LinkKind {
    pub fn of(interface: &NetworkInterface) -> Self {
        classify(interface, is_physical, is_wireless)
    }
}

/// Lists the interfaces worth inspecting, wired first, then wireless, then virtual.
pub fn candidate_interfaces(interfaces: Vec<NetworkInterface>) -> Vec<NetworkInterface> {
    rank_interfaces(interfaces, LinkKind::of)
}

/// Picks `name` if given, otherwise the best ranked candidate.
pub fn select_interface(
    name: Option<&str>,
    interfaces: Vec<NetworkInterface>,
) -> Option<NetworkInterface> {
    match name {
        Some(name) => interfaces.into_iter().find(|i| i.name == name),
        None => candidate_interfaces(interfaces).into_iter().next(),
    }
}

pub fn is_viable_link_interface(interface: &NetworkInterface) -> Result<(), ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() {
        return Err(ViabilityError::IsLoopback);
    }
    if interface.ips.is_empty() {
        return Err(ViabilityError::NoAddresses);
    }
    Ok(())
}

pub fn has_ipv4(interface: &NetworkInterface) -> bool {
    interface.ips.iter().any(|net| matches!(net, IpNetwork::V4(_)))
}

fn classify(
    interface: &NetworkInterface,
    is_physical: impl Fn(&NetworkInterface) -> bool,
    is_wireless: impl Fn(&NetworkInterface) -> bool,
) -> LinkKind {
    match true {
        _ if !is_physical(interface) => LinkKind::Virtual,
        _ if is_wireless(interface) => LinkKind::Wireless,
        _ => LinkKind::Wired,
    }
}

fn rank_interfaces(
    interfaces: Vec<NetworkInterface>,
    kind_of: impl Fn(&NetworkInterface) -> LinkKind,
) -> Vec<NetworkInterface> {
    let mut viable: Vec<NetworkInterface> = interfaces
        .into_iter()
        .filter(|interface| is_viable_link_interface(interface).is_ok())
        .collect();

    // Stable sort keeps the kernel's index order within a kind.
    viable.sort_by_key(|interface| (kind_of(interface), !has_ipv4(interface)));
    viable
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use super::*;
    use std::path::Path;

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/device", interface.name)).exists()
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/wireless", interface.name)).exists()
    }
}

#[cfg(not(target_os = "linux"))]
mod fallback_impl {
    use super::*;

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        interface.mac.is_some() && !interface.is_point_to_point()
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        interface.name.starts_with("wl")
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
