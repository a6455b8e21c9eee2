use colored::*;
use linkscope_common::config::Config;
use linkscope_common::network::ip;
use linkscope_common::network::mac;
use linkscope_common::network::summary::LinkSummary;
use linkscope_common::wifi::SignalStrength;
use linkscope_core::details::WifiDetails;
use linkscope_core::monitor::{DetailsView, IpLayerView};
use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn summary_to_details(summary: &LinkSummary, cfg: &Config) -> Vec<Detail> {
    let mut details: Vec<Detail> = Vec::new();

    if let Some(ipv4) = summary.ipv4_address {
        details.push(("IPv4".into(), ipv4.to_string().color(colors::IPV4_ADDR)));
    }
    if let Some(mask) = summary.subnet_mask {
        details.push(("Subnet".into(), mask.to_string().color(colors::IPV4_PREFIX)));
    }
    if let Some(gateway) = summary.gateway {
        details.push(("Gateway".into(), gateway.to_string().color(colors::IPV4_ADDR)));
    }
    if let Some(dns) = summary.dns() {
        details.push(("DNS".into(), dns.color(colors::TEXT_DEFAULT)));
    }
    if !cfg.no_ipv6 {
        for ipv6 in &summary.ipv6_addresses {
            let key = ip::ipv6_scope(ipv6).label();
            details.push((key.into(), ipv6.to_string().color(colors::IPV6_ADDR)));
        }
    }
    details
}

pub fn ip_layer_to_details(view: &IpLayerView, cfg: &Config) -> Vec<Detail> {
    let mut details = view
        .summary
        .as_ref()
        .map(|summary| summary_to_details(summary, cfg))
        .unwrap_or_default();

    if view.can_sign_in {
        details.push(("Portal".into(), "sign-in required".yellow().bold()));
    }
    details
}

pub fn wifi_to_details(wifi: &WifiDetails) -> Vec<Detail> {
    let mut details: Vec<Detail> = Vec::new();

    if let Some(ssid) = &wifi.ssid {
        details.push(("SSID".into(), ssid.color(colors::PRIMARY)));
    }
    if let Some(signal) = wifi.signal {
        details.push(("Signal".into(), signal_to_colored(signal)));
    }
    if let Some(speed) = &wifi.link_speed {
        details.push(("Speed".into(), speed.normal()));
    }
    if let Some(band) = wifi.band {
        details.push(("Band".into(), band.to_string().normal()));
    }
    if let Some(security) = &wifi.security {
        details.push(("Security".into(), security.normal()));
    }
    if let Some(mac_addr) = &wifi.mac_address {
        details.push(("MAC".into(), mac_addr.color(colors::MAC_ADDR)));
    }
    details
}

pub fn view_to_details(view: &DetailsView, cfg: &Config) -> Vec<Detail> {
    let mut details = view.wifi.as_ref().map(wifi_to_details).unwrap_or_default();
    details.extend(ip_layer_to_details(&view.ip_layer, cfg));
    details
}

pub fn interface_to_details(interface: &NetworkInterface, cfg: &Config) -> Vec<Detail> {
    let mut details: Vec<Detail> = interface
        .ips
        .iter()
        .filter(|net| !(cfg.no_ipv6 && net.is_ipv6()))
        .map(network_to_detail)
        .collect();

    if let Some(mac_addr) = interface.mac {
        details.push(("MAC".into(), mac_addr.to_string().color(colors::MAC_ADDR)));
        if let Some(vendor) = mac::vendor_of(mac_addr) {
            details.push(("Vendor".into(), vendor.normal()));
        }
    }
    details
}

fn network_to_detail(ip_network: &IpNetwork) -> Detail {
    match ip_network {
        IpNetwork::V4(ipv4_network) => {
            let address: ColoredString = ipv4_network.ip().to_string().color(colors::IPV4_ADDR);
            let prefix: ColoredString =
                ipv4_network.prefix().to_string().color(colors::IPV4_PREFIX);
            ("IPv4".to_string(), format!("{address}/{prefix}").normal())
        }
        IpNetwork::V6(ipv6_network) => {
            let address: ColoredString = ipv6_network.ip().to_string().color(colors::IPV6_ADDR);
            let prefix: ColoredString =
                ipv6_network.prefix().to_string().color(colors::IPV6_PREFIX);
            let key = ip::ipv6_scope(&ipv6_network.ip()).label();
            (key.to_string(), format!("{address}/{prefix}").normal())
        }
    }
}

fn signal_to_colored(signal: SignalStrength) -> ColoredString {
    let color = match signal {
        SignalStrength::Excellent | SignalStrength::Good => colors::SIGNAL_GOOD,
        SignalStrength::Fair => colors::SIGNAL_WEAK,
        SignalStrength::Poor => colors::SIGNAL_POOR,
    };
    signal.to_string().color(color)
}
