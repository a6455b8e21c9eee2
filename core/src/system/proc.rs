//! Parsers for the kernel and resolver files the system link source reads.
//!
//! All functions work on file contents so they can be fed captured fixtures.

use std::net::{IpAddr, Ipv4Addr};

use linkscope_common::network::ip;

const RTF_UP: u16 = 0x0001;
const RTF_GATEWAY: u16 = 0x0002;

/// One line of `/proc/net/route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelRoute {
    pub interface: String,
    pub destination: Ipv4Addr,
    pub prefix_len: u8,
    pub gateway: Option<Ipv4Addr>,
    pub metric: u32,
}

/// Parses `/proc/net/route`, skipping the header, routes that are down and malformed lines.
///
/// The kernel prints addresses as native-endian hex of the network-order bytes, so
/// `0101A8C0` is `192.168.1.1` on little-endian machines.
pub fn parse_proc_route(contents: &str) -> Vec<KernelRoute> {
    contents.lines().skip(1).filter_map(parse_route_line).collect()
}

fn parse_route_line(line: &str) -> Option<KernelRoute> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 8 {
        return None;
    }
    let flags = u16::from_str_radix(fields[3], 16).ok()?;
    if flags & RTF_UP == 0 {
        return None;
    }
    let destination = parse_hex_ipv4(fields[1])?;
    let gateway = parse_hex_ipv4(fields[2])?;
    let mask = parse_hex_ipv4(fields[7])?;

    Some(KernelRoute {
        interface: fields[0].to_string(),
        destination,
        prefix_len: ip::subnet_mask_to_prefix(mask)?,
        gateway: (flags & RTF_GATEWAY != 0 && !gateway.is_unspecified()).then_some(gateway),
        metric: fields[6].parse().ok()?,
    })
}

fn parse_hex_ipv4(field: &str) -> Option<Ipv4Addr> {
    let raw = u32::from_str_radix(field, 16).ok()?;
    Some(Ipv4Addr::from(raw.to_ne_bytes()))
}

/// Collects the `nameserver` entries of a `resolv.conf`, in file order.
pub fn parse_resolv_conf(contents: &str) -> Vec<IpAddr> {
    contents
        .lines()
        .map(|line| line.split(['#', ';']).next().unwrap_or("").trim())
        .filter_map(|line| line.strip_prefix("nameserver"))
        .filter_map(|rest| {
            // Scoped link-local servers ("fe80::1%eth0") lose their zone.
            let addr = rest.trim().split('%').next()?;
            addr.parse().ok()
        })
        .collect()
}

/// Reads the signal level (dBm) of `interface` from `/proc/net/wireless`.
pub fn parse_proc_wireless(contents: &str, interface: &str) -> Option<i32> {
    contents.lines().skip(2).find_map(|line| {
        let (name, rest) = line.split_once(':')?;
        if name.trim() != interface {
            return None;
        }
        let level = rest.split_whitespace().nth(2)?;
        let level: i32 = level.trim_end_matches('.').parse().ok()?;
        // Some drivers report the level as an unsigned byte.
        Some(if level > 0 { level - 256 } else { level })
    })
}
