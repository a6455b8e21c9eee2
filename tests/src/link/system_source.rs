use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use linkscope_common::error::LinkError;
use linkscope_common::network::snapshot::LinkSnapshot;
use linkscope_common::wifi::{NetworkId, WifiInfo};
use linkscope_core::monitor::LinkEvent;
use linkscope_core::summarize;
use linkscope_core::system::{LinkPoller, LinkSource, SystemLinkSource, SystemPaths};
use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use crate::util::{v4, v6};

fn interface(name: &str, index: u32, ips: &[&str]) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: String::new(),
        index,
        mac: None,
        ips: ips.iter().map(|ip| ip.parse::<IpNetwork>().unwrap()).collect(),
        flags: 1,
    }
}

/// Scratch directory holding fake `/proc` and `/etc` files for one test.
struct Fixture {
    dir: PathBuf,
}

impl Fixture {
    fn new(name: &str) -> anyhow::Result<Self> {
        let dir = std::env::temp_dir().join(format!("linkscope-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn write(&self, file: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.join(file);
        fs::write(&path, contents)?;
        Ok(path)
    }

    fn missing(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

/*************************************************************
                    System link source
**************************************************************/

#[test]
#[cfg(target_endian = "little")]
fn snapshot_from_system_files_summarizes() -> anyhow::Result<()> {
    let fixture = Fixture::new("summary")?;
    let paths = SystemPaths {
        route: fixture.write(
            "route",
            "Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT\n\
             eth0\t00000000\t0101000A\t0003\t0\t0\t100\t00000000\t0\t0\t0\n\
             wlan0\t00000000\t0101A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0\n",
        )?,
        resolv_conf: fixture.write(
            "resolv.conf",
            "# generated\n\
             nameserver 2001:4860:4860::8888\n\
             nameserver 1.1.1.1\n\
             nameserver 9.9.9.9\n",
        )?,
        wireless: fixture.missing("wireless"),
    };
    let source = SystemLinkSource::with_paths(paths);
    let wlan0 = interface("wlan0", 3, &["192.168.1.42/24", "fe80::36cf:f6ff:fe9a:1122/64"]);

    let snapshot = source.snapshot(&wlan0)?;
    let summary = summarize(&snapshot)?;

    assert_eq!(summary.ipv4_address, Some(v4(192, 168, 1, 42)));
    assert_eq!(summary.ipv6_addresses, [v6("fe80::36cf:f6ff:fe9a:1122")]);
    assert_eq!(summary.subnet_mask, Some(v4(255, 255, 255, 0)));
    assert_eq!(summary.gateway, Some(v4(192, 168, 1, 1)));
    assert_eq!(summary.dns_text, "1.1.1.1,9.9.9.9");
    Ok(())
}

#[test]
fn missing_system_files_leave_only_addresses() -> anyhow::Result<()> {
    let fixture = Fixture::new("missing")?;
    let source = SystemLinkSource::with_paths(SystemPaths {
        route: fixture.missing("route"),
        resolv_conf: fixture.missing("resolv.conf"),
        wireless: fixture.missing("wireless"),
    });
    let eth0 = interface("eth0", 2, &["10.0.0.5/8"]);

    let summary = summarize(&source.snapshot(&eth0)?)?;
    assert_eq!(summary.ipv4_address, Some(v4(10, 0, 0, 5)));
    assert_eq!(summary.subnet_mask, Some(v4(255, 0, 0, 0)));
    assert_eq!(summary.gateway, None);
    assert_eq!(summary.dns_text, "");
    Ok(())
}

#[test]
fn unreadable_route_file_is_an_io_error() -> anyhow::Result<()> {
    let fixture = Fixture::new("unreadable")?;
    // A directory cannot be read as a file.
    let route = fixture.dir.join("route");
    fs::create_dir_all(&route)?;
    let source = SystemLinkSource::with_paths(SystemPaths {
        route: route.clone(),
        resolv_conf: fixture.missing("resolv.conf"),
        wireless: fixture.missing("wireless"),
    });

    let err = source.snapshot(&interface("eth0", 2, &["10.0.0.5/8"])).unwrap_err();
    assert!(matches!(err, LinkError::Io { path, .. } if path == route));
    Ok(())
}

/*************************************************************
                          Poller
**************************************************************/

#[derive(Clone, Default)]
struct FakeSource {
    interfaces: Arc<Mutex<Vec<NetworkInterface>>>,
    wifi: Arc<Mutex<Option<WifiInfo>>>,
}

impl FakeSource {
    fn set_interfaces(&self, interfaces: Vec<NetworkInterface>) {
        *self.interfaces.lock().unwrap() = interfaces;
    }

    fn set_wifi(&self, wifi: Option<WifiInfo>) {
        *self.wifi.lock().unwrap() = wifi;
    }
}

impl LinkSource for FakeSource {
    fn interfaces(&self) -> Vec<NetworkInterface> {
        self.interfaces.lock().unwrap().clone()
    }

    fn snapshot(&self, interface: &NetworkInterface) -> Result<LinkSnapshot, LinkError> {
        let mut snapshot = LinkSnapshot::new().with_interface(interface.name.clone());
        for net in &interface.ips {
            snapshot = snapshot.with_address(net.ip());
        }
        Ok(snapshot)
    }

    fn wifi(&self, _interface: &NetworkInterface) -> Result<Option<WifiInfo>, LinkError> {
        Ok(self.wifi.lock().unwrap().clone())
    }
}

#[test]
fn poller_attaches_then_reports_changes() -> anyhow::Result<()> {
    let source = FakeSource::default();
    source.set_interfaces(vec![interface("wlan0", 3, &["192.168.1.42/24"])]);
    source.set_wifi(Some(WifiInfo::default().with_rssi(-60)));
    let mut poller = LinkPoller::new(source.clone(), "wlan0");

    let first = poller.poll()?;
    assert_eq!(first.len(), 1);
    assert!(matches!(first[0], LinkEvent::Attached { network: NetworkId(3), .. }));

    let quiet = poller.poll()?;
    assert_eq!(quiet.len(), 1);
    assert!(matches!(quiet[0], LinkEvent::LinkChanged { .. }));

    source.set_wifi(Some(WifiInfo::default().with_rssi(-70)));
    let moved = poller.poll()?;
    assert_eq!(moved.len(), 2);
    assert!(matches!(
        &moved[1],
        LinkEvent::StateChanged { wifi: Some(w) } if w.rssi == Some(-70)
    ));
    Ok(())
}

#[test]
fn poller_reports_lost_interface_once() -> anyhow::Result<()> {
    let source = FakeSource::default();
    source.set_interfaces(vec![interface("eth0", 2, &["10.0.0.5/8"])]);
    let mut poller = LinkPoller::new(source.clone(), "eth0");
    poller.poll()?;

    source.set_interfaces(Vec::new());
    assert_eq!(poller.poll()?, vec![LinkEvent::Lost { network: NetworkId(2) }]);
    assert!(poller.poll()?.is_empty());
    Ok(())
}

#[test]
fn poller_treats_new_index_as_a_different_network() -> anyhow::Result<()> {
    let source = FakeSource::default();
    source.set_interfaces(vec![interface("eth0", 2, &["10.0.0.5/8"])]);
    let mut poller = LinkPoller::new(source.clone(), "eth0");
    poller.poll()?;

    source.set_interfaces(vec![interface("eth0", 7, &["10.0.0.5/8"])]);
    assert_eq!(poller.poll()?, vec![LinkEvent::Lost { network: NetworkId(2) }]);

    let again = poller.poll()?;
    assert!(matches!(again[0], LinkEvent::Attached { network: NetworkId(7), .. }));
    Ok(())
}
