use async_trait::async_trait;
use linkscope_common::error::LinkError;
use linkscope_common::network::snapshot::LinkSnapshot;
use linkscope_common::wifi::{NetworkCapabilities, NetworkId, WifiInfo};
use linkscope_core::monitor::{
    self, DetailsSink, DetailsView, IpLayerView, LinkEvent, LinkMonitor, RunOutcome,
};
use tokio::sync::mpsc;

use crate::util::{dest, mistagged_v4, v4, via};

const NET: NetworkId = NetworkId(4);

#[derive(Debug, PartialEq)]
enum Rendered {
    Details(DetailsView),
    IpLayer(IpLayerView),
    Rejected(String),
    Exit,
}

#[derive(Default)]
struct RecordingSink {
    rendered: Vec<Rendered>,
}

#[async_trait]
impl DetailsSink for RecordingSink {
    async fn render_details(&mut self, view: &DetailsView) {
        self.rendered.push(Rendered::Details(view.clone()));
    }

    async fn render_ip_layer(&mut self, view: &IpLayerView) {
        self.rendered.push(Rendered::IpLayer(view.clone()));
    }

    async fn rejected(&mut self, error: &LinkError) {
        self.rendered.push(Rendered::Rejected(error.to_string()));
    }

    async fn exit(&mut self) {
        self.rendered.push(Rendered::Exit);
    }
}

fn home_network(host: u8) -> LinkSnapshot {
    LinkSnapshot::new()
        .with_interface("wlan0")
        .with_address(v4(192, 168, 1, host))
        .with_route(dest(v4(192, 168, 1, 0), 24))
        .with_route(via(v4(192, 168, 1, 1)))
        .with_dns_server(v4(192, 168, 1, 1))
}

fn attached(snapshot: LinkSnapshot) -> LinkEvent {
    LinkEvent::Attached {
        network: NET,
        snapshot: Some(snapshot),
        capabilities: None,
        wifi: Some(WifiInfo {
            ssid: Some("home".into()),
            rssi: Some(-58),
            link_speed_mbps: 866,
            frequency_mhz: Some(5180),
            ..Default::default()
        }),
    }
}

fn changed(snapshot: LinkSnapshot) -> LinkEvent {
    LinkEvent::LinkChanged {
        network: NET,
        snapshot,
    }
}

async fn drive(
    monitor: &mut LinkMonitor,
    events: Vec<LinkEvent>,
) -> (RunOutcome, Vec<Rendered>) {
    let (tx, rx) = mpsc::channel(events.len().max(1));
    for event in events {
        tx.send(event).await.unwrap();
    }
    drop(tx);

    let mut sink = RecordingSink::default();
    let outcome = monitor::run(rx, monitor, &mut sink).await;
    (outcome, sink.rendered)
}

#[tokio::test]
async fn attach_renders_full_details() {
    let mut monitor = LinkMonitor::new(None);
    let (outcome, rendered) = drive(&mut monitor, vec![attached(home_network(42))]).await;

    assert_eq!(outcome, RunOutcome::Closed);
    assert_eq!(rendered.len(), 1);
    let Rendered::Details(view) = &rendered[0] else {
        panic!("expected details, got {:?}", rendered[0]);
    };
    let wifi = view.wifi.as_ref().unwrap();
    assert_eq!(wifi.link_speed.as_deref(), Some("866 Mbps"));

    let summary = view.ip_layer.summary.as_ref().unwrap();
    assert_eq!(summary.ipv4_address, Some(v4(192, 168, 1, 42)));
    assert_eq!(summary.subnet_mask, Some(v4(255, 255, 255, 0)));
    assert_eq!(summary.gateway, Some(v4(192, 168, 1, 1)));
    assert_eq!(summary.dns_text, "192.168.1.1");
}

#[tokio::test]
async fn unchanged_snapshots_render_nothing() {
    let mut monitor = LinkMonitor::new(None);
    let events = vec![
        attached(home_network(42)),
        changed(home_network(42)),
        changed(home_network(42)),
        changed(home_network(43)),
    ];
    let (_, rendered) = drive(&mut monitor, events).await;

    assert_eq!(rendered.len(), 2);
    let Rendered::IpLayer(view) = &rendered[1] else {
        panic!("expected an IP layer refresh, got {:?}", rendered[1]);
    };
    assert_eq!(
        view.summary.as_ref().unwrap().ipv4_address,
        Some(v4(192, 168, 1, 43))
    );
}

#[tokio::test]
async fn bad_snapshot_is_rejected_and_monitoring_continues() {
    let mut monitor = LinkMonitor::new(None);
    let events = vec![
        attached(home_network(42)),
        changed(home_network(42).with_address(mistagged_v4())),
        LinkEvent::CapabilitiesChanged {
            network: NET,
            capabilities: NetworkCapabilities {
                captive_portal: true,
            },
        },
    ];
    let (outcome, rendered) = drive(&mut monitor, events).await;

    assert_eq!(outcome, RunOutcome::Closed);
    assert_eq!(rendered.len(), 3);
    assert!(matches!(&rendered[1], Rendered::Rejected(msg) if msg.contains("IPv4")));
    let Rendered::IpLayer(view) = &rendered[2] else {
        panic!("expected an IP layer refresh, got {:?}", rendered[2]);
    };
    assert!(view.can_sign_in);
}

#[tokio::test]
async fn losing_the_network_stops_the_loop() {
    let mut monitor = LinkMonitor::new(None);
    let events = vec![
        attached(home_network(42)),
        LinkEvent::Lost { network: NetworkId(99) },
        LinkEvent::Lost { network: NET },
        changed(home_network(50)),
    ];
    let (outcome, rendered) = drive(&mut monitor, events).await;

    assert_eq!(outcome, RunOutcome::Exited);
    assert_eq!(rendered.last(), Some(&Rendered::Exit));
    assert_eq!(rendered.len(), 2);
}

#[tokio::test]
async fn wired_link_survives_missing_wifi_info() {
    let mut monitor = LinkMonitor::wired();
    let events = vec![
        LinkEvent::Attached {
            network: NET,
            snapshot: Some(home_network(7)),
            capabilities: None,
            wifi: None,
        },
        LinkEvent::StateChanged { wifi: None },
    ];
    let (outcome, rendered) = drive(&mut monitor, events).await;

    assert_eq!(outcome, RunOutcome::Closed);
    assert_eq!(rendered.len(), 2);
    assert!(
        rendered
            .iter()
            .all(|r| matches!(r, Rendered::Details(view) if view.wifi.is_none()))
    );
}
