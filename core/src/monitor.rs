//! # Link Monitor
//!
//! Stands between the host's network callbacks and the summarizer. The monitor tracks
//! one network, drops events for other networks and events that change nothing, and
//! tells the presentation layer what to redraw.
//!
//! [`LinkMonitor::handle`] is the synchronous state machine; [`run`] drives it from a
//! channel and forwards the outcome to a [`DetailsSink`].

use async_trait::async_trait;
use linkscope_common::error::LinkError;
use linkscope_common::network::snapshot::LinkSnapshot;
use linkscope_common::network::summary::LinkSummary;
use linkscope_common::wifi::{NetworkCapabilities, NetworkId, WifiConfig, WifiInfo};
use tokio::sync::mpsc::Receiver;
use tracing::{debug, warn};

use crate::details::{self, ForgetAction, WifiDetails};
use crate::summarizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// The details view became visible for `network`.
    Attached {
        network: NetworkId,
        snapshot: Option<LinkSnapshot>,
        capabilities: Option<NetworkCapabilities>,
        wifi: Option<WifiInfo>,
    },
    LinkChanged {
        network: NetworkId,
        snapshot: LinkSnapshot,
    },
    CapabilitiesChanged {
        network: NetworkId,
        capabilities: NetworkCapabilities,
    },
    /// Connection state or RSSI changed. `None` when the radio has no connection.
    StateChanged { wifi: Option<WifiInfo> },
    Lost { network: NetworkId },
    /// The details view went away; nothing is tracked until the next `Attached`.
    Detached,
}

/// IP-layer rows of the details view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpLayerView {
    /// `None` hides every IP row.
    pub summary: Option<LinkSummary>,
    pub can_sign_in: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    /// `None` for links without a radio.
    pub wifi: Option<WifiDetails>,
    pub ip_layer: IpLayerView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorAction {
    Unchanged,
    RefreshIpLayer(IpLayerView),
    RefreshAll(Box<DetailsView>),
    /// The tracked network is gone; the details view should close.
    Exit,
}

#[derive(Debug, Default)]
pub struct LinkMonitor {
    /// Leave the view when the connection info disappears.
    require_wifi: bool,
    config: Option<WifiConfig>,
    network: Option<NetworkId>,
    snapshot: Option<LinkSnapshot>,
    capabilities: Option<NetworkCapabilities>,
    wifi: Option<WifiInfo>,
}

impl LinkMonitor {
    /// Monitor for a Wi-Fi network, saved under `config` if it was ever joined explicitly.
    pub fn new(config: Option<WifiConfig>) -> Self {
        Self {
            require_wifi: true,
            config,
            ..Default::default()
        }
    }

    /// Monitor for a link without a radio. Missing connection info is not a reason to exit.
    pub fn wired() -> Self {
        Self::default()
    }

    pub fn network(&self) -> Option<NetworkId> {
        self.network
    }

    pub fn handle(&mut self, event: LinkEvent) -> Result<MonitorAction, LinkError> {
        match event {
            LinkEvent::Attached {
                network,
                snapshot,
                capabilities,
                wifi,
            } => {
                debug!(%network, "attached");
                self.network = Some(network);
                self.snapshot = snapshot;
                self.capabilities = capabilities;
                self.wifi = wifi;
                self.refresh_all()
            }
            LinkEvent::StateChanged { wifi } => {
                self.wifi = wifi;
                self.refresh_all()
            }
            LinkEvent::LinkChanged { network, snapshot } => {
                if !self.is_tracking(network) || self.snapshot.as_ref() == Some(&snapshot) {
                    return Ok(MonitorAction::Unchanged);
                }
                debug!(%network, "link properties changed");
                // A snapshot that fails to summarize is not kept.
                let view = self.ip_layer_for(Some(&snapshot))?;
                self.snapshot = Some(snapshot);
                Ok(MonitorAction::RefreshIpLayer(view))
            }
            LinkEvent::CapabilitiesChanged {
                network,
                capabilities,
            } => {
                if !self.is_tracking(network) || self.capabilities == Some(capabilities) {
                    return Ok(MonitorAction::Unchanged);
                }
                debug!(%network, "capabilities changed");
                self.capabilities = Some(capabilities);
                Ok(MonitorAction::RefreshIpLayer(self.ip_layer()?))
            }
            LinkEvent::Lost { network } => {
                if !self.is_tracking(network) {
                    return Ok(MonitorAction::Unchanged);
                }
                debug!(%network, "lost");
                Ok(MonitorAction::Exit)
            }
            LinkEvent::Detached => {
                self.network = None;
                self.snapshot = None;
                self.capabilities = None;
                self.wifi = None;
                Ok(MonitorAction::Unchanged)
            }
        }
    }

    pub fn can_forget(&self) -> bool {
        details::can_forget(self.wifi.as_ref(), self.config.as_ref())
    }

    pub fn plan_forget(&self) -> Option<ForgetAction> {
        details::plan_forget(self.wifi.as_ref(), self.config.as_ref())
    }

    fn is_tracking(&self, network: NetworkId) -> bool {
        self.network == Some(network)
    }

    fn refresh_all(&self) -> Result<MonitorAction, LinkError> {
        if self.network.is_none() || (self.require_wifi && self.wifi.is_none()) {
            debug!("no network or connection info, leaving details");
            return Ok(MonitorAction::Exit);
        }
        let view = DetailsView {
            wifi: self
                .wifi
                .as_ref()
                .map(|wifi| details::describe(wifi, self.config.as_ref())),
            ip_layer: self.ip_layer()?,
        };
        Ok(MonitorAction::RefreshAll(Box::new(view)))
    }

    fn ip_layer(&self) -> Result<IpLayerView, LinkError> {
        self.ip_layer_for(self.snapshot.as_ref())
    }

    fn ip_layer_for(&self, snapshot: Option<&LinkSnapshot>) -> Result<IpLayerView, LinkError> {
        let summary = match (self.network, snapshot) {
            (Some(_), Some(snapshot)) => Some(summarizer::summarize(snapshot)?),
            _ => None,
        };
        Ok(IpLayerView {
            summary,
            can_sign_in: details::can_sign_in(self.capabilities.as_ref()),
        })
    }
}

/// Receives what the monitor decided. Implemented by the presentation layer.
#[async_trait]
pub trait DetailsSink: Send {
    async fn render_details(&mut self, view: &DetailsView);
    async fn render_ip_layer(&mut self, view: &IpLayerView);
    /// A snapshot could not be summarized. The previous rendering stays in place.
    async fn rejected(&mut self, error: &LinkError);
    async fn exit(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The tracked network went away.
    Exited,
    /// Every event sender was dropped.
    Closed,
}

/// Applies events to `monitor` until the tracked network is lost or the channel closes.
pub async fn run<S: DetailsSink>(
    mut events: Receiver<LinkEvent>,
    monitor: &mut LinkMonitor,
    sink: &mut S,
) -> RunOutcome {
    while let Some(event) = events.recv().await {
        match monitor.handle(event) {
            Ok(MonitorAction::Unchanged) => {}
            Ok(MonitorAction::RefreshIpLayer(view)) => sink.render_ip_layer(&view).await,
            Ok(MonitorAction::RefreshAll(view)) => sink.render_details(&view).await,
            Ok(MonitorAction::Exit) => {
                sink.exit().await;
                return RunOutcome::Exited;
            }
            Err(e) => {
                warn!("Rejected link update: {e}");
                sink.rejected(&e).await;
            }
        }
    }
    RunOutcome::Closed
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
