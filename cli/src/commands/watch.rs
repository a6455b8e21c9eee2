use std::time::Duration;

use async_trait::async_trait;
use colored::*;
use linkscope_common::config::Config;
use linkscope_common::error::LinkError;
use linkscope_common::network::interface::{self, LinkKind};
use linkscope_common::network::summary::LinkSummary;
use linkscope_common::success;
use linkscope_core::monitor::{
    self, DetailsSink, DetailsView, IpLayerView, LinkEvent, LinkMonitor, RunOutcome,
};
use linkscope_core::system::{LinkPoller, LinkSource, SystemLinkSource};
use tokio::sync::mpsc::{self, Sender};
use tracing::{error, info, warn};

use crate::terminal::{colors, format, print};

const EVENT_QUEUE: usize = 16;

/// Follows an interface until it disappears or Ctrl-C is pressed.
///
/// Saved Wi-Fi configurations are not read on this host, so the security row and the
/// forget plan never appear.
pub async fn watch(cfg: &Config) -> anyhow::Result<()> {
    let source = SystemLinkSource::new();
    let Some(iface) = interface::select_interface(cfg.interface.as_deref(), source.interfaces())
    else {
        anyhow::bail!("No interface to watch");
    };

    let mut monitor = match LinkKind::of(&iface) {
        LinkKind::Wireless => LinkMonitor::new(None),
        LinkKind::Wired | LinkKind::Virtual => LinkMonitor::wired(),
    };

    print::header("watching link", cfg.quiet);
    info!(
        "Polling {} every {}s, press Ctrl-C to stop",
        iface.name.color(colors::PRIMARY),
        cfg.interval.as_secs()
    );

    let (tx, rx) = mpsc::channel::<LinkEvent>(EVENT_QUEUE);
    let poller = LinkPoller::new(source, iface.name.clone());
    let poll_task = tokio::spawn(poll_loop(poller, cfg.interval, tx));

    let mut sink = TerminalSink {
        name: iface.name.clone(),
        cfg: cfg.clone(),
        refreshes: 0,
    };

    let outcome = tokio::select! {
        outcome = monitor::run(rx, &mut monitor, &mut sink) => Some(outcome),
        _ = tokio::signal::ctrl_c() => None,
    };
    poll_task.abort();

    match outcome {
        Some(RunOutcome::Exited) => anyhow::bail!("{} is gone", iface.name),
        Some(RunOutcome::Closed) => anyhow::bail!("Link poller stopped unexpectedly"),
        None => {
            monitor.handle(LinkEvent::Detached)?;
            success!("Stopped watching {} after {} refreshes", iface.name, sink.refreshes);
            Ok(())
        }
    }
}

async fn poll_loop<S: LinkSource>(
    mut poller: LinkPoller<S>,
    period: Duration,
    tx: Sender<LinkEvent>,
) {
    let mut ticker = tokio::time::interval(period);
    loop {
        ticker.tick().await;
        match poller.poll() {
            Ok(events) => {
                for event in events {
                    if tx.send(event).await.is_err() {
                        return;
                    }
                }
            }
            Err(e) => warn!("Polling {} failed: {e}", poller.interface()),
        }
    }
}

struct TerminalSink {
    name: String,
    cfg: Config,
    refreshes: usize,
}

#[async_trait]
impl DetailsSink for TerminalSink {
    async fn render_details(&mut self, view: &DetailsView) {
        print::tree_head(self.refreshes, &self.name);
        print::as_tree_one_level(format::view_to_details(view, &self.cfg));
        self.refreshes += 1;
    }

    async fn render_ip_layer(&mut self, view: &IpLayerView) {
        print::tree_head(self.refreshes, &format!("{} (IP layer changed)", self.name));
        if !view.summary.as_ref().is_some_and(LinkSummary::has_ip_details) {
            print::no_results("No IP configuration");
        }
        let rows = format::ip_layer_to_details(view, &self.cfg);
        if !rows.is_empty() {
            print::as_tree_one_level(rows);
        }
        self.refreshes += 1;
    }

    async fn rejected(&mut self, error: &LinkError) {
        error!("Ignoring update for {}: {error}", self.name);
    }

    async fn exit(&mut self) {
        warn!("{} disappeared", self.name);
    }
}
