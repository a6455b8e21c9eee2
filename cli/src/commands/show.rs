use anyhow::Context;
use linkscope_common::config::Config;
use linkscope_common::network::interface;
use linkscope_core::details;
use linkscope_core::summarizer;
use linkscope_core::system::{LinkSource, SystemLinkSource};
use tracing::warn;

use crate::terminal::format::{self, Detail};
use crate::terminal::print;

/// Prints the summary of one interface. Saved Wi-Fi configurations are not read on this
/// host, so no security row is shown.
pub fn show(cfg: &Config) -> anyhow::Result<()> {
    let source = SystemLinkSource::new();
    let Some(iface) = interface::select_interface(cfg.interface.as_deref(), source.interfaces())
    else {
        match &cfg.interface {
            Some(name) => anyhow::bail!("No interface named {name}"),
            None => anyhow::bail!("No interface with addresses to summarize"),
        }
    };

    let snapshot = source
        .snapshot(&iface)
        .with_context(|| format!("reading link state of {}", iface.name))?;
    let summary = summarizer::summarize(&snapshot)
        .with_context(|| format!("summarizing {}", iface.name))?;

    let mut rows: Vec<Detail> = match source.wifi(&iface) {
        Ok(Some(wifi)) => format::wifi_to_details(&details::describe(&wifi, None)),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Wi-Fi details unavailable: {e}");
            Vec::new()
        }
    };
    rows.extend(format::summary_to_details(&summary, cfg));

    print::header("link summary", cfg.quiet);
    print::tree_head(iface.index as usize, &iface.name);
    if rows.is_empty() {
        print::no_results("Nothing to show for this link");
    } else {
        print::as_tree_one_level(rows);
    }
    Ok(())
}
