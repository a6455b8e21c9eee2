use linkscope_common::config::Config;
use linkscope_common::network::interface::{self, LinkKind};
use linkscope_core::system::{LinkSource, SystemLinkSource};

use crate::mprint;
use crate::terminal::{format, print};

pub fn interfaces(cfg: &Config) -> anyhow::Result<()> {
    let candidates = interface::candidate_interfaces(SystemLinkSource::new().interfaces());

    print::header("interfaces", cfg.quiet);
    if candidates.is_empty() {
        print::no_results("No interface is up with an address");
        return Ok(());
    }

    for (idx, iface) in candidates.iter().enumerate() {
        let kind = match LinkKind::of(iface) {
            LinkKind::Wired => "wired",
            LinkKind::Wireless => "wireless",
            LinkKind::Virtual => "virtual",
        };
        print::tree_head(idx, &format!("{} ({kind})", iface.name));
        print::as_tree_one_level(format::interface_to_details(iface, cfg));
        if idx + 1 != candidates.len() {
            mprint!();
        }
    }
    Ok(())
}
