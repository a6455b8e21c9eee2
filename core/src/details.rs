//! Radio-level details of a Wi-Fi connection and the actions they allow.

use linkscope_common::wifi::{Band, NetworkCapabilities, SignalStrength, WifiConfig, WifiInfo};
use tracing::warn;

pub const MIN_RSSI: i32 = -100;
pub const MAX_RSSI: i32 = -55;
/// Number of levels the connection icon is drawn with.
pub const ICON_LEVELS: u8 = 5;

/// Display-ready digest of a [`WifiInfo`] and its saved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiDetails {
    pub ssid: Option<String>,
    /// `None` when no RSSI was reported.
    pub signal: Option<SignalStrength>,
    pub icon_level: Option<u8>,
    /// e.g. `"72 Mbps"`. `None` when the link speed is unknown.
    pub link_speed: Option<String>,
    pub band: Option<Band>,
    pub security: Option<String>,
    pub mac_address: Option<String>,
    pub can_forget: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgetAction {
    /// Stop auto-joining a network that was never saved.
    DisableEphemeral { ssid: Option<String> },
    RemovePasspoint { fqdn: String },
    Forget { network_id: i32 },
}

/// Maps an RSSI onto `levels` buckets, linearly between [`MIN_RSSI`] and [`MAX_RSSI`].
pub fn signal_level(rssi: i32, levels: u8) -> u8 {
    if levels == 0 {
        return 0;
    }
    let top = i32::from(levels - 1);
    match rssi {
        r if r <= MIN_RSSI => 0,
        r if r >= MAX_RSSI => levels - 1,
        r => ((r - MIN_RSSI) * top / (MAX_RSSI - MIN_RSSI)) as u8,
    }
}

pub fn signal_strength(rssi: i32) -> SignalStrength {
    SignalStrength::from_level(signal_level(rssi, SignalStrength::LEVELS))
}

pub fn link_speed_text(link_speed_mbps: i32) -> Option<String> {
    (link_speed_mbps >= 0).then(|| format!("{link_speed_mbps} Mbps"))
}

pub fn band(frequency_mhz: Option<u32>) -> Option<Band> {
    let frequency = frequency_mhz?;
    let band = Band::from_frequency(frequency);
    if band.is_none() {
        warn!("Unexpected frequency {frequency}");
    }
    band
}

/// Whether the network holds traffic behind a captive portal the user can sign into.
pub fn can_sign_in(capabilities: Option<&NetworkCapabilities>) -> bool {
    capabilities.is_some_and(|caps| caps.captive_portal)
}

pub fn can_forget(info: Option<&WifiInfo>, config: Option<&WifiConfig>) -> bool {
    info.is_some_and(|info| info.ephemeral) || config.is_some()
}

/// Decides how the current network should be forgotten. Ephemeral networks take
/// precedence over saved configurations.
pub fn plan_forget(info: Option<&WifiInfo>, config: Option<&WifiConfig>) -> Option<ForgetAction> {
    if let Some(info) = info.filter(|info| info.ephemeral) {
        return Some(ForgetAction::DisableEphemeral {
            ssid: info.ssid.clone(),
        });
    }
    let config = config?;
    match &config.passpoint_fqdn {
        Some(fqdn) => Some(ForgetAction::RemovePasspoint { fqdn: fqdn.clone() }),
        None => Some(ForgetAction::Forget {
            network_id: config.network_id,
        }),
    }
}

pub fn describe(info: &WifiInfo, config: Option<&WifiConfig>) -> WifiDetails {
    WifiDetails {
        ssid: info.ssid.clone(),
        signal: info.rssi.map(signal_strength),
        icon_level: info.rssi.map(|rssi| signal_level(rssi, ICON_LEVELS)),
        link_speed: link_speed_text(info.link_speed_mbps),
        band: band(info.frequency_mhz),
        security: config.map(|config| config.security.label().to_string()),
        mac_address: info.mac_address.clone(),
        can_forget: can_forget(Some(info), config),
    }
}
