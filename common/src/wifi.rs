//! # Wi-Fi Model
//!
//! Radio-level facts about a Wi-Fi connection, as reported by the platform, plus the
//! saved configuration (if any) the connection was made with.

use std::fmt;

/// Identifies the network a stream of link events belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkId(pub u32);

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "network#{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WifiInfo {
    pub ssid: Option<String>,
    /// Received signal strength in dBm.
    pub rssi: Option<i32>,
    /// Negative when the driver does not report a link speed.
    pub link_speed_mbps: i32,
    pub frequency_mhz: Option<u32>,
    pub mac_address: Option<String>,
    /// Joined without a saved configuration.
    pub ephemeral: bool,
}

impl WifiInfo {
    pub fn with_rssi(mut self, rssi: i32) -> Self {
        self.rssi = Some(rssi);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiConfig {
    pub network_id: i32,
    /// Set for Hotspot 2.0 configurations.
    pub passpoint_fqdn: Option<String>,
    pub security: Security,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PskType {
    Wpa,
    Wpa2,
    WpaWpa2,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Security {
    #[default]
    None,
    Wep,
    Psk(PskType),
    Eap,
}

impl Security {
    pub fn label(self) -> &'static str {
        match self {
            Security::None => "None",
            Security::Wep => "WEP",
            Security::Psk(PskType::Wpa) => "WPA PSK",
            Security::Psk(PskType::Wpa2) => "WPA2 PSK",
            Security::Psk(PskType::WpaWpa2 | PskType::Unknown) => "WPA/WPA2 PSK",
            Security::Eap => "802.1x EAP",
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkCapabilities {
    /// The network intercepts traffic until the user signs in.
    pub captive_portal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Ghz2_4,
    Ghz5,
}

impl Band {
    pub const LOWER_FREQ_24GHZ: u32 = 2400;
    pub const HIGHER_FREQ_24GHZ: u32 = 2500;
    pub const LOWER_FREQ_5GHZ: u32 = 4900;
    pub const HIGHER_FREQ_5GHZ: u32 = 5900;

    /// Band of a channel centre frequency. `None` outside the 2.4 and 5 GHz ranges.
    pub fn from_frequency(mhz: u32) -> Option<Self> {
        match mhz {
            Self::LOWER_FREQ_24GHZ..Self::HIGHER_FREQ_24GHZ => Some(Band::Ghz2_4),
            Self::LOWER_FREQ_5GHZ..Self::HIGHER_FREQ_5GHZ => Some(Band::Ghz5),
            _ => None,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Ghz2_4 => f.write_str("2.4 GHz"),
            Band::Ghz5 => f.write_str("5 GHz"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignalStrength {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SignalStrength {
    pub const LEVELS: u8 = 4;

    pub fn from_level(level: u8) -> Self {
        match level {
            0 => SignalStrength::Poor,
            1 => SignalStrength::Fair,
            2 => SignalStrength::Good,
            _ => SignalStrength::Excellent,
        }
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SignalStrength::Poor => "Poor",
            SignalStrength::Fair => "Fair",
            SignalStrength::Good => "Good",
            SignalStrength::Excellent => "Excellent",
        };
        f.write_str(text)
    }
}
