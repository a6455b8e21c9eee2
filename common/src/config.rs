use std::time::Duration;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to inspect. The best available interface is chosen when unset.
    pub interface: Option<String>,
    /// Poll period of the `watch` command.
    ///
    /// Never shorter than [`MIN_INTERVAL`].
    pub interval: Duration,
    /// Hides the IPv6 rows of a summary.
    pub no_ipv6: bool,
    pub quiet: u8,
}

impl Config {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_INTERVAL);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interface: None,
            interval: DEFAULT_INTERVAL,
            no_ipv6: false,
            quiet: 0,
        }
    }
}
