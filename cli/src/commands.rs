pub mod interfaces;
pub mod show;
pub mod watch;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use linkscope_common::config::{Config, DEFAULT_INTERVAL};

#[derive(Parser)]
#[command(name = "linkscope")]
#[command(about = "Summarize the IP and Wi-Fi state of a network link.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide IPv6 addresses
    #[arg(long, global = true)]
    pub no_ipv6: bool,

    /// Reduce output (repeat for less)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize one interface
    #[command(alias = "s")]
    Show { interface: Option<String> },
    /// Follow an interface and print its summary whenever it changes
    #[command(alias = "w")]
    Watch {
        interface: Option<String>,
        /// Seconds between polls
        #[arg(long, default_value_t = DEFAULT_INTERVAL.as_secs())]
        interval: u64,
    },
    /// List the interfaces worth inspecting
    #[command(alias = "i")]
    Interfaces,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let base = Config {
            no_ipv6: self.no_ipv6,
            quiet: self.quiet,
            ..Default::default()
        };
        match &self.command {
            Commands::Show { interface } => Config {
                interface: interface.clone(),
                ..base
            },
            Commands::Watch { interface, interval } => Config {
                interface: interface.clone(),
                ..base
            }
            .with_interval(Duration::from_secs(*interval)),
            Commands::Interfaces => base,
        }
    }
}
