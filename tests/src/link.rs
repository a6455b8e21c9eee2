mod monitor_flow;
mod summarize;
mod system_source;
