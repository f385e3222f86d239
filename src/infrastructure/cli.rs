use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(short, long, value_name = "FLOAT", help = "Tick rate, i.e. number of ticks per second", default_value_t = 4.0)]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    /// Ticker to analyze on startup (overrides `default_ticker`)
    #[arg(long, value_name = "SYMBOL")]
    pub ticker: Option<String>,

    /// Skip the live model call and show mock data only
    #[arg(long, env = "WORLDAWARE_OFFLINE", default_value_t = false)]
    pub offline: bool,
}
