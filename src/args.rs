use clap::Parser;

#[derive(Parser)]
#[command(name = "movie-quiz", about = "Terminal movie rating quiz")]
pub struct Args {
    /// Questions per round
    #[arg(long, default_value_t = 10)]
    pub total: usize,

    /// Use only the cached movie list, never hit the network
    #[arg(long)]
    pub offline: bool,
}
