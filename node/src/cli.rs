use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "block-ordering",
    about = "Checks whether blocks order their transactions by priority fee"
)]
pub struct Args {
    /// Block to check, can be repeated. Random blocks are sampled when omitted.
    #[arg(short, long = "block", value_name = "NUMBER")]
    pub blocks: Vec<u64>,

    /// Number of random blocks to sample, overrides SAMPLE_BLOCKS
    #[arg(short, long)]
    pub samples: Option<u64>,
}
