use clap::Parser;
use paritybit_core::types::BitString;
use paritybit_sim::Transmission;
use paritybit_tools::CodecArgs;

#[derive(Parser, Debug)]
#[command(name = "parity-simulate")]
struct Args {
    #[arg(long)]
    data: BitString,
    #[command(flatten)]
    codec: CodecArgs,
    /// Frame position to invert in transit; repeat for multiple errors.
    #[arg(long = "flip")]
    flips: Vec<usize>,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let codec = args.codec.codec();
    let t = Transmission::simulate(&args.data, codec, &args.flips)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&t)?);
    } else {
        println!("--- Simulating Transmission ({} parity) ---", codec.mode);
        println!("{t}");
    }
    Ok(())
}
