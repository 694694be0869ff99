use clap::Parser;
use paritybit_core::types::BitString;
use paritybit_sim::exhaustive_detection;
use paritybit_tools::CodecArgs;

#[derive(Parser, Debug)]
#[command(name = "parity-sweep")]
struct Args {
    #[arg(long)]
    data: BitString,
    #[command(flatten)]
    codec: CodecArgs,
    /// Largest number of simultaneous bit errors to try.
    #[arg(long, default_value_t = 3)]
    max_flips: usize,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let codec = args.codec.codec();
    let summaries = (1..=args.max_flips)
        .map(|k| exhaustive_detection(&args.data, codec, k))
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        println!("Data: {} ({} parity, {})", args.data, codec.mode, codec.position);
        for s in &summaries {
            let note = if s.patterns == 0 {
                "no patterns"
            } else if s.all_detected() {
                "always detected"
            } else if s.none_detected() {
                "never detected"
            } else {
                "partly detected"
            };
            println!("{s} -> {note}");
        }
    }
    Ok(())
}
