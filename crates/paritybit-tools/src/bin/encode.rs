use clap::Parser;
use paritybit_core::count_ones;
use paritybit_core::types::BitString;
use paritybit_tools::CodecArgs;

#[derive(Parser, Debug)]
#[command(name = "parity-encode")]
struct Args {
    /// Data bits, e.g. 1011001.
    #[arg(long)]
    data: BitString,
    #[command(flatten)]
    codec: CodecArgs,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let codec = args.codec.codec();
    let framed = codec.encode(&args.data);
    log::debug!("{} parity at {}: {} -> {framed}", codec.mode, codec.position, args.data);

    if args.json {
        let out = serde_json::json!({
            "codec": codec,
            "data": args.data,
            "parity_bit": codec.parity_bit(&args.data),
            "framed": framed,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Data bits:        {}", args.data);
        println!("Number of 1s:     {}", count_ones(&args.data));
        println!("{:<17} {}", format!("{} parity bit:", codec.mode), codec.parity_bit(&args.data));
        println!("With parity:      {framed}");
        println!("Total 1s:         {} ({})", count_ones(&framed), codec.mode);
    }
    Ok(())
}
