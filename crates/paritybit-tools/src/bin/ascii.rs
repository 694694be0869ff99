use clap::Parser;
use paritybit_sim::{ascii_table, AsciiRow};
use paritybit_tools::CodecArgs;

#[derive(Parser, Debug)]
#[command(name = "parity-ascii")]
struct Args {
    #[command(flatten)]
    codec: CodecArgs,
    #[arg(long)]
    json: bool,
    #[arg(default_value = "HELLO")]
    text: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let rows = ascii_table(&args.text, args.codec.codec())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("Word: {}\n", args.text);
        println!("{}", AsciiRow::HEADER);
        println!("-----|---------------|--------|-------------------");
        for row in &rows {
            println!("{row}");
        }
    }
    Ok(())
}
