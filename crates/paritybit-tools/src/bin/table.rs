use clap::Parser;
use paritybit_core::types::BitString;
use paritybit_sim::{parity_table, ParityRow, SAMPLE_WORDS};
use paritybit_tools::CodecArgs;

#[derive(Parser, Debug)]
#[command(name = "parity-table")]
struct Args {
    #[command(flatten)]
    codec: CodecArgs,
    #[arg(long)]
    json: bool,
    /// Data words to tabulate. Defaults to a small sample set.
    words: Vec<BitString>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let words = if args.words.is_empty() {
        SAMPLE_WORDS
            .iter()
            .map(|w| w.parse())
            .collect::<Result<Vec<BitString>, _>>()?
    } else {
        args.words
    };
    let rows = parity_table(&words, args.codec.codec());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", ParityRow::HEADER);
        println!("----------|----|--------|-------------|----------");
        for row in &rows {
            println!("{row}");
        }
    }
    Ok(())
}
