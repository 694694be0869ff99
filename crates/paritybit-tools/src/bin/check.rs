use clap::Parser;
use paritybit_core::types::BitString;
use paritybit_core::{check_parity, count_ones};
use paritybit_tools::ModeArg;

#[derive(Parser, Debug)]
#[command(name = "parity-check")]
struct Args {
    /// Received frame, parity bit included.
    #[arg(long)]
    received: BitString,
    #[arg(long, value_enum, default_value_t = ModeArg::Even)]
    mode: ModeArg,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let mode = args.mode.into_mode();
    let ones = count_ones(&args.received);

    if check_parity(&args.received, mode) {
        println!("PASS: {} has {ones} ones ({mode} parity)", args.received);
    } else {
        eprintln!("FAIL: {} has {ones} ones, expected {mode} parity", args.received);
        std::process::exit(1);
    }
    Ok(())
}
