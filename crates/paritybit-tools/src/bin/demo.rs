use clap::Parser;
use paritybit_core::types::{BitString, ParityMode, ParityPosition};
use paritybit_core::{append_parity, check_parity, compute_parity_bit, count_ones, ParityCodec};
use paritybit_sim::{ascii_table, parity_table, AsciiRow, ParityRow, Transmission, SAMPLE_WORDS};

const RULE: &str = "============================================================";

#[derive(Parser, Debug)]
#[command(name = "parity-demo")]
struct Args {
    /// Word used for the ASCII example.
    #[arg(long, default_value = "HELLO")]
    word: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let even_msb = ParityCodec::new(ParityMode::Even, ParityPosition::MostSignificant);
    let odd_msb = ParityCodec::new(ParityMode::Odd, ParityPosition::MostSignificant);

    println!("{RULE}");
    println!("Parity Bits for Error Detection");
    println!("{RULE}");

    let data: BitString = "1011001".parse()?;
    for (n, codec) in [(1, even_msb), (2, odd_msb)] {
        let mode = codec.mode;
        let framed = codec.encode(&data);
        println!("\n--- Example {n}: {} Parity ---", capitalize(mode.as_str()));
        println!("Data bits:        {data}");
        println!("Number of 1s:     {}", count_ones(&data));
        let label = format!("{} parity bit:", capitalize(mode.as_str()));
        println!("{label:<17} {}", compute_parity_bit(&data, mode));
        println!("With parity:      {framed}");
        println!("Total 1s:         {} ({mode})", count_ones(&framed));
    }

    println!("\n--- Example 3: Even Parity Examples ---");
    println!("{}", ParityRow::HEADER);
    println!("----------|----|--------|-------------|----------");
    let words = SAMPLE_WORDS
        .iter()
        .map(|w| w.parse())
        .collect::<Result<Vec<BitString>, _>>()?;
    for row in parity_table(&words, even_msb) {
        println!("{row}");
    }

    let data: BitString = "1001101".parse()?;
    println!("\n--- Example 4: Error Detection (No Error) ---");
    println!("--- Simulating Transmission (odd parity) ---");
    println!("{}", Transmission::simulate(&data, odd_msb, &[])?);

    println!("\n--- Example 5: Error Detection (With Error) ---");
    println!("--- Simulating Transmission (odd parity) ---");
    println!("{}", Transmission::simulate(&data, odd_msb, &[3])?);

    println!("\n--- Example 6: Limitation - Multiple Errors ---");
    let data: BitString = "1010101".parse()?;
    let transmitted = append_parity(&data, ParityMode::Even, ParityPosition::MostSignificant);
    println!("Original:         {transmitted}");
    println!("Total 1s:         {} (even parity)", count_ones(&transmitted));
    let received = transmitted.flip_all([1, 3])?;
    println!("\nTwo errors:       {received}");
    println!("Total 1s:         {}", count_ones(&received));
    let ok = check_parity(&received, ParityMode::Even);
    println!("Parity check:     {}", if ok { "PASS" } else { "FAIL" });
    println!("Warning: two errors cancel out - not detected!");

    println!("\n--- Example 7: ASCII with Even Parity ---");
    println!("Word: {}\n", args.word);
    println!("{}", AsciiRow::HEADER);
    println!("-----|---------------|--------|-------------------");
    for row in ascii_table(&args.word, even_msb)? {
        println!("{row}");
    }

    println!("\n--- Example 8: Parity Bit Summary ---");
    println!("\nApplications:");
    for line in [
        "Serial communication (UART)",
        "Memory systems (DRAM)",
        "Storage devices",
        "Network protocols",
    ] {
        println!("  - {line}");
    }
    println!("\nAdvantages:");
    for line in [
        "Simple to implement",
        "Low overhead (1 bit per data word)",
        "Fast computation",
        "Detects single-bit errors reliably",
    ] {
        println!("  + {line}");
    }
    println!("\nLimitations:");
    for line in [
        "Cannot detect even number of errors",
        "Cannot correct errors (only detect)",
        "Cannot identify which bit is wrong",
        "No burst error detection",
    ] {
        println!("  x {line}");
    }

    println!("\n--- Example 9: Even vs Odd Parity ---");
    let data: BitString = "10110".parse()?;
    println!("Data:             {data}");
    println!("Number of 1s:     {}", count_ones(&data));
    for codec in [even_msb, odd_msb] {
        let mode = codec.mode;
        let framed = codec.encode(&data);
        println!();
        let label = format!("{} parity bit:", capitalize(mode.as_str()));
        println!("{label:<17} {}", codec.parity_bit(&data));
        println!(
            "{:<17} {framed} (total 1s: {} - {mode})",
            format!("With {mode} parity:"),
            count_ones(&framed)
        );
    }

    println!("\n{RULE}");
    println!("Key Concepts:");
    println!("- Parity bit: Extra bit for error detection");
    println!("- Even parity: Total 1s should be even");
    println!("- Odd parity: Total 1s should be odd");
    println!("- Detects single-bit errors");
    println!("- Cannot correct errors");
    println!("- Fails with even number of errors");
    println!("{RULE}");
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
