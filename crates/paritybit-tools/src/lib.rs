use clap::{Args, ValueEnum};
use paritybit_core::types::{ParityMode, ParityPosition};
use paritybit_core::ParityCodec;

/// CLI-friendly parity mode.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Even,
    Odd,
}

impl ModeArg {
    pub const fn into_mode(self) -> ParityMode {
        match self {
            Self::Even => ParityMode::Even,
            Self::Odd => ParityMode::Odd,
        }
    }
}

/// CLI-friendly parity bit position.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PositionArg {
    Msb,
    Lsb,
}

impl PositionArg {
    pub const fn into_position(self) -> ParityPosition {
        match self {
            Self::Msb => ParityPosition::MostSignificant,
            Self::Lsb => ParityPosition::LeastSignificant,
        }
    }
}

/// `--mode` and `--position` flags shared by the tools.
#[derive(Args, Debug, Clone, Copy)]
pub struct CodecArgs {
    #[arg(long, value_enum, default_value_t = ModeArg::Even)]
    pub mode: ModeArg,
    #[arg(long, value_enum, default_value_t = PositionArg::Msb)]
    pub position: PositionArg,
}

impl CodecArgs {
    pub const fn codec(self) -> ParityCodec {
        ParityCodec::new(self.mode.into_mode(), self.position.into_position())
    }
}

#[cfg(test)]
mod tests {
    use super::CodecArgs;
    use clap::Parser;
    use paritybit_core::types::{ParityMode, ParityPosition};

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        codec: CodecArgs,
    }

    #[test]
    fn defaults_to_even_msb() {
        let cli = Cli::try_parse_from(["tool"]).unwrap();
        let codec = cli.codec.codec();
        assert_eq!(codec.mode, ParityMode::Even);
        assert_eq!(codec.position, ParityPosition::MostSignificant);
    }

    #[test]
    fn parses_mode_and_position() {
        let cli = Cli::try_parse_from(["tool", "--mode", "odd", "--position", "lsb"]).unwrap();
        let codec = cli.codec.codec();
        assert_eq!(codec.mode, ParityMode::Odd);
        assert_eq!(codec.position, ParityPosition::LeastSignificant);
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["tool", "--mode", "mark"]).is_err());
    }
}
