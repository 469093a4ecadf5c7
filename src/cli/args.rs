use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fireflies", version)]
#[command(about = "Fireflies.ai Transcript Downloader", long_about = None)]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    /// Operation mode
    #[arg(value_enum)]
    pub mode: Mode,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Print details and summary of the latest transcript
    Info,
    /// Copy the latest transcript text to the clipboard
    Clipboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        let cli = Cli::try_parse_from(["fireflies", "info"]).unwrap();
        assert_eq!(cli.mode, Mode::Info);
        assert!(!cli.verbose);

        let cli = Cli::try_parse_from(["fireflies", "clipboard", "-v"]).unwrap();
        assert_eq!(cli.mode, Mode::Clipboard);
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let err = Cli::try_parse_from(["fireflies", "download"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_mode_required() {
        assert!(Cli::try_parse_from(["fireflies"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
