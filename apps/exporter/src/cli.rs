use std::path::PathBuf;

use clap::Parser;

/// Export VisitWall profiles as vCard contact files.
#[derive(Debug, Parser)]
#[command(name = "visitwall-export", version)]
pub struct Cli {
    /// Config file (default: $CONFIG_PATH or ./config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Directory to write `<username>.vcf` files into
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
    /// Print the contact documents instead of writing files
    #[arg(long, conflicts_with = "out_dir")]
    pub stdout: bool,
    /// Profile JSON files: a bare profile or a `{"data":{"profile":..}}` envelope
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inputs_and_out_dir() {
        let cli = Cli::try_parse_from(["visitwall-export", "--out-dir", "cards", "a.json", "b.json"])
            .unwrap();
        assert_eq!(cli.out_dir, Some(PathBuf::from("cards")));
        assert_eq!(cli.inputs.len(), 2);
        assert!(!cli.stdout);
    }

    #[test]
    fn requires_an_input() {
        assert!(Cli::try_parse_from(["visitwall-export"]).is_err());
    }

    #[test]
    fn stdout_conflicts_with_out_dir() {
        let result =
            Cli::try_parse_from(["visitwall-export", "--stdout", "--out-dir", "x", "a.json"]);
        assert!(result.is_err());
    }
}
