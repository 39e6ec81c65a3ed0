use std::path::PathBuf;

use clap::{Parser, Subcommand};
use presets::ShaderVariant;

#[derive(Parser, Debug)]
#[command(
    name = "heroshade",
    author,
    version,
    about = "Native landing-hero runtime for the Bona page",
    arg_required_else_help = false
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Hero background variant (`liquid-mesh`, `aurora`, `plasma`).
    /// Overrides the config file.
    #[arg(value_name = "VARIANT", value_parser = parse_variant)]
    pub variant: Option<ShaderVariant>,

    /// Page configuration TOML; defaults to `<config-dir>/heroshade/page.toml`
    /// when present, otherwise the built-in page.
    #[arg(long, value_name = "PATH", env = "HEROSHADE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the window size (e.g. `1280x720`).
    #[arg(long, value_name = "WIDTHxHEIGHT", value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    /// Override the device-pixel-ratio cap from the config file.
    #[arg(long, value_name = "RATIO")]
    pub pixel_ratio_cap: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the hero background variants.
    Variants,
    /// Print the page content model (nav, hero copy, features, footer).
    Content,
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_variant(value: &str) -> Result<ShaderVariant, String> {
    value.parse::<ShaderVariant>().map_err(|err| err.to_string())
}

pub fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let trimmed = value.trim();
    let (width, height) = trimmed
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("invalid size '{trimmed}'; expected WIDTHxHEIGHT"))?;
    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width in '{trimmed}'"))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height in '{trimmed}'"))?;
    if width == 0 || height == 0 {
        return Err(format!("size '{trimmed}' must be non-zero in both dimensions"));
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_variant_argument() {
        let cli = Cli::parse_from(["heroshade", "plasma"]);
        assert_eq!(cli.run.variant, Some(ShaderVariant::Plasma));
        assert!(cli.command.is_none());
    }

    #[test]
    fn rejects_unknown_variants() {
        assert!(Cli::try_parse_from(["heroshade", "vaporwave"]).is_err());
    }

    #[test]
    fn parses_sizes_with_either_separator_case() {
        assert_eq!(parse_size("1280x720"), Ok((1280, 720)));
        assert_eq!(parse_size("1920X1080"), Ok((1920, 1080)));
        assert!(parse_size("1280").is_err());
        assert!(parse_size("0x720").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::parse_from(["heroshade", "variants"]);
        assert!(matches!(cli.command, Some(Command::Variants)));
        let cli = Cli::parse_from(["heroshade", "content"]);
        assert!(matches!(cli.command, Some(Command::Content)));
    }
}
