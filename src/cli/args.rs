use std::path::PathBuf;

use clap::Parser;

use crate::{Config, DateStyle, TitlePolicy};

/// Main CLI application arguments
#[derive(Parser, Debug)]
#[clap(
    name = "pocketnotes",
    version,
    about = "In-memory folders and notes, one screen at a time"
)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// How note text is split into title and content
    #[clap(long, value_enum)]
    pub policy: Option<TitlePolicy>,

    /// How note dates are shown
    #[clap(long, value_enum)]
    pub date_style: Option<DateStyle>,

    /// Read commands from this file instead of standard input
    #[clap(long, value_parser)]
    pub script: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Applies command line overrides on top of a loaded configuration
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(policy) = self.policy {
            config.title_policy = policy;
        }
        if let Some(style) = self.date_style {
            config.date_style = style;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from(["pocketnotes", "--policy", "title-body", "--date-style", "weekday"]);
        let config = cli.apply_to(Config::default());
        assert_eq!(config.title_policy, TitlePolicy::TitleBody);
        assert_eq!(config.date_style, DateStyle::Weekday);
    }

    #[test]
    fn no_overrides_keep_config() {
        let cli = Cli::parse_from(["pocketnotes", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.apply_to(Config::default()), Config::default());
    }
}
