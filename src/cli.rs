use clap::{Parser, Subcommand};

/// Point numbers start at 1, as in the interactive session.
fn point_number() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
}

#[derive(Parser, Debug)]
#[command(name = "climate-tutor")]
#[command(version)]
#[command(about = "Climate-justice curriculum browser with a map-grounded study assistant", long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, global = true, default_value = climate_tutor::config::DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all curriculum sections
    Sections,

    /// Show one section with a point expanded
    Show {
        /// Section id (e.g. environmental)
        id: String,

        /// Point number to expand, starting at 1
        #[arg(short, long, default_value = "1", value_parser = point_number())]
        point: usize,
    },

    /// Filter sections by a free-text query
    Search {
        /// Query text; topic words such as بيئة or اقتصاد match whole dimensions
        query: Vec<String>,
    },

    /// Print the embedded-map URL for a point or one of its landmarks
    Map {
        /// Section id
        id: String,

        /// Point number, starting at 1
        #[arg(short, long, default_value = "1", value_parser = point_number())]
        point: usize,

        /// Landmark name within the point's map focus
        #[arg(short, long)]
        landmark: Option<String>,
    },

    /// Print a web-search link for the query (or the default phrase)
    WebSearch {
        query: Vec<String>,
    },

    /// Ask the assistant a single question
    Ask {
        question: Vec<String>,
    },

    /// Multi-turn chat with the assistant (one question per line)
    Chat,

    /// Interactive study session: search, sections, activities, and chat
    Explore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_defaults_to_first() {
        let cli = Cli::try_parse_from(["climate-tutor", "show", "economic"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { point: 1, .. }));
    }

    #[test]
    fn test_point_zero_rejected() {
        assert!(Cli::try_parse_from(["climate-tutor", "show", "economic", "--point", "0"]).is_err());
        assert!(Cli::try_parse_from(["climate-tutor", "map", "environmental", "-p", "0"]).is_err());

        let cli = Cli::try_parse_from(["climate-tutor", "map", "environmental", "-p", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Map { point: 2, .. }));
    }
}
