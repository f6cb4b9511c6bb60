use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cinefila_core::query::FilterSelection;
use cinefila_model::LengthBucket;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod session;

#[derive(Parser)]
#[command(
    name = "cinefilactl",
    version,
    about = "Browse the Cinefila film catalogue from the command line"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Config file (TOML or JSON); overrides CINEFILA_CONFIG_PATH
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Site root to fetch the catalogue documents from
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
    /// Local copy of the site; wins over --base-url
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

/// Catalogue filter flags. Repeat a flag to allow several values.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Free-text search over titles, people, loglines and festivals
    #[arg(long, short = 's')]
    pub search: Option<String>,
    #[arg(long = "genre", value_name = "GENRE")]
    pub genres: Vec<String>,
    #[arg(long = "year", value_name = "YEAR")]
    pub years: Vec<String>,
    /// One of short, mid-length or full-length
    #[arg(long = "length", value_name = "LENGTH")]
    pub lengths: Vec<LengthBucket>,
    #[arg(long = "audience", value_name = "AUDIENCE")]
    pub audiences: Vec<String>,
    #[arg(long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,
}

impl FilterArgs {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            search: self.search.clone().unwrap_or_default(),
            genres: self.genres.iter().cloned().collect(),
            years: self.years.iter().cloned().collect(),
            lengths: self.lengths.iter().copied().collect(),
            audiences: self.audiences.iter().cloned().collect(),
            keywords: self.keywords.iter().cloned().collect(),
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List films in catalogue order, one "show more" page at a time
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Number of extra "show more" pages to include
        #[arg(long, default_value_t = 0)]
        more: usize,
        /// Page like the home page preview instead of the catalogue
        #[arg(long)]
        preview: bool,
        /// Ignore paging and print every matching film
        #[arg(long, conflicts_with_all = ["more", "preview"])]
        all: bool,
    },
    /// Show the filter values still selectable under the given filters
    Options {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show one film page by its slug
    Show {
        slug: String,
        /// Check which images load and drop the ones that do not
        #[arg(long)]
        probe: bool,
    },
    /// List films that matched no supplemental entry
    Unranked,
    /// Resolve a site path, including film deep links
    Route { path: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Command::List {
            filters,
            more,
            preview,
            all,
        } => {
            let paging = if all {
                commands::Paging::All
            } else {
                commands::Paging::Window { more, preview }
            };
            commands::list(&global, &filters.selection(), paging).await
        }
        Command::Options { filters } => commands::options(&global, &filters.selection()).await,
        Command::Show { slug, probe } => commands::show(&global, &slug, probe).await,
        Command::Unranked => commands::unranked(&global).await,
        Command::Route { path } => commands::route(&global, &path).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn repeated_flags_build_one_selection() {
        let cli = Cli::try_parse_from([
            "cinefilactl",
            "list",
            "--genre",
            "Drama",
            "--genre",
            "Family",
            "--length",
            "mid-length",
            "-s",
            "wolf",
        ])
        .unwrap();
        let Command::List { filters, .. } = cli.command else {
            panic!("expected list");
        };
        let selection = filters.selection();
        assert_eq!(selection.genres.len(), 2);
        assert!(selection.lengths.contains(&LengthBucket::MidLength));
        assert_eq!(selection.search_term().as_deref(), Some("wolf"));
    }

    #[test]
    fn unknown_length_is_rejected() {
        assert!(Cli::try_parse_from(["cinefilactl", "list", "--length", "epic"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli =
            Cli::try_parse_from(["cinefilactl", "unranked", "--data-dir", "./site", "--json"])
                .unwrap();
        assert!(cli.global.json);
        assert_eq!(cli.global.data_dir, Some(PathBuf::from("./site")));
    }
}
