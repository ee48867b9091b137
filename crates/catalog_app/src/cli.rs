use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Create and edit catalog products")]
pub struct Cli {
    /// RON config file; defaults to ./catalog.ron when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Backend base URL, overriding config and API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    /// Also write the log to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the categories a product can belong to.
    Categories,
    /// Create a product and upload its images.
    Create(CreateArgs),
    /// Edit an existing product.
    Edit(EditArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Category id, as listed by `catalog categories`.
    #[arg(long)]
    pub category: Option<u64>,
    #[arg(long, default_value = "")]
    pub price: String,
    /// Image to upload; repeat for several.
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    pub id: u64,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<u64>,
    #[arg(long)]
    pub price: Option<String>,
    /// Detach an existing image by id; repeat for several.
    #[arg(long = "remove-image")]
    pub remove_images: Vec<u64>,
    /// New image to upload; repeat for several.
    #[arg(long = "image")]
    pub images: Vec<PathBuf>,
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
    fn create_collects_repeated_images() {
        let cli = Cli::try_parse_from([
            "catalog", "create", "--title", "Lamp", "--category", "3", "--image", "a.png",
            "--image", "b.png",
        ])
        .unwrap();
        match cli.command {
            Command::Create(args) => {
                assert_eq!(args.category, Some(3));
                assert_eq!(args.images.len(), 2);
                assert_eq!(args.price, "");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn edit_takes_positional_id_and_removals() {
        let cli = Cli::try_parse_from([
            "catalog",
            "edit",
            "42",
            "--remove-image",
            "7",
            "--api-url",
            "http://cms:1337",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://cms:1337"));
        match cli.command {
            Command::Edit(args) => {
                assert_eq!(args.id, 42);
                assert_eq!(args.remove_images, vec![7]);
                assert!(args.title.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
