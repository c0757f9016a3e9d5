//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are accepted before or after the subcommand
//! - `--gift` names the JSON gift document every command works on
//! - Edits are applied to the loaded gift and the result is printed; the file is left untouched

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Giftbox - query and edit gifts of sweets
#[derive(Parser, Debug)]
#[command(name = "giftbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./giftbox.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Gift document (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub gift: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all items in gift order
    List,

    /// Show the item with the given id
    Get {
        /// Item id
        id: u32,
    },

    /// List sweets whose sugar weight lies in [MIN, MAX] grams
    Sugar {
        /// Lower bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        /// Upper bound (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max: f64,
    },

    /// List items ordered by a sweet attribute
    Order {
        /// name, manufacturer, price, weight, sugar-weight or a numeric code
        /// (defaults to display.default_order)
        #[arg(allow_negative_numbers = true)]
        rule: Option<String>,
    },

    /// Add an item, merging it with a line for the same sweet
    Add {
        /// Gift item document (JSON)
        #[arg(long, value_name = "FILE")]
        item: PathBuf,
    },

    /// Replace the item with the same id, or append it
    Update {
        /// Gift item document (JSON)
        #[arg(long, value_name = "FILE")]
        item: PathBuf,
    },

    /// Remove the item with the given id
    Delete {
        /// Item id
        id: u32,
    },

    /// Show item count, sweet count, total weight and total price
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::try_parse_from(["giftbox", "--gift", "gift.json", "list"]).unwrap();
        assert_eq!(cli.gift, PathBuf::from("gift.json"));
        assert!(matches!(cli.command, Commands::List));
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_get() {
        let cli = Cli::try_parse_from(["giftbox", "-g", "gift.json", "get", "3"]).unwrap();
        if let Commands::Get { id } = cli.command {
            assert_eq!(id, 3);
        } else {
            panic!("Expected Get command");
        }
    }

    #[test]
    fn test_cli_parse_sugar_range() {
        let cli = Cli::try_parse_from([
            "giftbox", "--gift", "g.json", "sugar", "--min", "10", "--max", "20.5",
        ])
        .unwrap();
        if let Commands::Sugar { min, max } = cli.command {
            assert_eq!(min, 10.0);
            assert_eq!(max, 20.5);
        } else {
            panic!("Expected Sugar command");
        }
    }

    #[test]
    fn test_cli_parse_order_rule_is_optional() {
        let cli = Cli::try_parse_from(["giftbox", "--gift", "g.json", "order"]).unwrap();
        assert!(matches!(cli.command, Commands::Order { rule: None }));

        let cli = Cli::try_parse_from(["giftbox", "--gift", "g.json", "order", "price"]).unwrap();
        if let Commands::Order { rule } = cli.command {
            assert_eq!(rule.as_deref(), Some("price"));
        } else {
            panic!("Expected Order command");
        }
    }

    #[test]
    fn test_cli_parse_add_item_file() {
        let cli =
            Cli::try_parse_from(["giftbox", "--gift", "g.json", "add", "--item", "item.json"])
                .unwrap();
        if let Commands::Add { item } = cli.command {
            assert_eq!(item, PathBuf::from("item.json"));
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "giftbox", "--gift", "g.json", "stats", "--json", "-vv", "--config", "c.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn test_cli_requires_gift() {
        assert!(Cli::try_parse_from(["giftbox", "list"]).is_err());
    }

    #[test]
    fn test_cli_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["giftbox", "--gift", "g.json", "delete", "one"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
