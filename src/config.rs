//! Command-line and environment configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::engine::{ClassifyOptions, EngineConfig};
use crate::search::MatchOptions;

#[derive(Debug, Clone, Parser)]
#[command(name = "menu-server", version, about = "Allergen-aware menu search server")]
pub struct Args {
    /// Menu JSON file
    #[arg(long, env = "MENU_FILE_PATH", default_value = "menu.json")]
    pub menu: PathBuf,

    #[arg(long, env = "MENU_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "MENU_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory of static files served at `/` (chat page, assets)
    #[arg(long, env = "MENU_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Accept near-miss spellings by edit distance
    #[arg(
        long,
        env = "MENU_EDIT_DISTANCE",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub edit_distance: bool,

    /// Also flag ingredients whose name matches a term
    #[arg(
        long,
        env = "MENU_MATCH_INGREDIENT_NAMES",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub match_ingredient_names: bool,

    /// Also flag sides whose name matches a term
    #[arg(long, env = "MENU_MATCH_SIDE_NAMES", default_value_t = false, action = ArgAction::Set)]
    pub match_side_names: bool,

    /// Emit logs as JSON
    #[arg(long, env = "MENU_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl Args {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            matcher: MatchOptions {
                edit_distance: self.edit_distance,
            },
            classify: ClassifyOptions {
                match_ingredient_names: self.match_ingredient_names,
                match_side_names: self.match_side_names,
            },
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
