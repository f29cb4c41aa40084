use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;

const ROLLBOT_AUTHOR: &str = crate_authors!();
const ROLLBOT_VERSION: &str = crate_version!();
const ROLLBOT_ABOUT: &str = crate_description!();
const ROLLBOT_FLAG_D_SHORT: char = 'd';
const ROLLBOT_FLAG_D_HELP: &str = "Enable Debug logging";
const ROLLBOT_FLAG_N_SHORT: char = 'n';
const ROLLBOT_FLAG_N_HELP: &str = "Name shown as the one rolling";
const ROLLBOT_FLAG_S_SHORT: char = 's';
const ROLLBOT_FLAG_S_HELP: &str = "Seed the dice for reproducible rolls";
const ROLLBOT_FLAG_HISTORY_HELP: &str = "Line history file";
const ROLLBOT_EXPR_HELP: &str = "Roll this command once and exit, e.g. `3d6!5>2`";

#[derive(Parser, Debug)]
#[command(author = ROLLBOT_AUTHOR, version = ROLLBOT_VERSION, about = ROLLBOT_ABOUT)]
pub struct Args {
    #[arg(short = ROLLBOT_FLAG_D_SHORT, long, help = ROLLBOT_FLAG_D_HELP, action)]
    pub debug: bool,

    #[arg(short = ROLLBOT_FLAG_N_SHORT, long, help = ROLLBOT_FLAG_N_HELP, env = "ROLLBOT_NAME", default_value = "player")]
    pub name: String,

    #[arg(short = ROLLBOT_FLAG_S_SHORT, long, help = ROLLBOT_FLAG_S_HELP)]
    pub seed: Option<u64>,

    #[arg(long, help = ROLLBOT_FLAG_HISTORY_HELP, env = "ROLLBOT_HISTORY", default_value = "history")]
    pub history: String,

    #[arg(help = ROLLBOT_EXPR_HELP)]
    pub expr: Vec<String>,
}
