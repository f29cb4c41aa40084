mod cli;
mod helper;
use helper::ReplHelper;

use cli::Parser;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rollbot_lib::roll::Reply;
use rollbot_lib::solver::Solver;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::debug;
use tracing::info;
use tracing::warn;
use tracing::Level;
use tracing_unwrap::OptionExt;

/// Roll `line` for `name`, returning the reply or the error message
fn roll(line: &str, name: &str, generator: &mut StdRng) -> Result<String, String> {
    debug!("Received `{}`", line);
    let reject = |error: rollbot_lib::error::Error| {
        warn!("Rejected `{}`: {:?}", line, error);
        error.to_string()
    };
    let solver = Solver::new(line).map_err(reject)?;
    debug!(
        "Terms {:?} with {:?}",
        solver.command().terms(),
        solver.command().modifier()
    );
    let outcome = solver.solve_with(generator).map_err(reject)?;
    Ok(Reply::new(name, &outcome).to_string())
}

fn main() -> rustyline::Result<()> {
    dotenv::dotenv().ok();
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let mut generator = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut skin = MadSkin::default();
    skin.bold.set_fg(Color::Yellow);
    skin.inline_code.set_fg(Color::Magenta);

    if !args.expr.is_empty() {
        let line = args.expr.join(" ");
        match roll(&line, &args.name, &mut generator) {
            Ok(reply) => println!("{}", skin.inline(&reply)),
            Err(error) => {
                eprintln!("{}", error.bold().red());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: "".to_owned(),
    };
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    if rline.load_history(&args.history).is_err() {
        eprintln!("{}", "repl: warn: no previous history".bold().yellow());
    }
    info!("Rolling as `{}`", args.name);
    let mut count = 1u64;
    loop {
        let prompt = format!("repl: {}> ", count);
        rline.helper_mut().expect_or_log("repl: no helper").colored =
            prompt.bold().green().to_string();
        let readline = rline.readline(&prompt);
        match readline {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                if !line.trim().is_empty() {
                    match roll(&line, &args.name, &mut generator) {
                        Ok(reply) => println!("{}", skin.inline(&reply)),
                        Err(error) => eprintln!("{}", error.bold().red()),
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "repl: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "repl: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("repl: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    rline.append_history(&args.history)
}
