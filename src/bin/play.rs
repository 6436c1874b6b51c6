//! Interactive Binary
//!
//! Play a three-pile subtraction game against the computer.
//! Whoever takes the last stone loses.
//!
//! Options: --hide-scores, --shuffle, --seed, --memoize, --json, --draw, --verbose
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use nimtree::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting pile sizes (prompted for when omitted or invalid)
    #[arg(num_args = 0..=3, allow_negative_numbers = true)]
    piles: Vec<i64>,
    /// Leave scores out of every listing
    #[arg(long)]
    hide_scores: bool,
    /// List your choices in random order
    #[arg(long)]
    shuffle: bool,
    /// Seed for --shuffle
    #[arg(long)]
    seed: Option<u64>,
    /// Cache scores once computed
    #[arg(long)]
    memoize: bool,
    /// Also print the game path as JSON
    #[arg(long)]
    json: bool,
    /// Draw the explored game tree when the game ends (small boards only)
    #[arg(long)]
    draw: bool,
    /// Log debug detail, including child listings and the takes played
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            scores: !self.hide_scores,
            shuffle: self.shuffle,
            seed: self.seed,
        }
    }
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        }
    }
    /// Piles from the command line, falling back to a prompt.
    fn piles(&self) -> anyhow::Result<Piles> {
        if self.piles.is_empty() {
            return prompt();
        }
        match <[i64; N_PILES]>::try_from(self.piles.as_slice()) {
            Err(_) => log::warn!("expected {} piles, found {}", N_PILES, self.piles.len()),
            Ok(piles) => match Piles::try_from(piles) {
                Ok(piles) if piles.is_empty() => log::warn!("{}", Error::EmptyBoard),
                Ok(piles) => return Ok(piles),
                Err(e) => log::warn!("{}", e),
            },
        }
        prompt()
    }
}

/// Ask until the answer parses into a non-empty board.
fn prompt() -> anyhow::Result<Piles> {
    let input = dialoguer::Input::<String>::new()
        .with_prompt("Enter initial piles")
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            match s.parse::<Piles>() {
                Ok(piles) if piles.is_empty() => Err(Error::EmptyBoard.to_string()),
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string()),
            }
        })
        .interact_text()
        .context("reading initial piles")?;
    Ok(input.parse::<Piles>()?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    nimtree::log(args.level());
    let settings = args.settings();
    let tree = Tree::from(args.piles()?).memoized(args.memoize);
    let mut session = Session::new(tree)?;
    let mut human = Human::from(settings);
    let mut robot = Robot;
    let winner = loop {
        let current = session.current();
        match session.phase() {
            Phase::Awaiting(Side::Human) => {
                let board = session.tree_mut().describe(current, &settings);
                println!("Current Board: {}\n", board);
                if log::log_enabled!(log::Level::Debug) {
                    log::debug!("{}", session.tree_mut().listing(current, &settings));
                }
                match session.step(&mut human) {
                    Err(Error::Abandoned) => {
                        log::warn!("game abandoned");
                        return Ok(());
                    }
                    result => result?,
                };
                let chosen = session.current();
                let chosen = session.tree_mut().describe(chosen, &settings);
                println!("You chose {}\n", chosen);
            }
            Phase::Awaiting(Side::Computer) => {
                session.step(&mut robot)?;
                let chosen = session.current();
                let chosen = session.tree_mut().describe(chosen, &settings);
                println!("Computer chooses {}\n", chosen);
            }
            Phase::Finished { winner } => break winner,
        }
    };
    match winner {
        Side::Human => println!("{}\n", "*** You Win! ***".green().bold()),
        Side::Computer => println!("{}\n", "*** You lose ***".red().bold()),
    }
    println!("Game path: {}", session.transcript(&settings));
    if log::log_enabled!(log::Level::Debug) {
        let takes = session.tree().at(session.current()).history();
        let takes = takes.iter().map(Take::to_string).collect::<Vec<_>>();
        log::debug!("takes: {}", takes.join(", "));
    }
    if args.draw {
        println!("{}", session.tree());
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.path(&settings))?);
    }
    Ok(())
}
