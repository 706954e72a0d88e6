//! Play command - Run games between the AI and an opponent

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    ai::{DecisionTreeAi, GameRecord, RandomAi, play_game},
    app::{OpponentKind, PlayConfig},
    cli::output::{create_game_progress, print_board, print_kv, print_section, print_subsection},
    ports::Decider,
    tictactoe::{GameOutcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play games against the decision-tree AI")]
pub struct PlayArgs {
    /// Number of games to play
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Opponent type
    #[arg(long, short = 'o', value_enum)]
    pub opponent: Option<OpponentKind>,

    /// Mark the AI plays
    #[arg(long)]
    pub ai: Option<Player>,

    /// Which mark makes the first move in each game
    #[arg(long = "first-player")]
    pub first_player: Option<Player>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Games won, drawn and lost from the AI's side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl Tally {
    pub fn record(&mut self, record: &GameRecord, ai_mark: Player) {
        match record.score_for(ai_mark) {
            1 => self.wins += 1,
            0 => self.draws += 1,
            _ => self.losses += 1,
        }
    }
}

/// Merge CLI arguments over the loaded configuration
pub fn resolve(args: &PlayArgs, config: &PlayConfig) -> Result<PlayConfig> {
    let mut resolved = config.clone();
    if let Some(games) = args.games {
        resolved = resolved.with_games(games);
    }
    if let Some(opponent) = args.opponent {
        resolved = resolved.with_opponent(opponent);
    }
    if let Some(ai) = args.ai {
        resolved = resolved.with_ai_mark(ai);
    }
    if let Some(first) = args.first_player {
        resolved = resolved.with_first_player(first);
    }
    if let Some(seed) = args.seed {
        resolved = resolved.with_seed(seed);
    }
    if args.no_progress {
        resolved = resolved.with_progress(false);
    }
    resolved.validate()?;
    Ok(resolved)
}

/// Play `config.games` games and return every record with the AI's tally
pub fn run_games(config: &PlayConfig) -> Result<(Vec<GameRecord>, Tally)> {
    let mut ai = DecisionTreeAi::new();
    let mut opponent: Box<dyn Decider> = match config.opponent {
        OpponentKind::DecisionTree => Box::new(DecisionTreeAi::with_name("DecisionTree (opponent)")),
        OpponentKind::Random => Box::new(match config.seed {
            Some(seed) => RandomAi::with_seed(seed),
            None => RandomAi::from_entropy(),
        }),
    };

    let progress = if config.progress && config.games > 1 {
        Some(create_game_progress(config.games as u64)?)
    } else {
        None
    };

    let mut records = Vec::with_capacity(config.games);
    let mut tally = Tally::default();
    for _ in 0..config.games {
        let record = match config.ai_mark {
            Player::X => play_game(config.first_player, &mut ai, opponent.as_mut())?,
            Player::O => play_game(config.first_player, opponent.as_mut(), &mut ai)?,
        };
        tally.record(&record, config.ai_mark);
        if let Some(pb) = &progress {
            pb.set_message(format!("W{} D{} L{}", tally.wins, tally.draws, tally.losses));
            pb.inc(1);
        }
        records.push(record);
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    info!(
        games = config.games,
        wins = tally.wins,
        draws = tally.draws,
        losses = tally.losses,
        "finished games"
    );
    Ok((records, tally))
}

pub fn execute(args: PlayArgs, config: &PlayConfig) -> Result<()> {
    let config = resolve(&args, config)?;

    print_section("Play");
    print_kv("AI plays", &config.ai_mark.to_string());
    print_kv("Opponent", &config.opponent.to_string());
    print_kv("First player", &config.first_player.to_string());
    print_kv("Games", &config.games.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let (records, tally) = run_games(&config)?;

    for (i, record) in records.iter().enumerate() {
        let outcome = match record.outcome {
            GameOutcome::Win(player) => format!("{player} wins"),
            GameOutcome::Draw => "draw".to_string(),
        };
        print_subsection(&format!("Game {} ({outcome})", i + 1));
        print_board(&record.board);
    }

    print_subsection("Results (AI perspective)");
    print_kv("Wins", &tally.wins.to_string());
    print_kv("Draws", &tally.draws.to_string());
    print_kv("Losses", &tally.losses.to_string());

    Ok(())
}
