//! Yut Nori terminal front-end.
//!
//! Plays one game on stdin/stdout. Human seats type commands; AI seats act
//! after the configured think/move pauses.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rust_yut::rules::Sticks;
use rust_yut::{
    ActionOutcome, GameContext, GameMode, Notice, Pacer, PacingCue, Phase, PieceId, Position,
    SessionConfig, SessionState, SharedContext, YutNoriSession,
};

#[derive(Parser)]
#[command(name = "yut")]
#[command(about = "Play Yut Nori in the terminal", long_about = None)]
struct Cli {
    /// `single` (against the computer) or `multi` (two humans)
    #[arg(long, default_value = "single")]
    mode: GameMode,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Session config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip animations and AI pauses
    #[arg(long, default_value = "false")]
    instant: bool,
}

fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SessionConfig::default(),
    };
    if cli.instant {
        config = SessionConfig {
            seed: config.seed,
            win_bonus: config.win_bonus,
            ..SessionConfig::instant()
        };
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn render(state: &SessionState) {
    println!();
    for (_, player) in state.players.iter() {
        let pieces: Vec<String> = player
            .pieces()
            .iter()
            .map(|piece| match piece.position {
                Position::Finished => format!("{}:home", piece.id.slot),
                Position::Track(index) => format!("{}:{index:>2}", piece.id.slot),
            })
            .collect();
        let marker = if player.id == state.current_player { '>' } else { ' ' };
        println!(
            "{marker} {:<9} [{}]  finished {}/4",
            player.name,
            pieces.join(" "),
            player.finished_count()
        );
    }
}

fn describe(notice: Notice, state: &SessionState) -> String {
    let name = |id| state.player(id).map_or_else(|| id.to_string(), |p| p.name.clone());
    match notice {
        Notice::GameStarted { player } => format!("{} goes first.", name(player)),
        Notice::RollAgain { outcome } => format!("{outcome}! Move a piece, then roll again."),
        Notice::SelectPiece { outcome } => format!("{outcome}. Choose a piece to move."),
        Notice::PieceFinished { piece } => format!("Piece {piece} made it home."),
        Notice::PieceCaptured { count } => format!("Captured {count} piece(s)! Roll again."),
        Notice::TurnPassed { player } => format!("{}'s turn.", name(player)),
        Notice::PlayerWon { player } => format!("{} wins!", name(player)),
        Notice::Abandoned => "Game abandoned.".to_string(),
    }
}

/// Flicker random stick frames until the toss animation runs out.
fn animate_toss(session: &mut YutNoriSession, pacer: &Pacer) {
    let config = session.config().clone();
    if config.toss_animation_ms == 0 {
        return;
    }
    let frame = Duration::from_millis(config.animation_frame_ms.max(1));
    pacer.schedule(PacingCue::TossAnimation, config.toss_animation());

    let started = Instant::now();
    loop {
        let sticks = draw_sticks(&session.animation_frame());
        print!("\r  {sticks}");
        let _ = io::stdout().flush();
        if pacer.wait(frame).is_some() || started.elapsed() > config.toss_animation() + frame {
            break;
        }
    }
    println!();
}

fn report(outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Rolled(toss) => {
            let sticks = draw_sticks(&toss.sticks);
            println!("  {sticks}  => {} ({:+})", toss.outcome, toss.outcome.delta());
        }
        ActionOutcome::Moved(result) => println!("  {} -> {}", result.piece, result.position),
    }
}

fn draw_sticks(sticks: &Sticks) -> String {
    sticks.iter().map(|&up| if up { '|' } else { '-' }).collect()
}

fn read_command(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_ascii_lowercase())),
        None => Ok(None),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut session = YutNoriSession::builder()
        .mode(cli.mode)
        .config(config)
        .build(GameContext::new())?;
    let pacer = Pacer::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Yut Nori: race all four pieces home. Commands: `r` roll, `0`-`3` move, `q` quit.");

    while !session.state().is_over() {
        render(session.state());
        if let Some(notice) = session.state().notice {
            println!("{}", describe(notice, session.state()));
        }

        if session.is_ai_turn() {
            if let Some((cue, delay)) = session.ai_delay() {
                pacer.schedule(cue, delay);
                pacer.wait(delay + Duration::from_secs(1));
            }
            if session.state().phase == Phase::AwaitingRoll {
                animate_toss(&mut session, &pacer);
            }
            if let Some(outcome) = session.step_ai()? {
                report(&outcome);
            }
            continue;
        }

        let actor = session.state().current_player;
        let prompt = match session.state().phase {
            Phase::AwaitingRoll => "roll> ",
            _ => "piece> ",
        };
        let Some(command) = read_command(&mut lines, prompt)? else {
            session.abandon();
            break;
        };

        let action = match command.as_str() {
            "q" | "quit" => {
                pacer.cancel_all();
                session.abandon();
                break;
            }
            "" | "r" | "roll" if session.state().phase == Phase::AwaitingRoll => {
                animate_toss(&mut session, &pacer);
                rust_yut::Action::Roll
            }
            slot => match slot.parse::<u8>() {
                Ok(slot) => rust_yut::Action::SelectAndMove(PieceId::new(actor, slot)),
                Err(_) => {
                    println!("Unknown command `{slot}`.");
                    continue;
                }
            },
        };

        match session.submit(actor, action) {
            Ok(outcome) => report(&outcome),
            Err(err) => println!("Can't do that: {err}."),
        }
    }

    render(session.state());
    if let Some(notice) = session.state().notice {
        println!("{}", describe(notice, session.state()));
    }
    let context = session.context().state();
    println!("Score: {}  Level: {}", context.current_score, context.current_level);

    if session.result().is_none() {
        bail!("session stopped without a result");
    }
    Ok(())
}
