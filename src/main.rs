use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use jungle::core::{load_settings, save_settings, GameSettings};
use jungle::game::ai::AiRunner;
use jungle::game::{reduce, try_reduce, GameAction, GameSnapshot};
use jungle::ui::render::{help_text, render, render_status, render_welcome, rules};
use jungle::ui::{parse_command, Args, Command};

/// What woke the input loop
enum LoopEvent {
    Ai(GameAction),
    Input(Option<String>),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut settings = if args.no_save {
        GameSettings::default()
    } else {
        load_settings()
    };
    args.apply_to(&mut settings);
    if !args.no_save {
        save_settings(&settings);
    }

    run_game(settings).await
}

async fn run_game(settings: GameSettings) -> anyhow::Result<()> {
    let mut snapshot = GameSnapshot::new();
    let mut runner = AiRunner::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", render_welcome(&settings));
    println!("{}", render(&snapshot, &settings));

    loop {
        if let Some(action) = runner.spawn_if_needed(&snapshot, &settings) {
            snapshot = reduce(&snapshot, action, &settings);
            println!("{}", render_status(&snapshot, &settings));
        }

        let event = tokio::select! {
            Some(action) = runner.next_action(), if runner.is_pending() => LoopEvent::Ai(action),
            line = lines.next_line() => LoopEvent::Input(line.context("reading stdin")?),
        };

        let text = match event {
            LoopEvent::Ai(action) => {
                snapshot = reduce(&snapshot, action, &settings);
                println!("{}", render(&snapshot, &settings));
                continue;
            }
            // EOF
            LoopEvent::Input(None) => break,
            LoopEvent::Input(Some(text)) => text,
        };

        match parse_command(&text) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", help_text()),
            Ok(Command::Rules(rank)) => println!("{}", rules(rank)),
            Ok(Command::Show) => println!("{}", render(&snapshot, &settings)),
            Ok(Command::Action(action)) => match try_reduce(&snapshot, action, &settings) {
                Ok(next) => {
                    if next.generation != snapshot.generation {
                        runner.cancel();
                    }
                    snapshot = next;
                    println!("{}", render(&snapshot, &settings));
                }
                Err(e) => println!("{}", e),
            },
            Err(e) => println!("{}", e),
        }
    }

    runner.cancel();
    Ok(())
}
