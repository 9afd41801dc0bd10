use std::future::Future;
use std::path::PathBuf;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use cubekit_core::StickerState;
use cubekit_notation::parse_token;
use cubekit_view::{Command, Engine};
use cubeprefs::{AnimationStyle, Settings};
use eyre::{Context as _, Result, eyre};
use owo_colors::OwoColorize;

/// Cubekit command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Settings file (YAML) layered over the defaults.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves and rotations and print the resulting Kociemba state.
    Apply {
        #[command(flatten)]
        cube: CubeArgs,
    },
    /// Print the Kociemba state of a solved cube.
    Solved {
        /// Number of layers (2 to 7).
        #[arg(short = 'n', long)]
        layer_count: Option<u8>,
    },
    /// Check that a Kociemba state string is well-formed.
    Check {
        /// Kociemba state string.
        state: String,
    },
    /// Print the unfolded sticker net.
    Net {
        #[command(flatten)]
        cube: CubeArgs,

        /// Print plain letters without color.
        #[arg(long)]
        plain: bool,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct CubeArgs {
    /// Number of layers (2 to 7).
    #[arg(short = 'n', long)]
    layer_count: Option<u8>,
    /// Kociemba state to start from instead of solved.
    #[arg(long)]
    state: Option<String>,
    /// Moves and rotations, such as `R U2 x' 2-3Lw`.
    moves: Vec<String>,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let mut settings = Settings::load(args.settings.as_deref())?;
    log::debug!("loaded settings: {settings:?}");

    match args.subcommand {
        Subcommand::Apply { cube } => {
            let stickers = cube.run(&mut settings)?;
            println!("{}", stickers.to_kociemba());
            Ok(())
        }

        Subcommand::Solved { layer_count } => {
            let layer_count = layer_count.unwrap_or(settings.layer_count);
            let stickers = StickerState::solved(layer_count)?;
            println!("{}", stickers.to_kociemba());
            Ok(())
        }

        Subcommand::Check { state } => {
            let stickers = StickerState::from_kociemba_any(&state).wrap_err("invalid state")?;
            let n = stickers.layer_count();
            let solved = match stickers.is_solved() {
                true => "solved",
                false => "scrambled",
            };
            println!("{} {n}x{n}x{n} state ({solved})", "valid".green());
            Ok(())
        }

        Subcommand::Net { cube, plain } => {
            let stickers = cube.run(&mut settings)?;
            print!("{}", crate::net::render(&stickers, !plain));
            Ok(())
        }
    }
}

impl CubeArgs {
    /// Builds an instant-turning engine, loads the starting state, applies
    /// the moves, and returns the final stickers.
    pub(crate) fn run(self, settings: &mut Settings) -> Result<StickerState> {
        if let Some(layer_count) = self.layer_count {
            settings.layer_count = layer_count;
        } else if let Some(state) = &self.state {
            // Infer the size from the state string.
            settings.layer_count = StickerState::from_kociemba_any(state)
                .wrap_err("invalid state")?
                .layer_count();
        }
        settings.animation_speed_ms = 0;
        settings.animation_style = AnimationStyle::Fixed;
        let mut engine = Engine::new(settings.clone())?;

        if let Some(state) = self.state {
            run_command(&mut engine, Command::SetState(state)).wrap_err("error loading state")?;
        }
        for token in self.moves.iter().flat_map(|s| s.split_whitespace()) {
            let command = match parse_token(token) {
                Ok(t) if t.family.is_rotation() => Command::Rotate(token.to_owned()),
                _ => Command::Movement(token.to_owned()),
            };
            run_command(&mut engine, command).wrap_err_with(|| format!("error applying {token:?}"))?;
        }

        Ok(engine.sticker_state()?)
    }
}

/// Submits a command and updates the engine until it resolves.
fn run_command(engine: &mut Engine, command: Command) -> Result<String> {
    let mut future = pin!(engine.submit(command));
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(result) = future.as_mut().poll(&mut cx) {
            return result.map_err(|e| eyre!(e));
        }
        engine.update();
    }
}
