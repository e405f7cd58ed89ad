/// Scripted playback commands
use crate::console::describe;
use crate::error::CliError;
use carousel_playback::{EventSink, PlaybackController, PlaybackError};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// One step of a playback script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Pause,
    Next,
    Previous,
    Shuffle,
    /// Queue the song at this playlist index
    Queue(usize),
    /// Drop the head of the queue
    Dequeue,
    /// Print playlist, queue and history
    Show,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "play" => Ok(Command::Play),
            "pause" => Ok(Command::Pause),
            "next" => Ok(Command::Next),
            "prev" | "previous" => Ok(Command::Previous),
            "shuffle" => Ok(Command::Shuffle),
            "dequeue" => Ok(Command::Dequeue),
            "show" => Ok(Command::Show),
            _ => match s.strip_prefix("queue:") {
                Some(index) => index
                    .parse()
                    .map(Command::Queue)
                    .map_err(|_| CliError::Command(format!("bad queue index in '{s}'"))),
                None => Err(CliError::Command(s)),
            },
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Play => f.write_str("play"),
            Command::Pause => f.write_str("pause"),
            Command::Next => f.write_str("next"),
            Command::Previous => f.write_str("prev"),
            Command::Shuffle => f.write_str("shuffle"),
            Command::Queue(index) => write!(f, "queue:{index}"),
            Command::Dequeue => f.write_str("dequeue"),
            Command::Show => f.write_str("show"),
        }
    }
}

/// Outcome counts for a script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Apply a single command
///
/// `Show` writes to `out`; everything else reports through the
/// controller's sink.
pub fn execute<S: EventSink>(
    controller: &mut PlaybackController<S>,
    command: Command,
    out: &mut impl Write,
) -> io::Result<Result<(), PlaybackError>> {
    let result = match command {
        Command::Play => controller.play().map(|_| ()),
        Command::Pause => controller.pause(),
        Command::Next => controller.next_song().map(|_| ()),
        Command::Previous => controller.previous_song().map(|_| ()),
        Command::Shuffle => {
            controller.toggle_shuffle();
            Ok(())
        }
        Command::Queue(index) => controller.add_to_queue(index),
        Command::Dequeue => controller.remove_from_queue().map(|_| ()),
        Command::Show => {
            out.write_all(describe(controller).as_bytes())?;
            Ok(())
        }
    };
    Ok(result)
}

/// Run commands in order
///
/// Playback errors are recoverable: they are counted and logged, and the
/// script carries on. Only a failed write to `out` aborts the run.
pub fn run_script<S: EventSink>(
    controller: &mut PlaybackController<S>,
    commands: &[Command],
    out: &mut impl Write,
) -> io::Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();

    for &command in commands {
        summary.executed += 1;
        if let Err(e) = execute(controller, command, out)? {
            summary.failed += 1;
            tracing::debug!(%command, "Command rejected: {}", e);
        }
    }

    Ok(summary)
}

/// The built-in demonstration, as titled sections
pub fn demo_sections() -> Vec<(&'static str, Vec<Command>)> {
    vec![
        (
            "Testing Linear Playback:",
            vec![Command::Play, Command::Next, Command::Next, Command::Previous],
        ),
        (
            "Testing Queue Functionality:",
            vec![
                Command::Queue(1),
                Command::Queue(3),
                Command::Next,
                Command::Next,
                Command::Next,
            ],
        ),
        (
            "Testing Shuffle Mode:",
            vec![
                Command::Shuffle,
                Command::Next,
                Command::Next,
                Command::Shuffle,
                Command::Next,
            ],
        ),
    ]
}
