/// Console output for playback sessions
use carousel_playback::{EventSink, PlaybackController, PlaybackEvent, PlaybackState};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Prints one status line per playback event
pub struct ConsoleSink<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: PlaybackEvent) {
        tracing::debug!(?event, "Playback event");
        if let Err(e) = writeln!(self.out, "{event}") {
            tracing::warn!("Failed to write status line: {}", e);
        }
    }
}

/// Multi-line summary of playlist, queue and history
pub fn describe<S: EventSink>(controller: &PlaybackController<S>) -> String {
    let mut text = String::new();

    if controller.playlist().is_empty() {
        text.push_str("The list is empty!\n");
    } else {
        let songs: Vec<String> = controller
            .playlist()
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(text, "Playlist (Circular): {}", songs.join(", "));
    }

    if controller.queue().is_empty() {
        text.push_str("The queue is empty!\n");
    } else {
        let _ = writeln!(text, "Queue elements: {}", join_indices(controller.queue().iter()));
    }

    if controller.history().is_empty() {
        text.push_str("History is empty\n");
    } else {
        let _ = writeln!(text, "History (latest first): {}", join_indices(controller.history().iter()));
    }

    let state = match controller.state() {
        PlaybackState::Empty => "empty",
        PlaybackState::Stopped => "stopped",
        PlaybackState::Playing => "playing",
        PlaybackState::Paused => "paused",
    };
    let shuffle = if controller.is_shuffled() { "on" } else { "off" };
    let _ = writeln!(text, "State: {state}, shuffle {shuffle}");

    text
}

fn join_indices(indices: impl Iterator<Item = usize>) -> String {
    indices
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
