//! Integration tests for the playback controller
//!
//! These run the controller through complete listening sessions and check
//! what was reported, what is current, and what history holds afterwards.

use carousel_playback::{
    Container, MemorySink, PlaybackController, PlaybackError, PlaybackEvent, PlaybackState,
    Playlist, Song,
};
use rand::{rngs::StdRng, SeedableRng};

// ===== Test Helpers =====

fn demo_playlist() -> Playlist {
    vec![
        Song::new("Song1", "Artist1", 200),
        Song::new("Song2", "Artist2", 180),
        Song::new("Song3", "Artist3", 210),
        Song::new("Song4", "Artist4", 240),
    ]
    .into_iter()
    .collect()
}

fn demo_controller() -> PlaybackController<MemorySink> {
    PlaybackController::with_rng(demo_playlist(), MemorySink::new(), StdRng::seed_from_u64(2024))
}

fn history_of(controller: &PlaybackController<MemorySink>) -> Vec<usize> {
    let mut indices: Vec<usize> = controller.history().iter().collect();
    indices.reverse(); // oldest first
    indices
}

fn now_playing_title(event: &PlaybackEvent) -> Option<&str> {
    match event {
        PlaybackEvent::NowPlaying { song, .. } => Some(song.title.as_str()),
        _ => None,
    }
}

// ===== Scenarios =====

#[test]
fn linear_playback_and_back() {
    let mut controller = demo_controller();

    controller.play().unwrap();
    assert_eq!(controller.current_song().unwrap().title, "Song1");
    assert_eq!(history_of(&controller), vec![0]);

    controller.next_song().unwrap();
    assert_eq!(controller.current_song().unwrap().title, "Song2");
    assert_eq!(history_of(&controller), vec![0, 1]);

    controller.next_song().unwrap();
    assert_eq!(controller.current_song().unwrap().title, "Song3");
    assert_eq!(history_of(&controller), vec![0, 1, 2]);

    controller.previous_song().unwrap();
    assert_eq!(controller.current_song().unwrap().title, "Song2");
    assert_eq!(controller.history().peek(), Ok(1));
    assert_eq!(history_of(&controller), vec![0, 1]);

    assert_eq!(
        controller.sink().lines(),
        vec![
            "Now Playing: Song1 by Artist1 [200s]",
            "Now Playing: Song2 by Artist2 [180s]",
            "Now Playing: Song3 by Artist3 [210s]",
            "Now Playing: Song2 by Artist2 [180s]",
        ]
    );
}

#[test]
fn queued_songs_bypass_linear_order() {
    let mut controller = demo_controller();
    controller.play().unwrap();

    controller.add_to_queue(1).unwrap();
    controller.add_to_queue(3).unwrap();

    assert_eq!(controller.next_song(), Ok(1));
    assert_eq!(controller.current_song().unwrap().title, "Song2");

    assert_eq!(controller.next_song(), Ok(3));
    assert_eq!(controller.current_song().unwrap().title, "Song4");

    // Queue drained, shuffle off: structurally after Song4 is Song1
    assert_eq!(controller.next_song(), Ok(0));
    assert_eq!(controller.current_song().unwrap().title, "Song1");
}

#[test]
fn full_demo_session() {
    let mut controller = demo_controller();

    controller.play().unwrap();
    controller.next_song().unwrap();
    controller.next_song().unwrap();
    controller.previous_song().unwrap();

    controller.add_to_queue(1).unwrap();
    controller.add_to_queue(3).unwrap();
    controller.next_song().unwrap();
    controller.next_song().unwrap();
    controller.next_song().unwrap();

    assert!(controller.toggle_shuffle());
    let first = controller.next_song().unwrap();
    let second = controller.next_song().unwrap();
    assert!(first < 4 && second < 4);
    assert!(!controller.toggle_shuffle());

    // After shuffle is off, playback continues from wherever shuffle left it
    let expected = (second + 1) % 4;
    assert_eq!(controller.next_song(), Ok(expected));

    let titles: Vec<&str> = controller
        .sink()
        .events()
        .iter()
        .filter_map(now_playing_title)
        .take(7)
        .collect();
    assert_eq!(
        titles,
        vec!["Song1", "Song2", "Song3", "Song2", "Song2", "Song4", "Song1"]
    );
}

#[test]
fn invalid_queue_request_leaves_queue_untouched() {
    let mut controller = demo_controller();
    controller.add_to_queue(2).unwrap();

    for bad in [4, 5, 100, usize::MAX] {
        assert_eq!(
            controller.add_to_queue(bad),
            Err(PlaybackError::InvalidIndex { index: bad, len: 4 })
        );
    }

    assert_eq!(controller.queue().len(), 1);
    assert_eq!(controller.queue().iter().collect::<Vec<_>>(), vec![2]);
    assert_eq!(
        controller.sink().last().map(ToString::to_string).as_deref(),
        Some("Invalid song index!")
    );
}

#[test]
fn empty_playlist_rejects_everything() {
    let mut controller =
        PlaybackController::with_rng(Playlist::new(), MemorySink::new(), StdRng::seed_from_u64(1));
    let empty = Err(PlaybackError::EmptyContainer(Container::Playlist));

    assert_eq!(controller.play(), empty);
    assert_eq!(controller.next_song(), empty);
    assert_eq!(controller.previous_song(), empty);
    assert!(controller.pause().is_err());
    assert!(controller.add_to_queue(0).is_err());
    assert!(controller.remove_from_queue().is_err());

    assert_eq!(controller.state(), PlaybackState::Empty);
    assert!(controller.queue().is_empty());
    assert!(controller.history().is_empty());
    assert_eq!(
        controller.sink().lines(),
        vec![
            "Playlist is empty!",
            "Playlist is empty!",
            "Playlist is empty!",
            "Nothing to pause",
            "Invalid song index!",
            "The queue is empty!",
        ]
    );
}

#[test]
fn back_and_forth_does_not_grow_history() {
    let mut controller = demo_controller();
    controller.play().unwrap();
    controller.next_song().unwrap();

    for _ in 0..50 {
        controller.previous_song().unwrap();
        controller.next_song().unwrap();
    }

    assert_eq!(history_of(&controller), vec![0, 1]);
}

#[test]
fn removing_queued_song_skips_it() {
    let mut controller = demo_controller();
    controller.play().unwrap();
    controller.add_to_queue(3).unwrap();
    controller.add_to_queue(2).unwrap();

    assert_eq!(controller.remove_from_queue(), Ok(3));
    assert_eq!(controller.next_song(), Ok(2));
    assert_eq!(
        controller.sink().lines()[3],
        "Song removed from queue: Song4"
    );
}

#[test]
fn songs_added_mid_session_join_the_cycle() {
    let mut controller = demo_controller();
    controller.play().unwrap();
    controller.add_to_queue(3).unwrap();
    controller.next_song().unwrap();

    let index = controller.add_song(Song::new("Song5", "Artist5", 150));
    assert_eq!(index, 4);

    // From Song4 the cycle now runs through Song5 before wrapping
    assert_eq!(controller.next_song(), Ok(4));
    assert_eq!(controller.next_song(), Ok(0));
}

#[test]
fn pause_resume_cycle() {
    let mut controller = demo_controller();
    controller.play().unwrap();

    controller.pause().unwrap();
    assert!(controller.pause().is_err());
    controller.play().unwrap();
    controller.pause().unwrap();

    assert_eq!(controller.state(), PlaybackState::Paused);
    assert_eq!(controller.history().len(), 1);
    assert_eq!(
        controller.sink().lines(),
        vec![
            "Now Playing: Song1 by Artist1 [200s]",
            "Playback paused",
            "Nothing to pause",
            "Resuming...",
            "Playback paused",
        ]
    );
}
