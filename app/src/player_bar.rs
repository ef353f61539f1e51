use chrono::NaiveTime;
use state::PlayerState;

/// One-line rendering of the current playback snapshot.
pub fn view(player: &PlayerState) -> String {
    let episode = match player.current_episode() {
        Some(episode) => episode,
        None => return String::from("Nothing in the queue."),
    };

    let marker = if player.is_playing() { "▶" } else { "⏸" };
    let mut line = format!(
        "{} {} ({}, {}) [{}/{}]",
        marker,
        episode.title(),
        episode.members(),
        format_duration(episode.duration()),
        player.current_index() + 1,
        player.episode_list().len(),
    );

    if player.is_shuffling() {
        line.push_str(" [shuffle]");
    }
    if player.is_looping() {
        line.push_str(" [loop]");
    }

    line
}

// Trick from
// https://gitlab.gnome.org/World/podcasts/-/blob/817203158b9d3736880e08969f406dc7d1d4ebb4/podcasts-gtk/src/widgets/player.rs#L199
fn format_duration(seconds: u32) -> String {
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(NaiveTime::MIN);
    if seconds >= 3600 {
        time.format("%T").to_string()
    } else {
        time.format("%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::Episode;

    fn playing_two() -> PlayerState {
        let mut player = PlayerState::new();
        player
            .play_list(
                vec![
                    Episode::default()
                        .with_title(String::from("Faladev #29"))
                        .with_members(String::from("Diego e Richard"))
                        .with_duration(90),
                    Episode::default()
                        .with_title(String::from("Faladev #30"))
                        .with_members(String::from("Tiago e Pellizzetti"))
                        .with_duration(3981),
                ],
                1,
            )
            .expect("index 1 is valid");
        player
    }

    #[test]
    fn an_empty_queue_renders_a_placeholder() {
        assert_eq!(view(&PlayerState::new()), "Nothing in the queue.");
    }

    #[test]
    fn a_playing_episode_renders_metadata_and_position() {
        let line = view(&playing_two());

        assert!(line.starts_with("▶"));
        assert!(line.contains("Faladev #30"));
        assert!(line.contains("Tiago e Pellizzetti"));
        assert!(line.contains("01:06:21"));
        assert!(line.contains("[2/2]"));
        assert!(!line.contains("[shuffle]"));
        assert!(!line.contains("[loop]"));
    }

    #[test]
    fn transport_flags_show_as_markers() {
        let mut player = playing_two();
        player.set_playing_state(false);
        player.toggle_shuffle();
        player.toggle_loop();

        let line = view(&player);
        assert!(line.starts_with("⏸"));
        assert!(line.contains("[shuffle]"));
        assert!(line.contains("[loop]"));
    }

    #[test]
    fn durations_switch_to_hours_at_an_hour() {
        assert_eq!(format_duration(90), "01:30");
        assert_eq!(format_duration(3599), "59:59");
        assert_eq!(format_duration(3600), "01:00:00");
        assert_eq!(format_duration(3981), "01:06:21");
    }
}
