mod header;
mod player_bar;

use async_std::stream::StreamExt;
use async_std::task;
use header::Header;
use state::{CurrentState, Episode, StateAction};
use std::io::{self, BufRead};
use std::sync::Arc;

fn demo_episodes() -> Vec<Episode> {
    vec![
        Episode::default()
            .with_title(String::from(
                "Como começar na programação em 2021 do jeito certo",
            ))
            .with_members(String::from("Tiago, Diego e Pellizzetti"))
            .with_thumbnail(String::from("https://example.com/capas/comecar-2021.jpg"))
            .with_duration(3981)
            .with_url(String::from("https://example.com/audio/comecar-2021.mp3")),
        Episode::default()
            .with_title(String::from("O que é um bom código?"))
            .with_members(String::from("Diego e Richard"))
            .with_thumbnail(String::from("https://example.com/capas/bom-codigo.jpg"))
            .with_duration(2491)
            .with_url(String::from("https://example.com/audio/bom-codigo.mp3")),
        Episode::default()
            .with_title(String::from("A importância da contribuição em Open Source"))
            .with_members(String::from("Diego e Richard"))
            .with_thumbnail(String::from("https://example.com/capas/open-source.jpg"))
            .with_duration(2880)
            .with_url(String::from("https://example.com/audio/open-source.mp3")),
    ]
}

fn print_help() {
    println!("play <n>    play one episode from the list");
    println!("queue [n]   play the whole list, starting at n (default 0)");
    println!("next        skip forward (random position when shuffling)");
    println!("prev        skip backward");
    println!("toggle      flip play/pause");
    println!("loop        flip looping");
    println!("shuffle     flip shuffling");
    println!("stop        mark playback as stopped");
    println!("clear       empty the queue");
    println!("list        show the episode list");
    println!("quit        exit");
}

fn main() {
    pretty_env_logger::init();

    let (current, mut waiter) = CurrentState::new();

    println!("{}", Header.view());
    println!("Type `help` for commands.");

    let episodes = demo_episodes();

    let render_state = Arc::clone(&current);
    task::spawn(async move {
        while waiter.next().await.is_some() {
            println!("{}", player_bar::view(render_state.get().player()));
        }
    });

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };

        let mut words = line.split_whitespace();
        match words.next() {
            Some("play") => {
                let episode = words
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .and_then(|n| episodes.get(n).cloned());
                match episode {
                    Some(episode) => current.update(vec![StateAction::Play(episode)]),
                    None => println!("usage: play <0..{}>", episodes.len() - 1),
                }
            }
            Some("queue") => {
                let index = words.next().and_then(|n| n.parse().ok()).unwrap_or(0);
                match StateAction::play_list(episodes.clone(), index) {
                    Ok(action) => current.update(vec![action]),
                    Err(err) => println!("{}", err),
                }
            }
            Some("next") => current.update(vec![StateAction::PlayNext]),
            Some("prev") => current.update(vec![StateAction::PlayPrevious]),
            Some("toggle") => current.update(vec![StateAction::TogglePlay]),
            Some("loop") => current.update(vec![StateAction::ToggleLoop]),
            Some("shuffle") => current.update(vec![StateAction::ToggleShuffle]),
            Some("stop") => current.update(vec![StateAction::SetPlayingState(false)]),
            Some("clear") => current.update(vec![StateAction::ClearPlayerState]),
            Some("list") => {
                for (index, episode) in episodes.iter().enumerate() {
                    println!("{}. {} ({})", index, episode.title(), episode.members());
                }
            }
            Some("help") => print_help(),
            Some("quit") => break,
            Some(other) => log::warn!("unknown command: {}", other),
            None => {}
        }
    }

    eprintln!("App quitting.");
}
