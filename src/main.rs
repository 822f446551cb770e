// Bot-vs-bot game driver
//
// Sets up a game from Outwit.toml, plays the two heuristic bots against
// each other until one wins or the turn cap is reached, and optionally
// records the game to a JSONL log for later replay.

use log::{error, info};
use std::env;

use outwit::bot::Bot;
use outwit::config::Config;
use outwit::game::Game;
use outwit::recorder::GameRecorder;
use outwit::types::Team;

fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment
    // variable is set, we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = Config::load_or_default();

    let mut game = match Game::new(&config) {
        Ok(game) => game,
        Err(e) => {
            error!("Failed to set up game: {}", e);
            std::process::exit(1);
        }
    };

    let mut recorder = GameRecorder::new(config.recorder.enabled, &config.recorder.log_file_path);
    recorder.log_setup(game.chips(), game.current_player());

    info!(
        "Starting game: {} moves first, {} layout, {} chip set",
        game.current_player().as_str(),
        config.game.chip_layout,
        config.game.chip_set
    );

    let mut light_bot = Bot::new(Team::Light, game.chips());
    let mut dark_bot = Bot::new(Team::Dark, game.chips());

    let mut turn: i32 = 0;
    while (turn as u32) < config.game.max_turns {
        let team = game.current_player();
        let bot = match team {
            Team::Light => &mut light_bot,
            Team::Dark => &mut dark_bot,
        };

        let mv = match bot.choose_move(game.board(), game.chips()) {
            Some(mv) => mv,
            None => {
                info!("Turn {}: {} has no moves, stopping", turn, team.as_str());
                break;
            }
        };

        info!(
            "Turn {} [{}]: ({}, {}) -> ({}, {})",
            turn,
            team.as_str(),
            mv.source.x,
            mv.source.y,
            mv.destination.x,
            mv.destination.y
        );

        if let Err(e) = game.commit_move(mv.clone()) {
            error!("Turn {}: bot produced an uncommittable move: {}", turn, e);
            break;
        }
        recorder.log_move(turn, team, &mv);
        turn += 1;

        if let Some(winner) = game.winner() {
            info!("{} wins after {} turns", winner.as_str(), turn);
            return;
        }
    }

    match game.winner() {
        Some(winner) => info!("{} wins after {} turns", winner.as_str(), turn),
        None => info!("No winner after {} turns", turn),
    }
}
