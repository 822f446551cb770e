// End-to-end recording pipeline: play a seeded bot-vs-bot game through the
// driver while recording it, then replay the log and check that every
// recorded move passes the legality audit.

use outwit::bot::Bot;
use outwit::config::Config;
use outwit::game::Game;
use outwit::recorder::GameRecorder;
use outwit::replay::ReplayEngine;
use outwit::types::Team;
use std::path::PathBuf;

fn temp_log_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "outwit_replay_it_{}_{}.jsonl",
        name,
        std::process::id()
    ))
}

#[test]
fn test_recorded_game_replays_fully_legal() {
    let path = temp_log_path("full");
    let _ = std::fs::remove_file(&path);

    let mut config = Config::default_hardcoded();
    config.game.starting_team = "light".to_string();
    let mut game = Game::new(&config).unwrap();

    let mut recorder = GameRecorder::new(true, path.to_str().unwrap());
    assert!(recorder.is_enabled());
    recorder.log_setup(game.chips(), game.current_player());

    let mut light_bot = Bot::seeded(Team::Light, game.chips(), 101);
    let mut dark_bot = Bot::seeded(Team::Dark, game.chips(), 202);

    let mut turn = 0;
    let mut recorded = 0;
    while turn < 200 {
        let team = game.current_player();
        let bot = match team {
            Team::Light => &mut light_bot,
            Team::Dark => &mut dark_bot,
        };
        let mv = match bot.choose_move(game.board(), game.chips()) {
            Some(mv) => mv,
            None => break,
        };
        game.commit_move(mv.clone()).unwrap();
        recorder.log_move(turn, team, &mv);
        recorded += 1;
        turn += 1;
        if game.winner().is_some() {
            break;
        }
    }
    assert!(recorded > 0);

    let engine = ReplayEngine::new(false);
    let entries = engine.load_log_file(&path).unwrap();
    assert_eq!(entries.len(), recorded + 1, "setup entry plus one per move");

    let (turns, chips) = engine.replay_all(&entries).unwrap();
    let stats = engine.generate_stats(&turns, &chips);
    assert_eq!(stats.total_turns, recorded);
    assert_eq!(stats.illegal, 0, "recorded moves must replay as legal");
    assert_eq!(stats.winner, game.winner());

    // replayed final positions match the live game
    for chip in game.chips() {
        assert!(chips
            .iter()
            .any(|c| c.pos() == chip.pos() && c.team() == chip.team()));
    }

    let _ = std::fs::remove_file(&path);
}
