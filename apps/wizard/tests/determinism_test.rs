mod common;

use common::quick_config;
use wizard::WizardEngine;
use wizard_test_support::{computer_seats, RecordingFrontend};

#[tokio::test]
async fn seeded_games_replay_identically() {
    let mut records = Vec::new();
    for _ in 0..2 {
        let frontend = RecordingFrontend::new(computer_seats(4, "random", Some(77)));
        let ctx = WizardEngine::new(frontend.clone(), quick_config(77))
            .run()
            .await
            .unwrap();
        records.push((ctx, frontend.events()));
    }
    assert_eq!(records[0], records[1]);
}

#[tokio::test]
async fn different_seeds_deal_differently() {
    let mut trumps = Vec::new();
    for seed in [1, 2] {
        let frontend = RecordingFrontend::new(computer_seats(4, "computer", None));
        let ctx = WizardEngine::new(frontend, quick_config(seed))
            .run()
            .await
            .unwrap();
        let turned: Vec<_> = ctx.rounds().iter().map(|r| r.trump_card()).collect();
        trumps.push(turned);
    }
    assert_ne!(trumps[0], trumps[1]);
}

#[tokio::test]
async fn game_record_serializes_to_json() {
    let frontend = RecordingFrontend::new(computer_seats(3, "computer", None));
    let ctx = WizardEngine::new(frontend, quick_config(5))
        .run()
        .await
        .unwrap();

    let json = serde_json::to_value(&ctx).unwrap();
    assert_eq!(json["players"].as_array().unwrap().len(), 3);
    assert_eq!(json["rounds"].as_array().unwrap().len(), 20);
}
