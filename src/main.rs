use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use coup_engine::{Coup, Status};

// Plays one random four-player game and dumps the table log, then the
// winner's redacted view as JSON. Pass a numeric seed to replay a game.
fn main() {
    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<u64>().expect("seed must be an unsigned integer"));
    let mut rng = match seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    let mut game = Coup::create("p1", "Player 1");
    for i in 2..=4 {
        game = game
            .add_player(format!("p{i}"), format!("Player {i}"))
            .expect("seating a fresh lobby");
    }
    let mut game = game.start_game(&mut rng).expect("starting with four players");

    for _ in 0..10_000 {
        if game.status() == Status::Finished {
            break;
        }
        let intents = game.intents();
        let pick = rng.gen_range(0..intents.len());
        game = game.apply(&intents[pick], &mut rng).expect("applying a listed intent");
    }

    for line in game.log() {
        println!("{line}");
    }

    let winner = game.winner().expect("a random game finishes well within the cap");
    let view = game.view_for(winner);
    println!("{}", serde_json::to_string_pretty(&view).expect("views serialize"));
}
