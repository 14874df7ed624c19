//! Headless scene demo: lets the idle timeout sort the deck, then shuffles
//! and sorts it again, printing sampled card positions while the cards move.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use deckgrid::{Hand, Scene};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const TICK_MS: u32 = 16;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut scene = Scene::new(Hand::standard());
    println!("scene starts {:?}", scene.state());

    // With no interaction the idle timeout fires within the first few ticks
    // and deals the deck out into the sorted grid.
    while !scene.tick(TICK_MS) {}
    println!("idle timeout -> {:?}", scene.state());
    run_until_settled(&mut scene);

    scene.shuffle(&mut rng);
    println!("shuffle -> {:?}", scene.state());
    run_until_settled(&mut scene);

    scene.sort();
    println!("sort -> {:?}", scene.state());
    run_until_settled(&mut scene);
}

fn run_until_settled(scene: &mut Scene) {
    let mut elapsed = 0;
    while !scene.is_settled() {
        scene.tick(TICK_MS);
        elapsed += TICK_MS;
        if elapsed % 256 == 0 {
            print_sample(scene, elapsed);
        }
    }
    print_sample(scene, elapsed);
}

fn print_sample(scene: &Scene, elapsed: u32) {
    let positions = scene.positions();
    let mut line = format!("t={elapsed:>5}ms");
    for index in [0, 25, 51] {
        if let (Some(card), Some(pos)) = (scene.deck().get(index), positions.get(index)) {
            line.push_str(&format!("  {card}@({:>6.1},{:>6.1})", pos.x, pos.y));
        }
    }
    println!("{line}");
}
