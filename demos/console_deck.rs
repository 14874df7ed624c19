//! Console deck demo: prints the sorted deck, a shuffled deal, and the
//! shuffled deal sorted back, as rows of compact card tokens.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use deckgrid::{Hand, ROW_WIDTH};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let deck = Hand::standard();
    let shuffled = deck.shuffled_with_seed(seed);

    println!("== SORTED");
    print_grid(&deck);
    println!("== SHUFFLED");
    print_grid(&shuffled);
    println!("== SORTED");
    print_grid(&shuffled.sorted());
}

fn print_grid(hand: &Hand) {
    for row in hand.rows(ROW_WIDTH).unwrap_or_default() {
        let tokens: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{}", tokens.join(" "));
    }
}
