// Comparator: ascending is a hand-written descending comparator, reversed.

use std::path::Path;

use pattern_snippets::comparator::{sort_with, ComparatorExt};
use pattern_snippets::config::DEFAULT_CONFIG_FILE;
use pattern_snippets::logging::bootstrap;

fn main() {
    bootstrap(Path::new(DEFAULT_CONFIG_FILE));

    let mut numbers = vec![100, 20, 44, 3];
    println!("numbers = {numbers:?}");

    let desc = |a: &i32, b: &i32| b.cmp(a);
    sort_with(&mut numbers, &desc.reversed());
    println!("asc = {numbers:?}");
}
