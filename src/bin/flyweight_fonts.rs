// Flyweight: characters with the same font descriptor share one font.

use std::path::Path;
use std::rc::Rc;

use pattern_snippets::config::DEFAULT_CONFIG_FILE;
use pattern_snippets::flyweight::{Character, FontFactory};
use pattern_snippets::logging::bootstrap;
use tracing::warn;

fn main() {
    let config = bootstrap(Path::new(DEFAULT_CONFIG_FILE));

    let mut factory = FontFactory::new();
    for err in factory.preload(&config.fonts.preload) {
        warn!(error = %err, "skipping font preload");
    }

    // all three characters reuse the same 12pt nanum font
    let c1 = Character::new('a', "bigfanoftim", factory.get_or_create("nanum:12"));
    let c2 = Character::new('b', "bigfanoftim", factory.get_or_create("nanum:12"));
    let c3 = Character::new('c', "bigfanoftim", factory.get_or_create("nanum:12"));

    for c in [&c1, &c2, &c3] {
        println!("{} color={} font={}", c.value(), c.color(), c.font().descriptor());
    }
    println!(
        "shared font: {}",
        Rc::ptr_eq(c1.font(), c2.font()) && Rc::ptr_eq(c2.font(), c3.font())
    );

    let bigger = factory.get_or_create("nanum:14");
    println!("nanum:12 vs nanum:14 shared: {}", Rc::ptr_eq(c1.font(), &bigger));
    println!("cached fonts: {}", factory.len());
}
