// Stream-style sort of a primitive array, one element per line.

use std::io;
use std::path::Path;

use pattern_snippets::config::DEFAULT_CONFIG_FILE;
use pattern_snippets::logging::bootstrap;
use pattern_snippets::stream_sort::{print_each, sorted_array};
use pattern_snippets::Result;

fn main() -> Result<()> {
    bootstrap(Path::new(DEFAULT_CONFIG_FILE));

    let numbers = [3, 2, 1, 6, 7, 4];
    let sorted = sorted_array(&numbers);
    print_each(&mut io::stdout().lock(), sorted)
}
