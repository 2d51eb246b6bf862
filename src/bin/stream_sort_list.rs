// Stream-style sort of a list, one element per line.

use std::io;
use std::path::Path;

use pattern_snippets::config::DEFAULT_CONFIG_FILE;
use pattern_snippets::logging::bootstrap;
use pattern_snippets::stream_sort::{print_each, sorted_list};
use pattern_snippets::Result;

fn main() -> Result<()> {
    bootstrap(Path::new(DEFAULT_CONFIG_FILE));

    let numbers = vec![3, 1, 4, 6, 8, 0];
    print_each(&mut io::stdout().lock(), sorted_list(&numbers))
}
