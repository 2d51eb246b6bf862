// Service lookup: greet through the first registered provider, or stay silent.

use std::io;
use std::path::Path;

use pattern_snippets::config::DEFAULT_CONFIG_FILE;
use pattern_snippets::greeting::{announce, default_registry};
use pattern_snippets::logging::bootstrap;
use pattern_snippets::Result;

fn main() -> Result<()> {
    let config = bootstrap(Path::new(DEFAULT_CONFIG_FILE));

    let registry = default_registry();
    let mut out = io::stdout().lock();
    announce(&registry, config.greeting.provider.as_deref(), &mut out)
}
