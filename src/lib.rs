// Pattern Snippets
// Small runnable demos of service lookup, flyweight caching, comparators and
// stream-style sorting.

pub mod comparator;
pub mod config;
pub mod error;
pub mod flyweight;
pub mod greeting;
pub mod logging;
pub mod stream_sort;

pub use error::{Result, SnippetError};

pub mod examples {
    //! # Pattern Snippets
    //!
    //! This crate provides runnable examples for:
    //!
    //! ## Pattern 1: Service Lookup
    //! - Explicit provider registry keyed by capability type
    //! - Optional lookup, silent when nothing is registered
    //!
    //! ## Pattern 2: Flyweight
    //! - Descriptor-keyed cache of `Rc<Font>` handles
    //!
    //! ## Pattern 3: Comparators as Values
    //! - `Comparator` trait over closures
    //! - `reversed`, `then_comparing`, `comparing`
    //!
    //! ## Pattern 4: Stream-style Sorting
    //! - Sorted copies of arrays and lists, printed one per line
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin service_lookup
    //! cargo run --bin flyweight_fonts
    //! cargo run --bin comparator_ascending
    //! cargo run --bin comparator_descending
    //! cargo run --bin stream_sort_array
    //! cargo run --bin stream_sort_list
    //! ```
}
