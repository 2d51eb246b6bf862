// Pattern 4: Stream-style Sorting
// Sorted copies built through iterator adapters; inputs are never mutated.

use std::fmt::Display;
use std::io::Write;

use itertools::Itertools;

use crate::error::Result;

/// Returns a new array with the elements of `input` in ascending order.
pub fn sorted_array<const N: usize>(input: &[i32; N]) -> [i32; N] {
    let mut out = [0; N];
    for (slot, value) in out.iter_mut().zip(input.iter().copied().sorted()) {
        *slot = value;
    }
    out
}

/// Returns a new `Vec` with the elements of `input` in ascending order.
pub fn sorted_list(input: &[i32]) -> Vec<i32> {
    input.iter().copied().sorted().collect()
}

pub fn print_each<W, I>(out: &mut W, items: I) -> Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}
