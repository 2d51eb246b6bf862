// Pattern 3: Comparators as Values
// Any `Fn(&T, &T) -> Ordering` is a comparator; combinators wrap it without
// allocating.

use std::cmp::Ordering;
use std::marker::PhantomData;

pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Combinators for any comparator. The `Comparator<T>` bound is checked where
/// the combined value is used, so no element type is needed to build one.
pub trait ComparatorExt: Sized {
    /// Inverts this ordering.
    fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }

    /// Falls back to `next` when this comparator reports `Equal`.
    fn then_comparing<C>(self, next: C) -> ThenComparing<Self, C> {
        ThenComparing { first: self, next }
    }
}

impl<C> ComparatorExt for C {}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Reversed<C>(C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThenComparing<A, B> {
    first: A,
    next: B,
}

impl<T: ?Sized, A, B> Comparator<T> for ThenComparing<A, B>
where
    A: Comparator<T>,
    B: Comparator<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.first
            .compare(a, b)
            .then_with(|| self.next.compare(a, b))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

pub fn natural_order() -> NaturalOrder {
    NaturalOrder
}

pub fn reverse_order() -> Reversed<NaturalOrder> {
    Reversed(NaturalOrder)
}

#[derive(Debug, Clone, Copy)]
pub struct Comparing<F, K> {
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<T: ?Sized, K: Ord, F> Comparator<T> for Comparing<F, K>
where
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

/// Orders values by the key `key` extracts.
pub fn comparing<T: ?Sized, K: Ord, F>(key: F) -> Comparing<F, K>
where
    F: Fn(&T) -> K,
{
    Comparing {
        key,
        _key: PhantomData,
    }
}

/// Stable in-place sort driven by `comparator`.
pub fn sort_with<T, C>(items: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    items.sort_by(|a, b| comparator.compare(a, b));
}
