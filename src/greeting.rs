// Pattern 1: Service Lookup
// A capability trait plus an explicit registry of provider constructors,
// populated at startup instead of discovered at runtime.

use std::any::{Any, TypeId};
use std::io::Write;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::Result;

/// The single-method greeting capability.
pub trait Greeting {
    fn greet(&self) -> String;
}

pub struct HelloGreeting;

impl Greeting for HelloGreeting {
    fn greet(&self) -> String {
        "Hello, World!".to_string()
    }
}

struct Provider<S: ?Sized + 'static> {
    name: &'static str,
    ctor: fn() -> Box<S>,
}

/// Maps a capability type (usually `dyn Trait`) to its providers, kept in
/// registration order.
#[derive(Default)]
pub struct ServiceRegistry {
    providers: FxHashMap<TypeId, Box<dyn Any>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<S: ?Sized + 'static>(
        &mut self,
        name: &'static str,
        ctor: fn() -> Box<S>,
    ) -> &mut Self {
        let slot = self
            .providers
            .entry(TypeId::of::<S>())
            .or_insert_with(|| Box::new(Vec::<Provider<S>>::new()) as Box<dyn Any>);

        if let Some(list) = slot.downcast_mut::<Vec<Provider<S>>>() {
            debug!(provider = name, position = list.len(), "registered provider");
            list.push(Provider { name, ctor });
        }
        self
    }

    fn providers<S: ?Sized + 'static>(&self) -> &[Provider<S>] {
        self.providers
            .get(&TypeId::of::<S>())
            .and_then(|slot| slot.downcast_ref::<Vec<Provider<S>>>())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Constructs the first provider registered for `S`, if any.
    pub fn first<S: ?Sized + 'static>(&self) -> Option<Box<S>> {
        let provider = self.providers::<S>().first()?;
        debug!(provider = provider.name, "using first provider");
        Some((provider.ctor)())
    }

    pub fn find<S: ?Sized + 'static>(&self, name: &str) -> Option<Box<S>> {
        self.providers::<S>()
            .iter()
            .find(|p| p.name == name)
            .map(|p| (p.ctor)())
    }

    pub fn provider_names<S: ?Sized + 'static>(&self) -> Vec<&'static str> {
        self.providers::<S>().iter().map(|p| p.name).collect()
    }

    pub fn load_all<S: ?Sized + 'static>(&self) -> Vec<Box<S>> {
        self.providers::<S>().iter().map(|p| (p.ctor)()).collect()
    }
}

fn hello() -> Box<dyn Greeting> {
    Box::new(HelloGreeting)
}

/// Registry with the built-in providers.
pub fn default_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register::<dyn Greeting>("hello", hello);
    registry
}

/// Writes one greeting line, preferring `preferred` when it names a
/// registered provider. Writes nothing when no provider exists.
pub fn announce<W: Write>(
    registry: &ServiceRegistry,
    preferred: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let greeting = preferred
        .and_then(|name| registry.find::<dyn Greeting>(name))
        .or_else(|| registry.first::<dyn Greeting>());

    match greeting {
        Some(greeting) => writeln!(out, "{}", greeting.greet())?,
        None => debug!("no greeting provider registered"),
    }
    Ok(())
}
