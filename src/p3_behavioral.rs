// Pattern 3: Behavioral Patterns - Observer
// Demonstrates a subject broadcasting to borrowed observers.

use std::io::{self, Write};

use tracing::debug;

// ============================================================================
// Observer Pattern with Borrowed Observers
// ============================================================================

pub trait Observer {
    fn update(&self, out: &mut dyn Write, message: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteObserver {
    name: String,
}

impl ConcreteObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Observer for ConcreteObserver {
    fn update(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        writeln!(out, "{} received message: {}", self.name, message)
    }
}

/// Broadcasts messages to observers in registration order.
///
/// Observers are borrowed, not owned: they must outlive the subject but stay
/// usable by the caller. `notify_observers` takes `&self` while registration
/// takes `&mut self`, so the list cannot change during a broadcast.
pub struct Subject<'a, O = ConcreteObserver> {
    observers: Vec<&'a O>,
}

impl<'a, O: Observer + PartialEq> Subject<'a, O> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Duplicates are kept; the same observer registered twice is notified twice.
    pub fn add_observer(&mut self, observer: &'a O) {
        self.observers.push(observer);
        debug!(registered = self.observers.len(), "observer added");
    }

    /// Removes the first registered observer equal to `observer`. Does nothing
    /// if none matches.
    pub fn remove_observer(&mut self, observer: &O) {
        if let Some(pos) = self.observers.iter().position(|o| *o == observer) {
            self.observers.remove(pos);
            debug!(registered = self.observers.len(), "observer removed");
        }
    }

    pub fn notify_observers(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        debug!(observers = self.observers.len(), msg = message, "broadcasting");
        for observer in &self.observers {
            observer.update(out, message)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<'a, O: Observer + PartialEq> Default for Subject<'a, O> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
