// Pattern 1: Creational Patterns - Singleton, Factory Method
// Demonstrates object creation patterns in Rust.

use std::io::{self, Write};
use std::sync::OnceLock;

use tracing::debug;

// ============================================================================
// Singleton Pattern with OnceLock
// ============================================================================

/// The one shared instance. The private field keeps callers from building
/// their own; `Singleton::instance` is the only way in.
#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    /// Returns the shared instance, building it on first access.
    ///
    /// `OnceLock` runs the initializer at most once even when several
    /// threads race on the first call.
    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            debug!("initializing singleton instance");
            Singleton { _private: () }
        })
    }

    pub fn show_message(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Hello from Singleton!")
    }
}

// ============================================================================
// Factory Method with Trait Objects
// ============================================================================

pub trait Product {
    fn create(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn create(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Created Product A")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn create(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Created Product B")
    }
}

pub trait Factory {
    fn create_product(&self) -> Box<dyn Product>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactoryA;

impl Factory for ConcreteFactoryA {
    fn create_product(&self) -> Box<dyn Product> {
        debug!(variant = "A", "factory producing product");
        Box::new(ConcreteProductA)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactoryB;

impl Factory for ConcreteFactoryB {
    fn create_product(&self) -> Box<dyn Product> {
        debug!(variant = "B", "factory producing product");
        Box::new(ConcreteProductB)
    }
}

// ============================================================================
// Factory selection by value
// ============================================================================

/// Closed set of product variants, for callers that pick a factory at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    A,
    B,
}

impl ProductKind {
    pub fn factory(self) -> Box<dyn Factory> {
        match self {
            ProductKind::A => Box::new(ConcreteFactoryA),
            ProductKind::B => Box::new(ConcreteFactoryB),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
