// Pattern 2: Structural Patterns - Adapter, Composite
// Demonstrates patterns for organizing relationships between entities.

use std::io::{self, Write};

use tracing::debug;

use crate::p1_creational::Product;

// ============================================================================
// Adapter Pattern
// ============================================================================

// Interface of the existing system, which knows nothing about `Product`
pub trait LegacyOperation {
    fn do_legacy_stuff(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LegacySystem;

impl LegacyOperation for LegacySystem {
    fn do_legacy_stuff(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Legacy system doing stuff.")
    }
}

/// Makes a legacy system usable wherever a `Product` is expected.
/// The legacy instance is borrowed for the adapter's whole lifetime.
pub struct LegacyAdapter<'a, L: ?Sized = LegacySystem> {
    legacy: &'a L,
}

impl<'a, L: LegacyOperation + ?Sized> LegacyAdapter<'a, L> {
    pub fn new(legacy: &'a L) -> Self {
        Self { legacy }
    }
}

impl<L: LegacyOperation + ?Sized> Product for LegacyAdapter<'_, L> {
    fn create(&self, out: &mut dyn Write) -> io::Result<()> {
        debug!("adapter forwarding to legacy operation");
        self.legacy.do_legacy_stuff(out)
    }
}

// ============================================================================
// Composite Pattern
// ============================================================================

pub trait Component {
    fn operation(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Leaf;

impl Component for Leaf {
    fn operation(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Leaf does its operation.")
    }
}

/// Container node. Children are owned, so a composite can never end up
/// containing itself.
#[derive(Default)]
pub struct Composite {
    children: Vec<Box<dyn Component>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, child: impl Component + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Composite {
    fn operation(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Composite does its operation, and its children do theirs:")?;
        debug!(children = self.children.len(), "composite visiting children");
        for child in &self.children {
            child.operation(out)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
