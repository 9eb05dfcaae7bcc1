// Runs the five pattern demonstrations in their fixed order.

use std::io::Write;

use tracing::info;

use crate::config::DemoConfig;
use crate::error::Result;
use crate::p1_creational::{ConcreteFactoryA, ConcreteFactoryB, Factory, Product, Singleton};
use crate::p2_structural::{Component, Composite, LegacyAdapter, LegacySystem, Leaf};
use crate::p3_behavioral::{ConcreteObserver, Subject};

pub fn run_demo(config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
    info!("running pattern demonstrations");

    // Singleton
    let singleton = Singleton::instance();
    singleton.show_message(out)?;

    // Factory Method
    let factory_a = ConcreteFactoryA;
    factory_a.create_product().create(out)?;

    let factory_b = ConcreteFactoryB;
    factory_b.create_product().create(out)?;

    // Adapter
    let legacy_system = LegacySystem;
    let adapted_system = LegacyAdapter::new(&legacy_system);
    adapted_system.create(out)?;

    // Composite
    let mut composite = Composite::new();
    composite.add(Leaf);
    composite.operation(out)?;

    // Observer
    let observers: Vec<ConcreteObserver> = config
        .observer_names
        .iter()
        .map(ConcreteObserver::new)
        .collect();

    let mut subject = Subject::new();
    for observer in &observers {
        subject.add_observer(observer);
    }
    subject.notify_observers(out, &config.broadcast_message)?;

    out.flush()?;
    Ok(())
}
