use std::process::{Command, Stdio};

use combined_patterns::p1_creational::{ProductKind, Singleton};
use combined_patterns::p2_structural::{Component, Composite, Leaf};
use combined_patterns::{run_demo, DemoConfig};

const EXPECTED: &str = "\
Hello from Singleton!
Created Product A
Created Product B
Legacy system doing stuff.
Composite does its operation, and its children do theirs:
Leaf does its operation.
Observer 1 received message: Hello Observers!
Observer 2 received message: Hello Observers!
";

#[test]
fn test_binary_prints_exactly_the_demo() {
    let output = Command::new(env!("CARGO_BIN_EXE_combined_patterns"))
        .output()
        .expect("failed to run combined_patterns");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn test_binary_succeeds_when_stdout_is_closed() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_combined_patterns"))
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn combined_patterns");

    // Close the read end so writes hit a broken pipe
    drop(child.stdout.take());

    let output = child.wait_with_output().expect("failed to wait on combined_patterns");
    assert!(output.status.success());
}

#[test]
fn test_library_run_matches_binary_output() {
    let mut out: Vec<u8> = Vec::new();
    run_demo(&DemoConfig::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED);
}

#[test]
fn test_demo_is_repeatable() {
    let mut first: Vec<u8> = Vec::new();
    let mut second: Vec<u8> = Vec::new();
    run_demo(&DemoConfig::default(), &mut first).unwrap();
    run_demo(&DemoConfig::default(), &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_singleton_shared_with_driver() {
    let before = Singleton::instance();
    run_demo(&DemoConfig::default(), &mut Vec::<u8>::new()).unwrap();
    assert!(std::ptr::eq(before, Singleton::instance()));
}

#[test]
fn test_factories_and_composite_through_public_api() {
    let mut out: Vec<u8> = Vec::new();
    ProductKind::B.factory().create_product().create(&mut out).unwrap();

    let mut inner = Composite::new();
    inner.add(Leaf);
    let mut root = Composite::new();
    root.add(inner);
    root.operation(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Created Product B\n\
         Composite does its operation, and its children do theirs:\n\
         Composite does its operation, and its children do theirs:\n\
         Leaf does its operation.\n"
    );
}
