use cannonball_engine::parsing::{parse_document, round_trip, snapshot};
use pretty_assertions::assert_eq;

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{name}.md", fixtures_dir())).unwrap()
}

fn assert_fixture(name: &str) {
    let md = read_fixture(name);
    let tree = parse_document(&md);
    snapshot::invariants(&tree);

    let dump = snapshot::dump_tree(&tree);
    insta::with_settings!({
        snapshot_path => fixtures_dir(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, dump);
    });
}

#[test]
fn fixture_tasks_and_nesting() {
    assert_fixture("tasks_and_nesting");
}

#[test]
fn fixture_mixed_blocks() {
    assert_fixture("mixed_blocks");
}

/// A document already in canonical form comes back byte for byte.
#[test]
fn canonical_fixture_survives_round_trip() {
    let md = read_fixture("tasks_and_nesting");
    assert_eq!(round_trip(&md), md);
}

/// Normalizing twice changes nothing further.
#[test]
fn round_trip_is_idempotent() {
    let once = round_trip(&read_fixture("mixed_blocks"));
    assert_eq!(round_trip(&once), once);
}
