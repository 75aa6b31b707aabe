// End-to-end tests of `propseek favorites` with the store file pointed
// at a temp path, so nothing touches the real config directory.

use std::process::{Command, Output};

use tempfile::TempDir;

fn favorites(store: &std::path::Path, args: &[&str]) -> Output {
    let mut all = vec!["favorites"];
    all.extend_from_slice(args);
    all.push("--store");
    let store = store.to_str().unwrap();
    all.push(store);

    Command::new(env!("CARGO_BIN_EXE_propseek"))
        .args(&all)
        .output()
        .expect("failed to run propseek")
}

fn listed(store: &std::path::Path) -> Vec<String> {
    let out = favorites(store, &["list"]);
    assert!(out.status.success());
    String::from_utf8(out.stdout)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn toggle_saves_then_removes() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("favorites.json");
    let link = "https://ingatlanok.pvh.hu/pvh123";

    let out = favorites(&store, &["toggle", link]);
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("saved"));
    assert_eq!(listed(&store), [link]);

    let out = favorites(&store, &["toggle", link]);
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("removed"));
    assert!(listed(&store).is_empty());
}

#[test]
fn list_preserves_insertion_order_across_runs() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("favorites.json");

    for link in [
        "https://ingatlanok.pvh.hu/pvh456",
        "https://ingatlanok.pvh.hu/pvh123",
        "https://ingatlanok.pvh.hu/pvh789",
    ] {
        assert!(favorites(&store, &["toggle", link]).status.success());
    }

    assert_eq!(
        listed(&store),
        [
            "https://ingatlanok.pvh.hu/pvh456",
            "https://ingatlanok.pvh.hu/pvh123",
            "https://ingatlanok.pvh.hu/pvh789",
        ]
    );
}

#[test]
fn clear_empties_the_store() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("favorites.json");

    favorites(&store, &["toggle", "https://ingatlanok.pvh.hu/pvh123"]);
    favorites(&store, &["toggle", "https://ingatlanok.pvh.hu/pvh456"]);
    assert!(favorites(&store, &["clear"]).status.success());
    assert!(listed(&store).is_empty());
}

#[test]
fn missing_store_file_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("never-created.json");
    assert!(listed(&store).is_empty());
}
