use taskdeck_core::{Board, JsonFileStore, PersistError, PersistenceAdapter, DEFAULT_GROUP};

#[test]
fn missing_file_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("board.json"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_then_load_roundtrips_the_whole_board() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("board.json"));

    let mut board = Board::with_default_group();
    board.add_task(DEFAULT_GROUP, "water plants").unwrap();
    board.add_group("Work").unwrap();
    board.add_task("Work", "review patch").unwrap();
    board.toggle_task("Work", 0).unwrap();

    store.save(&board).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, board);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("data").join("deck").join("board.json");
    let store = JsonFileStore::new(&nested);

    store.save(&Board::with_default_group()).unwrap();
    assert!(nested.is_file());
}

#[test]
fn save_replaces_previous_document_and_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    let store = JsonFileStore::new(&path);

    let mut board = Board::with_default_group();
    store.save(&board).unwrap();

    board.add_task(DEFAULT_GROUP, "second write").unwrap();
    store.save(&board).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, board);

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, ["board.json"]);
}

#[test]
fn corrupt_file_is_reported_as_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.json");
    std::fs::write(&path, "][ definitely not json").unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.load().unwrap_err();
    assert!(matches!(err, PersistError::Decode { .. }));
}
