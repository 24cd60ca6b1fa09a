use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use taskdeck_core::{
    Board, BoardError, PersistError, PersistResult, PersistenceAdapter, SessionError, TodoSession,
    DEFAULT_GROUP,
};

#[derive(Default)]
struct StubState {
    board: Option<Board>,
    saves: usize,
    fail_saves: bool,
    fail_load: bool,
}

/// In-memory adapter with injectable failures, shared with the test
/// through `Rc` so saves stay observable after the session takes
/// ownership.
#[derive(Clone)]
struct StubStore(Rc<RefCell<StubState>>);

impl StubStore {
    fn empty() -> Self {
        Self(Rc::new(RefCell::new(StubState::default())))
    }

    fn with_board(board: Board) -> Self {
        let store = Self::empty();
        store.0.borrow_mut().board = Some(board);
        store
    }

    fn saves(&self) -> usize {
        self.0.borrow().saves
    }

    fn saved_board(&self) -> Option<Board> {
        self.0.borrow().board.clone()
    }
}

fn injected_failure() -> PersistError {
    PersistError::Io {
        path: PathBuf::from("stub"),
        source: io::Error::other("injected failure"),
    }
}

impl PersistenceAdapter for StubStore {
    fn load(&self) -> PersistResult<Option<Board>> {
        let state = self.0.borrow();
        if state.fail_load {
            return Err(injected_failure());
        }
        Ok(state.board.clone())
    }

    fn save(&self, board: &Board) -> PersistResult<()> {
        let mut state = self.0.borrow_mut();
        if state.fail_saves {
            return Err(injected_failure());
        }
        state.board = Some(board.clone());
        state.saves += 1;
        Ok(())
    }
}

#[test]
fn first_run_bootstraps_default_group_and_writes_initial_document() {
    let store = StubStore::empty();
    let session = TodoSession::open(store.clone());

    assert_eq!(session.current_group(), DEFAULT_GROUP);
    assert_eq!(session.group_names(), [DEFAULT_GROUP]);
    assert_eq!(store.saves(), 1);
    assert!(store.saved_board().unwrap().contains_group(DEFAULT_GROUP));
}

#[test]
fn existing_document_is_adopted_and_first_group_becomes_current() {
    let mut board = Board::new();
    board.add_group("Work").unwrap();
    board.add_group("Errands").unwrap();
    board.add_task("Work", "ship release").unwrap();

    let store = StubStore::with_board(board);
    let session = TodoSession::open(store.clone());

    assert_eq!(session.current_group(), "Errands");
    assert_eq!(session.group_names(), ["Errands", "Work"]);
    // Adopting an existing document is not a mutation.
    assert_eq!(store.saves(), 0);
}

#[test]
fn empty_persisted_document_is_repaired_with_default_group() {
    let store = StubStore::with_board(Board::new());
    let session = TodoSession::open(store);

    assert_eq!(session.current_group(), DEFAULT_GROUP);
    assert_eq!(session.group_names(), [DEFAULT_GROUP]);
}

#[test]
fn load_failure_falls_back_to_in_memory_default_board() {
    let store = StubStore::empty();
    store.0.borrow_mut().fail_load = true;

    let mut session = TodoSession::open(store.clone());
    assert_eq!(session.current_group(), DEFAULT_GROUP);

    // The session stays usable and later saves catch durable state up.
    session.add_task("recovered").unwrap();
    assert_eq!(store.saves(), 1);
    assert_eq!(
        store.saved_board().unwrap().task_count(DEFAULT_GROUP).unwrap(),
        1
    );
}

#[test]
fn every_mutation_is_followed_by_a_whole_board_save() {
    let store = StubStore::empty();
    let mut session = TodoSession::open(store.clone());
    let after_bootstrap = store.saves();

    session.add_task("one").unwrap();
    session.add_task("two").unwrap();
    session.toggle_task(0).unwrap();
    session.edit_task(1, "two edited").unwrap();
    session.delete_task(0).unwrap();
    session.add_group("Work").unwrap();
    session.delete_group().unwrap();

    assert_eq!(store.saves(), after_bootstrap + 7);

    let saved = store.saved_board().unwrap();
    let tasks = saved.tasks(DEFAULT_GROUP).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "two edited");
}

#[test]
fn save_failure_is_swallowed_and_memory_keeps_the_mutation() {
    let store = StubStore::empty();
    let mut session = TodoSession::open(store.clone());
    store.0.borrow_mut().fail_saves = true;

    session.add_task("unsynced").unwrap();

    assert_eq!(session.current_tasks().len(), 1);
    assert_eq!(session.current_tasks()[0].text, "unsynced");
    // Durable state still holds the bootstrap document only.
    assert!(store
        .saved_board()
        .unwrap()
        .tasks(DEFAULT_GROUP)
        .unwrap()
        .is_empty());
}

#[test]
fn add_group_switches_current_and_validation_errors_do_not_save() {
    let store = StubStore::empty();
    let mut session = TodoSession::open(store.clone());
    let after_bootstrap = store.saves();

    session.add_group("Work").unwrap();
    assert_eq!(session.current_group(), "Work");
    assert_eq!(store.saves(), after_bootstrap + 1);

    let err = session.add_group("Work").unwrap_err();
    assert_eq!(
        err,
        SessionError::Board(BoardError::DuplicateGroup("Work".to_string()))
    );
    let err = session.add_task("   ").unwrap_err();
    assert_eq!(err, SessionError::Board(BoardError::BlankTaskText));
    assert_eq!(store.saves(), after_bootstrap + 1);
}

#[test]
fn delete_group_promotes_first_remaining_group() {
    let store = StubStore::empty();
    let mut session = TodoSession::open(store);

    session.add_group("Work").unwrap();
    session.add_group("Errands").unwrap();
    assert_eq!(session.current_group(), "Errands");

    session.delete_group().unwrap();
    assert_eq!(session.current_group(), DEFAULT_GROUP);

    session.switch_group("Work").unwrap();
    session.delete_group().unwrap();
    assert_eq!(session.current_group(), DEFAULT_GROUP);

    let err = session.delete_group().unwrap_err();
    assert_eq!(
        err,
        SessionError::Board(BoardError::LastGroup(DEFAULT_GROUP.to_string()))
    );
}

#[test]
fn switch_group_validates_and_does_not_save() {
    let store = StubStore::empty();
    let mut session = TodoSession::open(store.clone());

    session.add_group("Work").unwrap();
    let after_group_add = store.saves();

    session.switch_group(DEFAULT_GROUP).unwrap();
    assert_eq!(session.current_group(), DEFAULT_GROUP);
    assert_eq!(store.saves(), after_group_add);

    let err = session.switch_group("Nope").unwrap_err();
    assert_eq!(
        err,
        SessionError::Board(BoardError::GroupNotFound("Nope".to_string()))
    );
    assert_eq!(session.current_group(), DEFAULT_GROUP);
}

#[test]
fn task_operations_are_scoped_to_the_current_group() {
    let store = StubStore::empty();
    let mut session = TodoSession::open(store);

    session.add_task("default work").unwrap();
    session.add_group("Work").unwrap();
    session.add_task("work item").unwrap();

    assert_eq!(session.current_tasks().len(), 1);
    assert_eq!(session.current_tasks()[0].text, "work item");

    session.switch_group(DEFAULT_GROUP).unwrap();
    assert_eq!(session.current_tasks().len(), 1);
    assert_eq!(session.current_tasks()[0].text, "default work");

    let removed = session.delete_task(0).unwrap();
    assert_eq!(removed.text, "default work");
    assert!(session.current_tasks().is_empty());
    assert_eq!(session.tasks("Work").unwrap().len(), 1);
}
