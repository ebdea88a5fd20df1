use graphscope::selection::selector::{
    GraphList, GraphSource, NO_SELECTION_ID, selector_options,
};
use graphscope::{
    GraphRef, GraphSummary, RedbStore, SelectionStore, SharedSelectionStore, VERSION,
};
use tempfile::TempDir;

#[test]
fn scenarios_binary_smoke_runs() {
    assert!(!VERSION.is_empty());
}

#[test]
fn contribute_dispose_lifecycle_across_independent_components() {
    let store = SharedSelectionStore::in_memory();

    // Two unrelated page locations contribute on mount.
    let first = store.contribute_contextual_graphs(vec![GraphSummary::new("a", "A")]);
    let second = store.contribute_contextual_graphs(vec![GraphSummary::new("b", "B")]);

    // First location unmounts.
    drop(first);
    let remaining = store
        .contextual_graphs()
        .expect("second contribution should remain");
    assert_eq!(remaining, vec![GraphSummary::new("b", "B")]);

    // Second location unmounts; the list collapses to "never contributed".
    drop(second);
    assert_eq!(store.contextual_graphs(), None);
}

#[test]
fn selection_persists_across_sessions_on_disk() {
    let dir = TempDir::new().expect("temp dir should create");
    let db_path = dir.path().join("selection.redb");

    {
        let storage = RedbStore::open(&db_path).expect("store should open");
        let mut store = SelectionStore::new(Box::new(storage));
        assert_eq!(store.selected_graph(), None);
        store.set_selected_graph(Some(GraphRef::new("g1")));
    }

    // Next session restores the choice.
    {
        let storage = RedbStore::open(&db_path).expect("store should reopen");
        let mut store = SelectionStore::new(Box::new(storage));
        assert_eq!(store.selected_graph(), Some(&GraphRef::new("g1")));
        store.set_selected_graph(None);
    }

    // Clearing persisted, too.
    let storage = RedbStore::open(&db_path).expect("store should reopen");
    let store = SelectionStore::new(Box::new(storage));
    assert_eq!(store.selected_graph(), None);
}

#[derive(Clone)]
struct StaticSource {
    graphs: std::rc::Rc<std::cell::RefCell<Vec<GraphSummary>>>,
}

impl GraphSource for StaticSource {
    fn list_graphs(&self, _owner: Option<&str>) -> Result<Vec<GraphSummary>, String> {
        Ok(self.graphs.borrow().clone())
    }
}

#[test]
fn reload_token_drives_refetch_and_merged_selector_list() {
    let store = SharedSelectionStore::in_memory();
    let _contributed = store.contribute_contextual_graphs(vec![
        GraphSummary::new("ctx", "This page's graph"),
    ]);

    let source = StaticSource {
        graphs: std::rc::Rc::new(std::cell::RefCell::new(vec![GraphSummary::new(
            "r1",
            "Team graph",
        )])),
    };
    let remote_graphs = source.graphs.clone();
    let mut list = GraphList::new(source);

    let remote = list.graphs(store.reload_seq()).to_vec();
    let options = selector_options(&store.snapshot(), &remote);
    let ids: Vec<&str> = options.iter().map(|option| option.id.as_str()).collect();
    assert_eq!(ids, [NO_SELECTION_ID, "ctx", "r1"]);

    // Some component mutated graphs remotely and signals everyone.
    let seq = store.reload_graphs();
    remote_graphs
        .borrow_mut()
        .push(GraphSummary::new("r2", "New graph"));
    let remote = list.graphs(seq).to_vec();
    assert_eq!(remote.len(), 2);

    let options = selector_options(&store.snapshot(), &remote);
    assert_eq!(options.len(), 4);
}
