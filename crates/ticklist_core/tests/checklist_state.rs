use ticklist_core::{
    ChecklistEvents, ChecklistStateStore, ChecklistSurface, KeyValueStore, MemoryKeyValueStore,
    PageKey,
};

/// Vec-backed stand-in for the rendered checklist rows.
#[derive(Debug, Default)]
struct FakeChecklist {
    checked: Vec<bool>,
    markers: Vec<bool>,
}

impl FakeChecklist {
    fn with_items(count: usize) -> Self {
        Self {
            checked: vec![false; count],
            markers: vec![false; count],
        }
    }
}

impl ChecklistSurface for FakeChecklist {
    fn item_count(&self) -> usize {
        self.checked.len()
    }

    fn is_checked(&self, index: usize) -> bool {
        self.checked[index]
    }

    fn set_checked(&mut self, index: usize, checked: bool) {
        self.checked[index] = checked;
    }

    fn set_marker(&mut self, index: usize, marked: bool) {
        self.markers[index] = marked;
    }
}

fn page(path: &str) -> PageKey {
    PageKey::new(path).unwrap()
}

#[test]
fn save_then_load_round_trips_exact_pattern() {
    let store = MemoryKeyValueStore::new();

    let mut surface = FakeChecklist::with_items(3);
    surface.checked = vec![true, false, true];
    let mut checklist = ChecklistStateStore::new(&store, surface, page("/checklists/AIR"));
    checklist.save().unwrap();

    assert_eq!(
        store.get("/checklists/AIR").unwrap().as_deref(),
        Some("[true,false,true]")
    );

    // Fresh surface simulates the reloaded page.
    let mut reloaded =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(3), page("/checklists/AIR"));
    reloaded.load().unwrap();
    let (_, surface) = reloaded.into_parts();
    assert_eq!(surface.checked, vec![true, false, true]);
    assert_eq!(surface.markers, vec![true, false, true]);
}

#[test]
fn load_discards_stored_state_with_mismatched_length() {
    let store = MemoryKeyValueStore::new();
    store.set("/checklists/SID", "[true,false]").unwrap();

    let mut checklist =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(3), page("/checklists/SID"));
    checklist.load().unwrap();

    let (_, surface) = checklist.into_parts();
    assert_eq!(surface.checked, vec![false, false, false]);
    assert_eq!(surface.markers, vec![false, false, false]);
}

#[test]
fn load_tolerates_non_json_stored_text() {
    let store = MemoryKeyValueStore::new();
    store.set("/checklists/SID", "not json").unwrap();

    let mut checklist =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(2), page("/checklists/SID"));
    checklist.load().unwrap();

    let (_, surface) = checklist.into_parts();
    assert_eq!(surface.checked, vec![false, false]);
}

#[test]
fn load_with_absent_entry_is_a_no_op() {
    let store = MemoryKeyValueStore::new();
    let mut checklist =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(2), page("/checklists/SID"));
    checklist.load().unwrap();

    let (_, surface) = checklist.into_parts();
    assert_eq!(surface.checked, vec![false, false]);
}

#[test]
fn save_with_zero_items_writes_nothing() {
    let store = MemoryKeyValueStore::new();
    let mut checklist =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(0), page("/checklists/EMPTY"));
    checklist.save().unwrap();

    assert!(store.is_empty());
}

#[test]
fn reset_clears_items_markers_and_stored_entry() {
    let store = MemoryKeyValueStore::new();
    let mut surface = FakeChecklist::with_items(3);
    surface.checked = vec![true, true, true];
    surface.markers = vec![true, true, true];

    let mut checklist = ChecklistStateStore::new(&store, surface, page("/checklists/AIR"));
    checklist.save().unwrap();
    checklist.reset().unwrap();

    assert_eq!(store.get("/checklists/AIR").unwrap(), None);
    let (_, surface) = checklist.into_parts();
    assert_eq!(surface.checked, vec![false, false, false]);
    assert_eq!(surface.markers, vec![false, false, false]);

    // Loading after reset restores nothing.
    let mut reloaded =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(3), page("/checklists/AIR"));
    reloaded.load().unwrap();
    let (_, surface) = reloaded.into_parts();
    assert_eq!(surface.checked, vec![false, false, false]);
}

#[test]
fn reset_is_idempotent_without_items_or_entry() {
    let store = MemoryKeyValueStore::new();
    let mut checklist =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(0), page("/checklists/EMPTY"));
    checklist.reset().unwrap();
    checklist.reset().unwrap();
}

#[test]
fn set_item_updates_marker_and_persists_immediately() {
    let store = MemoryKeyValueStore::new();
    let mut checklist =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(3), page("/checklists/AIR"));

    checklist.set_item(0, true).unwrap();
    assert_eq!(
        store.get("/checklists/AIR").unwrap().as_deref(),
        Some("[true,false,false]")
    );

    checklist.set_item(2, true).unwrap();
    assert_eq!(
        store.get("/checklists/AIR").unwrap().as_deref(),
        Some("[true,false,true]")
    );

    checklist.set_item(0, false).unwrap();
    assert_eq!(
        store.get("/checklists/AIR").unwrap().as_deref(),
        Some("[false,false,true]")
    );

    let (_, surface) = checklist.into_parts();
    assert_eq!(surface.markers, vec![false, false, true]);
}

#[test]
fn set_item_out_of_range_is_ignored() {
    let store = MemoryKeyValueStore::new();
    let mut checklist =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(2), page("/checklists/AIR"));
    checklist.set_item(5, true).unwrap();

    assert!(store.is_empty());
}

#[test]
fn pages_own_distinct_entries() {
    let store = MemoryKeyValueStore::new();

    let mut surface_a = FakeChecklist::with_items(2);
    surface_a.checked = vec![true, false];
    let mut checklist_a = ChecklistStateStore::new(&store, surface_a, page("/checklists/AIR"));
    checklist_a.save().unwrap();

    let mut surface_b = FakeChecklist::with_items(2);
    surface_b.checked = vec![false, true];
    let mut checklist_b = ChecklistStateStore::new(&store, surface_b, page("/checklists/SID"));
    checklist_b.save().unwrap();

    assert_eq!(
        store.get("/checklists/AIR").unwrap().as_deref(),
        Some("[true,false]")
    );
    assert_eq!(
        store.get("/checklists/SID").unwrap().as_deref(),
        Some("[false,true]")
    );

    checklist_a.reset().unwrap();
    assert_eq!(store.get("/checklists/AIR").unwrap(), None);
    assert!(store.get("/checklists/SID").unwrap().is_some());
}

#[test]
fn event_hooks_drive_the_same_operations() {
    let store = MemoryKeyValueStore::new();
    let mut checklist =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(3), page("/checklists/AIR"));

    checklist.on_change(1, true).unwrap();
    assert_eq!(
        store.get("/checklists/AIR").unwrap().as_deref(),
        Some("[false,true,false]")
    );

    let mut restored =
        ChecklistStateStore::new(&store, FakeChecklist::with_items(3), page("/checklists/AIR"));
    restored.on_ready().unwrap();
    assert!(restored.surface().is_checked(1));

    restored.on_reset().unwrap();
    assert_eq!(store.get("/checklists/AIR").unwrap(), None);
}
