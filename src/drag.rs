//! Pointer drag-to-scroll for horizontal rows.
//!
//! The algorithm is host independent: rows are reached through [`ScrollRow`]
//! and the document-level subscription is an opaque session guard `G` owned
//! by [`DragController`]. The guard is acquired when the first row starts
//! dragging and dropped when the last one stops, so listeners and the
//! grabbing cursor never outlive a drag session.

/// Host capability for one horizontally scrollable row.
pub trait ScrollRow {
    /// Left offset of the row relative to the page (`offsetLeft`).
    fn left_offset(&self) -> f64;
    /// Current horizontal scroll offset (`scrollLeft`).
    fn scroll_offset(&self) -> f64;
    /// Write a new scroll offset. Hosts clamp to their scroll range.
    fn set_scroll_offset(&self, value: f64);
}

impl<T: ScrollRow + ?Sized> ScrollRow for &T {
    fn left_offset(&self) -> f64 {
        (**self).left_offset()
    }
    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }
    fn set_scroll_offset(&self, value: f64) {
        (**self).set_scroll_offset(value)
    }
}

/// Per-row drag state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    /// Pointer X at drag start, relative to the row's left offset.
    pub start_pointer_x: f64,
    pub start_scroll_offset: f64,
}

impl DragState {
    /// Start dragging. Returns false (and changes nothing) when the row is absent.
    pub fn begin<R: ScrollRow + ?Sized>(&mut self, pointer_x: f64, row: Option<&R>) -> bool {
        let Some(row) = row else {
            return false;
        };
        self.dragging = true;
        self.start_pointer_x = pointer_x - row.left_offset();
        self.start_scroll_offset = row.scroll_offset();
        true
    }

    /// Scroll offset the row should have with the pointer at `pointer_x`.
    pub fn scroll_target(&self, pointer_x: f64, left_offset: f64) -> f64 {
        let x = pointer_x - left_offset;
        let delta = x - self.start_pointer_x;
        self.start_scroll_offset - delta
    }

    /// Track the pointer. Returns true when the row offset was written.
    pub fn update<R: ScrollRow + ?Sized>(&self, pointer_x: f64, row: Option<&R>) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(row) = row else {
            return false;
        };
        row.set_scroll_offset(self.scroll_target(pointer_x, row.left_offset()));
        true
    }

    pub fn end(&mut self) {
        self.dragging = false;
    }
}

/// Global page styling forced while a drag session is live.
pub trait PageChrome {
    /// Grabbing cursor on, text selection off.
    fn grab(&self);
    /// Back to the page defaults.
    fn release(&self);
}

/// Holds the page in "grabbing" mode until dropped.
pub struct GrabGuard<C: PageChrome> {
    chrome: C,
}

impl<C: PageChrome> GrabGuard<C> {
    pub fn new(chrome: C) -> Self {
        chrome.grab();
        Self { chrome }
    }
}

impl<C: PageChrome> Drop for GrabGuard<C> {
    fn drop(&mut self) {
        self.chrome.release();
    }
}

/// Drag states for a fixed set of rows keyed by `K`, plus the live session
/// guard `G` while any of them is dragging.
pub struct DragController<K, G> {
    slots: Vec<(K, DragState)>,
    session: Option<G>,
}

impl<K: Copy + PartialEq, G> DragController<K, G> {
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            slots: keys.into_iter().map(|k| (k, DragState::default())).collect(),
            session: None,
        }
    }

    pub fn state(&self, key: K) -> Option<&DragState> {
        self.slots.iter().find(|(k, _)| *k == key).map(|(_, s)| s)
    }

    pub fn is_dragging(&self, key: K) -> bool {
        self.state(key).is_some_and(|s| s.dragging)
    }

    /// True while at least one row is dragging.
    pub fn is_active(&self) -> bool {
        self.slots.iter().any(|(_, s)| s.dragging)
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Start dragging `key`. The first active row acquires the session via
    /// `acquire`; if that yields `None` the drag is rolled back.
    ///
    /// Unknown keys and absent rows are no-ops returning false.
    pub fn begin<R, A>(&mut self, key: K, pointer_x: f64, row: Option<&R>, acquire: A) -> bool
    where
        R: ScrollRow + ?Sized,
        A: FnOnce() -> Option<G>,
    {
        let Some(idx) = self.slots.iter().position(|(k, _)| *k == key) else {
            return false;
        };
        let previous = self.slots[idx].1;
        if !self.slots[idx].1.begin(pointer_x, row) {
            return false;
        }
        if self.session.is_none() {
            match acquire() {
                Some(session) => self.session = Some(session),
                None => {
                    self.slots[idx].1 = previous;
                    return false;
                }
            }
        }
        true
    }

    /// Move every dragging row to follow `pointer_x`. Rows are resolved through
    /// `lookup` at call time; absent rows are skipped. Returns true if any row
    /// offset was written.
    pub fn update<R, F>(&self, pointer_x: f64, mut lookup: F) -> bool
    where
        R: ScrollRow,
        F: FnMut(K) -> Option<R>,
    {
        let mut wrote = false;
        for (key, state) in self.slots.iter().filter(|(_, s)| s.dragging) {
            let row = lookup(*key);
            wrote |= state.update(pointer_x, row.as_ref());
        }
        wrote
    }

    /// End the drag on every row and release the session. Returns the keys
    /// that were dragging.
    pub fn end(&mut self) -> Vec<K> {
        let mut ended = Vec::new();
        for (key, state) in self.slots.iter_mut() {
            if state.dragging {
                ended.push(*key);
            }
            state.end();
        }
        self.session = None;
        ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeRow {
        left: f64,
        scroll: Cell<f64>,
    }

    impl FakeRow {
        fn new(left: f64, scroll: f64) -> Self {
            Self {
                left,
                scroll: Cell::new(scroll),
            }
        }
    }

    impl ScrollRow for FakeRow {
        fn left_offset(&self) -> f64 {
            self.left
        }
        fn scroll_offset(&self) -> f64 {
            self.scroll.get()
        }
        fn set_scroll_offset(&self, value: f64) {
            self.scroll.set(value);
        }
    }

    #[derive(Clone, Default)]
    struct FakeChrome {
        grabbing: Rc<Cell<bool>>,
        grabs: Rc<Cell<u32>>,
    }

    impl PageChrome for FakeChrome {
        fn grab(&self) {
            self.grabbing.set(true);
            self.grabs.set(self.grabs.get() + 1);
        }
        fn release(&self) {
            self.grabbing.set(false);
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Row {
        A,
        B,
    }

    #[test]
    fn begin_records_relative_start() {
        let row = FakeRow::new(20.0, 0.0);
        let mut state = DragState::default();
        assert!(state.begin(100.0, Some(&row)));
        assert!(state.dragging);
        assert_eq!(state.start_pointer_x, 80.0);
        assert_eq!(state.start_scroll_offset, 0.0);
    }

    #[test]
    fn begin_without_row_is_noop() {
        let mut state = DragState::default();
        assert!(!state.begin::<FakeRow>(100.0, None));
        assert_eq!(state, DragState::default());
    }

    #[test]
    fn update_moves_opposite_to_pointer() {
        let row = FakeRow::new(20.0, 40.0);
        let mut state = DragState::default();
        state.begin(100.0, Some(&row));
        assert!(state.update(70.0, Some(&row)));
        assert_eq!(row.scroll_offset(), 70.0);
        assert!(state.update(130.0, Some(&row)));
        assert_eq!(row.scroll_offset(), 10.0);
    }

    #[test]
    fn update_before_begin_leaves_offset() {
        let row = FakeRow::new(0.0, 25.0);
        let state = DragState::default();
        assert!(!state.update(500.0, Some(&row)));
        assert_eq!(row.scroll_offset(), 25.0);
    }

    #[test]
    fn update_after_row_unmounted_is_noop() {
        let row = FakeRow::new(0.0, 0.0);
        let mut state = DragState::default();
        state.begin(10.0, Some(&row));
        assert!(!state.update::<FakeRow>(50.0, None));
        assert!(state.dragging);
    }

    #[test]
    fn session_spans_first_begin_to_end() {
        let chrome = FakeChrome::default();
        let a = FakeRow::new(0.0, 0.0);
        let b = FakeRow::new(0.0, 0.0);
        let mut ctl: DragController<Row, GrabGuard<FakeChrome>> =
            DragController::new([Row::A, Row::B]);

        assert!(ctl.begin(Row::A, 10.0, Some(&a), || Some(GrabGuard::new(chrome.clone()))));
        assert!(chrome.grabbing.get());
        assert!(ctl.begin(Row::B, 10.0, Some(&b), || Some(GrabGuard::new(chrome.clone()))));
        assert_eq!(chrome.grabs.get(), 1, "second row reuses the live session");

        let ended = ctl.end();
        assert_eq!(ended, vec![Row::A, Row::B]);
        assert!(!ctl.is_active());
        assert!(!ctl.has_session());
        assert!(!chrome.grabbing.get());
    }

    #[test]
    fn failed_acquire_rolls_back() {
        let a = FakeRow::new(0.0, 0.0);
        let mut ctl: DragController<Row, ()> = DragController::new([Row::A]);
        assert!(!ctl.begin(Row::A, 10.0, Some(&a), || None));
        assert!(!ctl.is_dragging(Row::A));
        assert!(!ctl.has_session());
    }

    #[test]
    fn unknown_key_is_noop() {
        let a = FakeRow::new(0.0, 0.0);
        let mut ctl: DragController<Row, ()> = DragController::new([Row::A]);
        assert!(!ctl.begin(Row::B, 10.0, Some(&a), || Some(())));
        assert!(!ctl.has_session());
    }

    #[test]
    fn rows_scroll_independently() {
        let a = FakeRow::new(0.0, 100.0);
        let b = FakeRow::new(50.0, 0.0);
        let mut ctl: DragController<Row, ()> = DragController::new([Row::A, Row::B]);
        ctl.begin(Row::A, 200.0, Some(&a), || Some(()));

        let lookup = |k: Row| match k {
            Row::A => Some(&a),
            Row::B => Some(&b),
        };
        assert!(ctl.update(150.0, lookup));
        assert_eq!(a.scroll_offset(), 150.0);
        assert_eq!(b.scroll_offset(), 0.0);

        ctl.end();
        assert!(!ctl.update(0.0, lookup));
        assert_eq!(a.scroll_offset(), 150.0);
    }

    #[test]
    fn dropping_controller_releases_chrome() {
        let chrome = FakeChrome::default();
        let a = FakeRow::new(0.0, 0.0);
        {
            let mut ctl: DragController<Row, GrabGuard<FakeChrome>> =
                DragController::new([Row::A]);
            ctl.begin(Row::A, 0.0, Some(&a), || Some(GrabGuard::new(chrome.clone())));
            assert!(chrome.grabbing.get());
        }
        assert!(!chrome.grabbing.get());
    }
}
