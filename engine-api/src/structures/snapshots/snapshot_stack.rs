use crate::structures::snapshots::snapshot::Snapshot;

/// Session-owned undo stack of snapshots, replacing the singleton snapshot manager pattern: every
/// completed scan pushes its output snapshot, and undo is simply popping the stack back to the
/// previous result. No process-wide mutable state backs this -- callers own a `SnapshotStack`
/// value directly.
#[derive(Default)]
pub struct SnapshotStack {
    snapshots: Vec<Snapshot>,
}

impl SnapshotStack {
    pub fn new() -> Self {
        Self { snapshots: Vec::new() }
    }

    pub fn push(
        &mut self,
        snapshot: Snapshot,
    ) {
        self.snapshots.push(snapshot);
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Snapshot> {
        self.snapshots.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::memory::memory_alignment::MemoryAlignment;

    #[test]
    fn push_then_pop_restores_previous_snapshot() {
        let mut stack = SnapshotStack::new();
        let first = Snapshot::new("first".to_string(), vec![], MemoryAlignment::Alignment4, 4);
        let second = Snapshot::new("second".to_string(), vec![], MemoryAlignment::Alignment4, 4);

        stack.push(first);
        stack.push(second);
        assert_eq!(stack.current().unwrap().get_name(), "second");

        stack.pop();
        assert_eq!(stack.current().unwrap().get_name(), "first");
    }

    #[test]
    fn empty_stack_has_no_current_snapshot() {
        let stack = SnapshotStack::new();
        assert!(stack.current().is_none());
        assert!(stack.is_empty());
    }
}
