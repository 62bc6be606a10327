use crate::historystore::History;

/// Unbounded in-memory history. Lives as long as the process does.
#[derive(Debug, Default, Clone)]
pub struct InMemoryHistory {
    entries: Vec<String>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History for InMemoryHistory {
    fn add_entry(&mut self, entry: String) {
        self.entries.push(entry);
    }

    fn last_operations(&self, count: usize) -> Vec<String> {
        let start = self.entries.len().saturating_sub(count);
        self.entries[start..].to_vec()
    }
}
