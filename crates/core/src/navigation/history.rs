use std::collections::VecDeque;

/// Back-history of visited page ids, optionally bounded.
///
/// When the bound is reached the oldest id is discarded to make room.
#[derive(Debug, Clone, Default)]
pub struct BackStack {
    entries: VecDeque<String>,
    limit: Option<usize>,
}

impl BackStack {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, id: String) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.entries.len() >= limit {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(id);
    }

    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}
