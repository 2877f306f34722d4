//! BFS frontier: the FIFO queue and the visited set for one run
//!
//! The queue may hold the same URL more than once when several links on a
//! page point at it. Only the first dequeue passes [`Frontier::mark_visited`],
//! so later copies are dropped without a fetch.

use std::collections::{HashSet, VecDeque};

/// A URL waiting to be visited, with its distance from the seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedUrl {
    /// The URL to fetch
    pub url: String,

    /// BFS depth
    pub depth: u32,
}

/// Queue and visited set owned by a single crawl run
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<QueuedUrl>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier holding only the seed at depth 0
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::default();
        frontier.push(seed, 0);
        frontier
    }

    /// Appends a URL to the back of the queue
    pub fn push(&mut self, url: impl Into<String>, depth: u32) {
        self.queue.push_back(QueuedUrl {
            url: url.into(),
            depth,
        });
    }

    /// Removes the URL at the front of the queue
    pub fn pop(&mut self) -> Option<QueuedUrl> {
        self.queue.pop_front()
    }

    /// Records a URL as visited
    ///
    /// Returns false if it was already visited. This is the only dedup gate.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of queue entries, duplicates included
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
