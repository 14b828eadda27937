//! Frontier management for a single crawl run
//!
//! This module handles:
//! - The FIFO queue of URLs waiting to be visited
//! - The enqueued set, so a URL enters the queue at most once per run
//! - The visited set and the page-count bound

use std::collections::{HashSet, VecDeque};

/// Breadth-first frontier with visited-state deduplication
///
/// A URL moves from pending (queued) to visited exactly once. The frontier
/// stops handing out URLs once `max_pages` of them have been visited.
#[derive(Debug)]
pub struct Frontier {
    /// URLs waiting to be visited, in discovery order
    queue: VecDeque<String>,

    /// Every URL ever queued in this run, visited or not
    enqueued: HashSet<String>,

    /// URLs already dequeued
    visited: HashSet<String>,

    /// Upper bound on the size of `visited`
    max_pages: usize,
}

impl Frontier {
    /// Creates a frontier holding only the seed URL
    pub fn new(seed_url: impl Into<String>, max_pages: usize) -> Self {
        let mut frontier = Self {
            queue: VecDeque::new(),
            enqueued: HashSet::new(),
            visited: HashSet::new(),
            max_pages,
        };
        frontier.enqueue(seed_url);
        frontier
    }

    /// Takes the next URL to visit and marks it visited
    ///
    /// Returns `None` once the queue is empty or `max_pages` URLs have been
    /// visited. Queue entries that were already visited are discarded.
    pub fn next_url(&mut self) -> Option<String> {
        while self.visited.len() < self.max_pages {
            let url = self.queue.pop_front()?;

            if self.visited.contains(&url) {
                tracing::trace!("Discarding already visited URL: {}", url);
                continue;
            }

            self.visited.insert(url.clone());
            return Some(url);
        }

        None
    }

    /// Appends a URL to the tail of the queue unless it was seen before
    ///
    /// Returns true if the URL was queued.
    pub fn enqueue(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();

        if self.visited.contains(&url) || self.enqueued.contains(&url) {
            return false;
        }

        self.enqueued.insert(url.clone());
        self.queue.push_back(url);
        true
    }

    /// Number of URLs visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting in the queue
    pub fn frontier_size(&self) -> usize {
        self.queue.len()
    }

    /// The page-count bound for this run
    pub fn max_pages(&self) -> usize {
        self.max_pages
    }
}
