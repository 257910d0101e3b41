//! Forward-window extrema in linear time.
//!
//! For every index `i`, the extremum of `prices[i+1 ..= min(i+N, n-1)]`, i.e. strictly after `i`.
//! The last index has no forward window and yields `None`.
//!
//! A monotonic queue of candidate indices is kept in a preallocated buffer with head/tail cursors.
//! Every index is admitted once and evicted at most once, so cost is O(n) for any N.

use crate::config::Direction;

/// Comparison policy for the monotonic queue.
pub trait ExtremumMode {
    /// True when `candidate` makes `incumbent` useless as a future answer.
    fn dominates(candidate: f64, incumbent: f64) -> bool;
}

/// Forward maximum (Up hunting)
pub struct Highest;

/// Forward minimum (Down hunting)
pub struct Lowest;

impl ExtremumMode for Highest {
    #[inline]
    fn dominates(candidate: f64, incumbent: f64) -> bool {
        candidate >= incumbent
    }
}

impl ExtremumMode for Lowest {
    #[inline]
    fn dominates(candidate: f64, incumbent: f64) -> bool {
        candidate <= incumbent
    }
}

/// Deque of indices over a fixed arena. Cursors only move forward, so the
/// arena never needs more than one slot per series element.
struct MonotonicQueue {
    slots: Vec<usize>,
    head: usize,
    tail: usize,
}

impl MonotonicQueue {
    fn with_capacity(n: usize) -> Self {
        Self {
            slots: vec![0; n],
            head: 0,
            tail: 0,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline]
    fn front(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.slots[self.head])
    }

    #[inline]
    fn back(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.slots[self.tail - 1])
    }

    #[inline]
    fn push_back(&mut self, idx: usize) {
        self.slots[self.tail] = idx;
        self.tail += 1;
    }

    #[inline]
    fn pop_back(&mut self) {
        self.tail -= 1;
    }

    #[inline]
    fn pop_front(&mut self) {
        self.head += 1;
    }
}

/// Generic scan shared by both modes.
pub fn forward_extrema<M: ExtremumMode>(prices: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = prices.len();
    let mut out = vec![None; n];
    if n < 2 || window == 0 {
        return out;
    }

    let mut queue = MonotonicQueue::with_capacity(n);
    let mut next_admit = 1;

    for (i, slot) in out.iter_mut().enumerate() {
        // 1. Admit everything up to the far edge of i's window
        let far_edge = i.saturating_add(window).min(n - 1);
        while next_admit <= far_edge {
            let price = prices[next_admit];
            while let Some(back) = queue.back() {
                if M::dominates(price, prices[back]) {
                    queue.pop_back();
                } else {
                    break;
                }
            }
            queue.push_back(next_admit);
            next_admit += 1;
        }

        // 2. Expire anything at or before i (window is strictly forward)
        while let Some(front) = queue.front() {
            if front <= i {
                queue.pop_front();
            } else {
                break;
            }
        }

        *slot = queue.front().map(|idx| prices[idx]);
    }

    out
}

pub fn forward_max(prices: &[f64], window: usize) -> Vec<Option<f64>> {
    forward_extrema::<Highest>(prices, window)
}

pub fn forward_min(prices: &[f64], window: usize) -> Vec<Option<f64>> {
    forward_extrema::<Lowest>(prices, window)
}

/// The extremum that matters for a given hunt: max for Up, min for Down.
pub fn forward_extrema_for(
    prices: &[f64],
    window: usize,
    direction: Direction,
) -> Vec<Option<f64>> {
    match direction {
        Direction::Up => forward_max(prices, window),
        Direction::Down => forward_min(prices, window),
    }
}
