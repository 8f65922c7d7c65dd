use std::collections::VecDeque;

use crate::{Action, Params};

/// A single step of experience for training.
#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub state: Vec<f32>,
    pub action: Action,
    pub reward: f32, // immediate reward seen when the step was taken
    pub value: f32,  // discounted return accumulated from later rewards
}

impl Experience {
    pub fn new(state: Vec<f32>, action: Action, reward: f32) -> Self {
        Self {
            state,
            action,
            reward,
            value: 0.0,
        }
    }
}

/// Bounded, time-ordered experience buffer. Oldest entries are evicted first.
#[derive(Debug, Clone)]
pub struct Memory {
    entries: VecDeque<Experience>,
    capacity: usize,
    discount: f32,
    horizon: usize,
}

impl Memory {
    pub fn new(capacity: usize) -> Self {
        Self::with_discount(capacity, Params::DISCOUNT, Params::REWARD_HORIZON)
    }

    /// `horizon` is the furthest step back (from the newest entry) a reward
    /// reaches. A horizon at least as long as the memory credits every entry.
    pub fn with_discount(capacity: usize, discount: f32, horizon: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            discount,
            horizon,
        }
    }

    /// Append an experience. Evicts the oldest one when over capacity.
    pub fn push(&mut self, experience: Experience) {
        self.entries.push_back(experience);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Credit `reward` to recent history: `reward * discount^k` for the entry
    /// `k` steps back from the newest, up to and including `k == horizon`.
    pub fn propagate_reward(&mut self, reward: f32) {
        let discount = self.discount;
        for (k, entry) in self
            .entries
            .iter_mut()
            .rev()
            .take(self.horizon.saturating_add(1))
            .enumerate()
        {
            entry.value += reward * discount.powi(k as i32);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Experience> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&Experience> {
        self.entries.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Experience> + '_ {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tag: f32) -> Experience {
        Experience::new(vec![tag], Action::Stay, 0.0)
    }

    #[test]
    fn test_push_evicts_oldest_first() {
        let mut memory = Memory::new(3);
        for tag in [1.0, 2.0, 3.0, 4.0] {
            memory.push(tagged(tag));
        }
        assert_eq!(memory.len(), 3);
        let tags: Vec<f32> = memory.iter().map(|e| e.state[0]).collect();
        assert_eq!(tags, vec![2.0, 3.0, 4.0], "A evicted, B C D kept");
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut memory = Memory::new(5);
        for i in 0..100 {
            memory.push(tagged(i as f32));
            assert!(memory.len() <= memory.capacity());
        }
        assert_eq!(memory.get(0).map(|e| e.state[0]), Some(95.0));
        assert_eq!(memory.last().map(|e| e.state[0]), Some(99.0));
    }

    #[test]
    fn test_propagate_reward_decays_backwards() {
        let mut memory = Memory::new(10);
        for i in 0..4 {
            memory.push(tagged(i as f32));
        }
        memory.propagate_reward(-1.0);

        let values: Vec<f32> = memory.iter().map(|e| e.value).collect();
        let expected = [-0.8f32.powi(3), -0.8f32.powi(2), -0.8, -1.0];
        for (got, want) in values.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_propagate_reward_accumulates() {
        let mut memory = Memory::new(10);
        memory.push(tagged(0.0));
        memory.propagate_reward(1.0);
        memory.push(tagged(1.0));
        memory.propagate_reward(1.0);

        assert!((memory.get(0).map(|e| e.value).unwrap_or_default() - 1.8).abs() < 1e-6);
        assert_eq!(memory.get(1).map(|e| e.value), Some(1.0));
    }

    #[test]
    fn test_propagate_reward_stops_at_horizon() {
        // 0.8^k underflows f32 long before k = 500, so count with no decay
        let len = 600;
        let mut memory = Memory::with_discount(1000, 1.0, Params::REWARD_HORIZON);
        for i in 0..len {
            memory.push(tagged(i as f32));
        }
        memory.propagate_reward(1.0);

        let touched = memory.iter().filter(|e| e.value != 0.0).count();
        assert_eq!(touched, 501, "Exactly the newest 501 entries are credited");

        // Entry 502 back and older are untouched
        for index in 0..(len - 501) {
            assert_eq!(memory.get(index).map(|e| e.value), Some(0.0));
        }
    }

    #[test]
    fn test_propagate_reward_uses_exact_powers() {
        let len = 600;
        let mut memory = Memory::new(1000);
        for i in 0..len {
            memory.push(tagged(i as f32));
        }
        memory.propagate_reward(1.0);

        for k in 0..=500 {
            let value = memory.get(len - 1 - k).map(|e| e.value).unwrap_or(f32::NAN);
            assert_eq!(value, 0.8f32.powi(k as i32), "Decay at k = {k}");
        }
        assert_eq!(memory.get(len - 502).map(|e| e.value), Some(0.0));
    }

    #[test]
    fn test_unbounded_horizon_credits_everything() {
        let mut memory = Memory::with_discount(10, 1.0, usize::MAX);
        for i in 0..4 {
            memory.push(tagged(i as f32));
        }
        memory.propagate_reward(-1.0);
        assert!(memory.iter().all(|e| e.value == -1.0));
    }

    #[test]
    fn test_propagate_reward_on_empty_memory() {
        let mut memory = Memory::new(3);
        memory.propagate_reward(1.0);
        assert!(memory.is_empty());
    }
}
