//! Resource ledgers that pay renewal upkeep.
//!
//! A ledger is a consumable numeric balance owned by a wearer. Wearers
//! without one are resource-exempt: renewal succeeds without payment.

use serde::{Deserialize, Serialize};

/// A queryable, decrementable resource balance.
pub trait ResourceLedger {
    /// The current balance.
    fn balance(&self) -> i32;

    /// Atomically check `balance >= amount` and decrement.
    ///
    /// Returns `true` on success. On failure the balance is untouched.
    /// Callers pass strictly positive amounts.
    fn try_deduct(&mut self, amount: i32) -> bool;
}

/// An experience-point pool, the player-style ledger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpPool {
    points: i32,
}

impl XpPool {
    /// Create a pool with an initial balance, clamped to be non-negative.
    pub fn new(points: i32) -> Self {
        Self {
            points: points.max(0),
        }
    }

    /// The current point balance.
    pub fn points(&self) -> i32 {
        self.points
    }

    /// Add points to the pool, saturating at `i32::MAX`.
    pub fn gain(&mut self, amount: i32) {
        self.points = self.points.saturating_add(amount.max(0));
    }

    /// Returns `true` if the pool is drained.
    pub fn is_empty(&self) -> bool {
        self.points == 0
    }
}

impl ResourceLedger for XpPool {
    fn balance(&self) -> i32 {
        self.points
    }

    fn try_deduct(&mut self, amount: i32) -> bool {
        if self.points < amount {
            return false;
        }
        self.points -= amount;
        true
    }
}

impl std::fmt::Display for XpPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "XP: {}", self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_negative_to_zero() {
        let pool = XpPool::new(-5);
        assert_eq!(pool.points(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn deduct_succeeds_with_sufficient_balance() {
        let mut pool = XpPool::new(20);
        assert!(pool.try_deduct(10));
        assert_eq!(pool.points(), 10);
    }

    #[test]
    fn deduct_exact_balance_drains_the_pool() {
        let mut pool = XpPool::new(10);
        assert!(pool.try_deduct(10));
        assert!(pool.is_empty());
    }

    #[test]
    fn failed_deduct_leaves_balance_untouched() {
        let mut pool = XpPool::new(5);
        assert!(!pool.try_deduct(10));
        assert_eq!(pool.points(), 5);
    }

    #[test]
    fn gain_saturates() {
        let mut pool = XpPool::new(i32::MAX - 1);
        pool.gain(10);
        assert_eq!(pool.points(), i32::MAX);
    }

    #[test]
    fn display() {
        let pool = XpPool::new(7);
        assert_eq!(pool.to_string(), "XP: 7");
    }
}
