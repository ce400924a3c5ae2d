pub mod members;
pub mod projects;

use std::ops::RangeInclusive;

use crate::error::{AppError, AppResult};

// What happens to an over-full collection when its ceiling is lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReducePolicy {
    Truncate,
    Retain,
}

#[derive(Debug, Clone)]
pub struct Capacity {
    limit: Option<usize>,
    choices: RangeInclusive<usize>,
}

impl Capacity {
    pub fn new(choices: RangeInclusive<usize>) -> Self {
        Self {
            limit: None,
            choices,
        }
    }

    pub fn set(&mut self, limit: usize) -> AppResult<usize> {
        if !self.choices.contains(&limit) {
            return Err(AppError::Validation(format!(
                "capacity must be between {} and {}",
                self.choices.start(),
                self.choices.end()
            )));
        }

        self.limit = Some(limit);
        Ok(limit)
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn require(&self, guidance: &str) -> AppResult<usize> {
        self.limit
            .ok_or_else(|| AppError::CapacityUnset(guidance.to_string()))
    }

    pub fn is_full(&self, len: usize) -> bool {
        self.limit.is_some_and(|limit| len >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_only_accepts_menu_values() {
        let mut capacity = Capacity::new(1..=4);

        assert!(matches!(capacity.set(0), Err(AppError::Validation(_))));
        assert!(matches!(capacity.set(5), Err(AppError::Validation(_))));
        assert_eq!(capacity.set(4).expect("4 should be accepted"), 4);
        assert_eq!(capacity.limit(), Some(4));
    }

    #[test]
    fn unset_capacity_yields_guidance() {
        let capacity = Capacity::new(1..=3);

        match capacity.require("Pick a size first.") {
            Err(AppError::CapacityUnset(guidance)) => {
                assert_eq!(guidance, "Pick a size first.")
            }
            other => panic!("expected CapacityUnset, got {other:?}"),
        }
        assert!(!capacity.is_full(0));
    }
}
