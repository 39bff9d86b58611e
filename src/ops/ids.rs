use chrono::Utc;

use crate::model::config::IdStyle;
use crate::model::task::{Task, TaskId};

/// Source of session-unique task ids.
///
/// Numeric ids only ever grow, so an id is never handed out twice even after
/// its task has been deleted. Ids already present in the list (seeded tasks)
/// are skipped. Once the numeric range is used up (a seed can hold
/// `i64::MAX`), ids continue as `"<i64::MAX>-1"`, `"<i64::MAX>-2"`, ...
#[derive(Debug, Clone)]
pub struct IdGenerator {
    style: IdStyle,
    last: i64,
    /// Last suffix issued after the numeric range ran out
    spill: u64,
}

fn spill_id(n: u64) -> String {
    format!("{}-{}", i64::MAX, n)
}

/// Suffix of an overflow id. `u64::MAX` is left alone so there is always a
/// larger suffix to hand out.
fn spill_number(id: &str) -> Option<u64> {
    let rest = id.strip_prefix(&format!("{}-", i64::MAX))?;
    rest.parse::<u64>().ok().filter(|n| *n < u64::MAX)
}

impl IdGenerator {
    pub fn new(style: IdStyle) -> Self {
        IdGenerator {
            style,
            last: 0,
            spill: 0,
        }
    }

    pub fn style(&self) -> IdStyle {
        self.style
    }

    /// Record an id that exists outside the generator so it is never reissued
    pub fn observe(&mut self, id: &TaskId) {
        if let Ok(n) = id.as_str().parse::<i64>() {
            self.last = self.last.max(n);
        } else if let Some(n) = spill_number(id.as_str()) {
            self.spill = self.spill.max(n);
        }
    }

    /// Produce an id not used by any task in `tasks` nor issued before
    pub fn next_id(&mut self, tasks: &[Task]) -> TaskId {
        let in_use = |id: &str| tasks.iter().any(|t| t.id.as_str() == id);

        let mut candidate = self.last.checked_add(1).map(|floor| match self.style {
            IdStyle::Timestamp => Utc::now().timestamp_millis().max(floor),
            IdStyle::Counter => floor,
        });
        while let Some(n) = candidate {
            let id = n.to_string();
            if !in_use(&id) {
                self.last = n;
                return TaskId::new(id);
            }
            candidate = n.checked_add(1);
        }

        self.last = i64::MAX;
        loop {
            self.spill = self.spill.saturating_add(1);
            let id = spill_id(self.spill);
            if !in_use(&id) {
                tracing::debug!(id = %id, "numeric ids exhausted");
                return TaskId::new(id);
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new(IdStyle::default())
    }
}
