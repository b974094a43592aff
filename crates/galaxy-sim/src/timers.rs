//! Single-threaded timer queue for delayed and repeating callbacks.
//!
//! Timers are plain data: an event tag plus a due time on the simulation
//! clock. The engine pops due entries at the start of every unpaused tick
//! and dispatches them. Entries due at the same millisecond fire in the
//! order they were first scheduled. Because the clock only advances while
//! the game runs, pausing needs no bookkeeping here.

use std::collections::{BTreeMap, HashMap};

use hecs::Entity;

use galaxy_boss_ai::fsm::BossTrigger;

/// Handle used to cancel a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Everything a timer can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Enemy shot cadence.
    EnemyVolley,
    KamikazeShoot { alien: Entity },
    KamikazeExpire { alien: Entity, shoot_timer: TimerId },
    Boss { boss: Entity, trigger: BossTrigger },
    ClearBossFlash { boss: Entity },
    /// Complete the level after an h-bomb detonation.
    HBombClear,
    /// Start the next level after a completion.
    LevelRestart,
}

/// A timer that has come due.
#[derive(Debug, Clone, Copy)]
pub struct FiredTimer {
    pub id: TimerId,
    pub due_ms: u64,
    pub event: TimerEvent,
}

#[derive(Debug, Clone)]
struct Scheduled {
    event: TimerEvent,
    period_ms: Option<u64>,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    /// Ordered by (due time, id); ids grow monotonically.
    queue: BTreeMap<(u64, TimerId), Scheduled>,
    /// id -> due time, for cancellation.
    index: HashMap<TimerId, u64>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `event` once, `delay_ms` after `now_ms`.
    pub fn schedule_once(&mut self, now_ms: u64, delay_ms: u64, event: TimerEvent) -> TimerId {
        self.insert(now_ms + delay_ms, None, event)
    }

    /// Fire `event` every `period_ms`, first at `now_ms + period_ms`.
    pub fn schedule_repeating(&mut self, now_ms: u64, period_ms: u64, event: TimerEvent) -> TimerId {
        debug_assert!(period_ms > 0, "repeating timer needs a positive period");
        self.insert(now_ms + period_ms, Some(period_ms.max(1)), event)
    }

    /// Remove a timer. Returns false if it already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Drop every timer.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pop the earliest timer due at or before `now_ms`.
    ///
    /// Repeating timers are re-armed one period after their due time, keeping
    /// their id, before being returned.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<FiredTimer> {
        let (&(due, id), _) = self.queue.first_key_value()?;
        if due > now_ms {
            return None;
        }
        let scheduled = self.queue.remove(&(due, id))?;
        self.index.remove(&id);

        if let Some(period) = scheduled.period_ms {
            let next_due = due + period;
            self.queue.insert((next_due, id), scheduled.clone());
            self.index.insert(id, next_due);
        }

        Some(FiredTimer {
            id,
            due_ms: due,
            event: scheduled.event,
        })
    }

    fn insert(&mut self, due_ms: u64, period_ms: Option<u64>, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.insert((due_ms, id), Scheduled { event, period_ms });
        self.index.insert(id, due_ms);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order_then_schedule_order() {
        let mut timers = TimerQueue::new();
        timers.schedule_once(0, 200, TimerEvent::LevelRestart);
        timers.schedule_once(0, 100, TimerEvent::HBombClear);
        timers.schedule_once(0, 100, TimerEvent::EnemyVolley);

        let fired: Vec<TimerEvent> = std::iter::from_fn(|| timers.pop_due(1000))
            .map(|f| f.event)
            .collect();
        assert_eq!(
            fired,
            vec![
                TimerEvent::HBombClear,
                TimerEvent::EnemyVolley,
                TimerEvent::LevelRestart
            ]
        );
        assert!(timers.is_empty());
    }

    #[test]
    fn test_not_due_yet() {
        let mut timers = TimerQueue::new();
        timers.schedule_once(0, 3000, TimerEvent::HBombClear);
        assert!(timers.pop_due(2999).is_none());
        assert!(timers.pop_due(3000).is_some());
    }

    #[test]
    fn test_repeating_rearms_with_same_id() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_repeating(0, 500, TimerEvent::EnemyVolley);

        let first = timers.pop_due(500).unwrap();
        assert_eq!(first.id, id);
        assert_eq!(first.due_ms, 500);
        assert!(timers.pop_due(999).is_none());

        let second = timers.pop_due(1000).unwrap();
        assert_eq!(second.id, id);
        assert_eq!(second.due_ms, 1000);
        assert!(timers.is_scheduled(id));
    }

    #[test]
    fn test_catch_up_fires_each_missed_period() {
        let mut timers = TimerQueue::new();
        timers.schedule_repeating(0, 333, TimerEvent::EnemyVolley);
        let count = std::iter::from_fn(|| timers.pop_due(1000)).count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_repeating(0, 100, TimerEvent::EnemyVolley);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id), "second cancel is a no-op");
        assert!(timers.pop_due(10_000).is_none());
    }

    #[test]
    fn test_one_shot_is_gone_after_firing() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_once(0, 10, TimerEvent::LevelRestart);
        assert!(timers.pop_due(10).is_some());
        assert!(!timers.is_scheduled(id));
        assert!(!timers.cancel(id));
    }
}
