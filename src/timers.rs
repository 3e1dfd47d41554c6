use crate::effects::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Deferred work the page can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    ShowConsentBanner,
    CompleteSubmission,
    BeginStatusFade,
    FinishStatusFade,
}

#[derive(Debug, Default)]
pub struct TimerIds {
    next: u64,
}

impl TimerIds {
    pub fn allocate(&mut self) -> TimerId {
        self.next += 1;
        TimerId(self.next)
    }
}

#[derive(Debug, Clone)]
struct Pending {
    due_ms: u64,
    id: TimerId,
    task: Task,
}

/// Deterministic stand-in for the browser's timer queue.
///
/// Feed it the effects a controller returns; `Schedule` and `Cancel` are
/// applied here, everything else is handed back to the caller.
#[derive(Debug, Default)]
pub struct SimulatedClock {
    now_ms: u64,
    pending: Vec<Pending>,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_tasks(&self) -> Vec<Task> {
        self.pending.iter().map(|p| p.task).collect()
    }

    pub fn apply(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut rest = Vec::new();
        for effect in effects {
            match effect {
                Effect::Schedule { id, task, delay_ms } => self.pending.push(Pending {
                    due_ms: self.now_ms + u64::from(delay_ms),
                    id,
                    task,
                }),
                Effect::Cancel(id) => self.pending.retain(|p| p.id != id),
                other => rest.push(other),
            }
        }
        rest
    }

    /// Pops the earliest timer due at or before `until_ms` and moves the
    /// clock to its due time. Ties fire in scheduling order.
    pub fn next_due(&mut self, until_ms: u64) -> Option<(TimerId, Task)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(i, p)| (p.due_ms, *i))
            .map(|(i, _)| i)?;
        let fired = self.pending.remove(index);
        self.now_ms = fired.due_ms;
        Some((fired.id, fired.task))
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order_and_honours_cancel() {
        let mut ids = TimerIds::default();
        let (a, b, c) = (ids.allocate(), ids.allocate(), ids.allocate());
        let mut clock = SimulatedClock::new();
        let rest = clock.apply(vec![
            Effect::Schedule { id: a, task: Task::BeginStatusFade, delay_ms: 300 },
            Effect::Schedule { id: b, task: Task::ShowConsentBanner, delay_ms: 100 },
            Effect::Schedule { id: c, task: Task::CompleteSubmission, delay_ms: 100 },
            Effect::Alert("kept".into()),
        ]);
        assert_eq!(rest, vec![Effect::Alert("kept".into())]);

        clock.apply(vec![Effect::Cancel(c)]);
        assert_eq!(clock.next_due(99), None);
        assert_eq!(clock.next_due(1_000), Some((b, Task::ShowConsentBanner)));
        assert_eq!(clock.now_ms(), 100);
        assert_eq!(clock.next_due(1_000), Some((a, Task::BeginStatusFade)));
        assert_eq!(clock.next_due(1_000), None);
    }
}
