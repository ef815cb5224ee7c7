//! Telemetry for the task loop
//!
//! Collects loop events and aggregate counters, and installs the `tracing`
//! subscriber used for structured logs.

pub mod logging;

pub use logging::{init_logging, init_logging_with_level};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Events kept in the log before the oldest are dropped
pub const DEFAULT_EVENT_CAPACITY: usize = 1000;

/// Telemetry event types
#[derive(Debug, Clone, PartialEq)]
pub enum LoopEvent {
    /// Goal classified into a task
    TaskAnalyzed {
        goal: String,
        constraints: usize,
        success_criteria: usize,
    },
    /// Plan synthesized
    PlanCreated {
        steps: usize,
        from_experience: bool,
    },
    /// One step finished, successfully or not
    StepFinished {
        index: usize,
        capability: String,
        success: bool,
    },
    /// Whole plan finished
    ExecutionFinished {
        success: bool,
        errors: usize,
        duration_ms: u64,
    },
    /// Learning update applied
    LearningApplied {
        confidence_level: f64,
        success_rate: f64,
    },
}

/// Telemetry statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopStats {
    pub tasks_analyzed: usize,
    pub plans_created: usize,
    pub plans_from_experience: usize,
    pub steps_succeeded: usize,
    pub steps_failed: usize,
    pub runs_succeeded: usize,
    pub runs_failed: usize,
    pub learning_updates: usize,
}

/// Telemetry collector
///
/// Clones share the same event log. The log is bounded; `LoopStats` keeps
/// totals for every event ever recorded.
#[derive(Debug, Clone)]
pub struct TelemetryCollector {
    events: Arc<Mutex<VecDeque<(Instant, LoopEvent)>>>,
    capacity: usize,
    stats: Arc<Mutex<LoopStats>>,
    start_time: Instant,
}

impl TelemetryCollector {
    /// Create a new telemetry collector
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create a collector keeping at most `capacity` events
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(
                capacity.min(DEFAULT_EVENT_CAPACITY),
            ))),
            capacity,
            stats: Arc::new(Mutex::new(LoopStats::default())),
            start_time: Instant::now(),
        }
    }

    /// Record an event
    pub fn record(&self, event: LoopEvent) {
        {
            let mut stats = lock(&self.stats);
            match &event {
                LoopEvent::TaskAnalyzed { .. } => stats.tasks_analyzed += 1,
                LoopEvent::PlanCreated {
                    from_experience, ..
                } => {
                    stats.plans_created += 1;
                    if *from_experience {
                        stats.plans_from_experience += 1;
                    }
                }
                LoopEvent::StepFinished { success, .. } => {
                    if *success {
                        stats.steps_succeeded += 1;
                    } else {
                        stats.steps_failed += 1;
                    }
                }
                LoopEvent::ExecutionFinished { success, .. } => {
                    if *success {
                        stats.runs_succeeded += 1;
                    } else {
                        stats.runs_failed += 1;
                    }
                }
                LoopEvent::LearningApplied { .. } => stats.learning_updates += 1,
            }
        }

        let mut events = lock(&self.events);
        if self.capacity == 0 {
            return;
        }
        while events.len() >= self.capacity {
            events.pop_front();
        }
        events.push_back((Instant::now(), event));
    }

    /// Get current statistics
    pub fn get_stats(&self) -> LoopStats {
        lock(&self.stats).clone()
    }

    /// Get elapsed time since start
    pub fn elapsed(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get event count
    pub fn event_count(&self) -> usize {
        lock(&self.events).len()
    }

    /// Get recent events (last n), oldest first
    pub fn recent_events(&self, n: usize) -> Vec<LoopEvent> {
        let events = lock(&self.events);
        let start = events.len().saturating_sub(n);
        events.iter().skip(start).map(|(_, e)| e.clone()).collect()
    }

    /// Fraction of steps that succeeded (1.0 before any step ran)
    pub fn step_success_rate(&self) -> f64 {
        let stats = lock(&self.stats);
        let total = stats.steps_succeeded + stats.steps_failed;
        if total == 0 {
            1.0
        } else {
            stats.steps_succeeded as f64 / total as f64
        }
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(success: bool) -> LoopEvent {
        LoopEvent::StepFinished {
            index: 1,
            capability: "generic".to_string(),
            success,
        }
    }

    #[test]
    fn test_collector_creation() {
        let collector = TelemetryCollector::new();
        assert_eq!(collector.event_count(), 0);
        assert_eq!(collector.get_stats(), LoopStats::default());
    }

    #[test]
    fn test_plan_events() {
        let collector = TelemetryCollector::new();
        collector.record(LoopEvent::PlanCreated {
            steps: 5,
            from_experience: false,
        });
        collector.record(LoopEvent::PlanCreated {
            steps: 4,
            from_experience: true,
        });

        let stats = collector.get_stats();
        assert_eq!(stats.plans_created, 2);
        assert_eq!(stats.plans_from_experience, 1);
    }

    #[test]
    fn test_step_success_rate() {
        let collector = TelemetryCollector::new();
        assert_eq!(collector.step_success_rate(), 1.0);

        collector.record(step(true));
        collector.record(step(true));
        collector.record(step(false));

        let rate = collector.step_success_rate();
        assert!((rate - 0.666).abs() < 0.01);
    }

    #[test]
    fn test_recent_events() {
        let collector = TelemetryCollector::new();
        for i in 0..10 {
            collector.record(LoopEvent::StepFinished {
                index: i,
                capability: "search".to_string(),
                success: true,
            });
        }

        let recent = collector.recent_events(3);
        assert_eq!(recent.len(), 3);
        assert!(matches!(recent[2], LoopEvent::StepFinished { index: 9, .. }));
    }

    #[test]
    fn test_event_log_is_bounded() {
        let collector = TelemetryCollector::with_capacity(8);
        for i in 0..20 {
            collector.record(LoopEvent::StepFinished {
                index: i,
                capability: "generic".to_string(),
                success: i % 2 == 0,
            });
        }

        assert_eq!(collector.event_count(), 8);
        let stats = collector.get_stats();
        assert_eq!(stats.steps_succeeded, 10);
        assert_eq!(stats.steps_failed, 10);

        let recent = collector.recent_events(8);
        assert!(matches!(recent[0], LoopEvent::StepFinished { index: 12, .. }));
        assert!(matches!(recent[7], LoopEvent::StepFinished { index: 19, .. }));
    }

    #[test]
    fn test_clones_share_log() {
        let collector = TelemetryCollector::new();
        let clone = collector.clone();
        clone.record(step(false));
        assert_eq!(collector.event_count(), 1);
        assert_eq!(collector.get_stats().steps_failed, 1);
    }
}
