use crate::Config;

/// The three board tasks, in dispatch order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Input,
    Game,
    Display,
}

#[derive(Debug, Clone, Copy)]
struct TaskSlot {
    task: Task,
    period: u32,
    countdown: u32,
}

/// Cooperative fixed-rate dispatcher.
///
/// Each task has its own period counter in scheduler ticks. Every task is due
/// on the first tick, then once per period.
#[derive(Debug, Clone)]
pub struct Scheduler {
    slots: Vec<TaskSlot>,
    ticks: u64,
}

impl Scheduler {
    pub fn new(config: &Config) -> Self {
        let slots = [
            (Task::Input, config.input_rate),
            (Task::Game, config.game_rate),
            (Task::Display, config.display_rate),
        ]
        .into_iter()
        .map(|(task, rate)| TaskSlot {
            task,
            period: config.period_for(rate),
            countdown: 0,
        })
        .collect();

        Self { slots, ticks: 0 }
    }

    /// Advance one scheduler tick and return the tasks due on it
    pub fn tick(&mut self) -> Vec<Task> {
        let mut due = Vec::new();
        for slot in &mut self.slots {
            if slot.countdown == 0 {
                due.push(slot.task);
                slot.countdown = slot.period;
            }
            slot.countdown -= 1;
        }
        self.ticks += 1;
        due
    }

    /// Scheduler ticks elapsed since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tasks_due_on_first_tick() {
        let mut scheduler = Scheduler::new(&Config::new());
        assert_eq!(
            scheduler.tick(),
            vec![Task::Input, Task::Game, Task::Display]
        );
    }

    #[test]
    fn test_task_counts_follow_rates() {
        let config = Config::new();
        let mut scheduler = Scheduler::new(&config);
        let (mut input, mut game, mut display) = (0, 0, 0);

        // One second of scheduler ticks
        for _ in 0..config.scheduler_rate {
            for task in scheduler.tick() {
                match task {
                    Task::Input => input += 1,
                    Task::Game => game += 1,
                    Task::Display => display += 1,
                }
            }
        }

        assert_eq!(input, 20);
        assert_eq!(game, 2);
        // 10_000 / 33 rounds the period down, so slightly more than 300
        assert_eq!(display, 304);
        assert_eq!(scheduler.ticks(), 10_000);
    }

    #[test]
    fn test_task_every_tick_when_rate_matches_scheduler() {
        let config = Config {
            scheduler_rate: 2,
            display_rate: 2,
            game_rate: 1,
            input_rate: 1,
            ..Config::default()
        };
        let mut scheduler = Scheduler::new(&config);
        assert_eq!(
            scheduler.tick(),
            vec![Task::Input, Task::Game, Task::Display]
        );
        assert_eq!(scheduler.tick(), vec![Task::Display]);
        assert_eq!(
            scheduler.tick(),
            vec![Task::Input, Task::Game, Task::Display]
        );
    }
}
