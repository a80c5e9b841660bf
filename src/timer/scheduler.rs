//! The repeating one-second decrement behind a running timer.
//!
//! A running timer holds exactly one [`Registration`]. The scheduler delivers a
//! [`TickMsg`] for it every interval; the timer re-arms after handling each
//! tick. Disarming bumps the timer's tag, so a tick that is already in flight
//! for an old registration is recognised as stale and dropped.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::time::Duration;

/// Message delivered once per interval for an armed registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickMsg {
    /// Id of the timer the tick belongs to.
    pub id: i64,
    tag: i64,
}

/// Identity of one armed decrement: timer id, generation tag and period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// Timer id.
    pub id: i64,
    /// Generation; changes on every arm and disarm.
    pub tag: i64,
    /// Time between ticks.
    pub interval: Duration,
}

impl Registration {
    /// The tick message for this registration.
    pub fn tick(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Whether `msg` was produced for this registration.
    pub fn owns(&self, msg: &TickMsg) -> bool {
        msg.id == self.id && msg.tag == self.tag
    }
}

/// Host primitive that turns a registration into periodic ticks.
pub trait Scheduler {
    /// Arms `registration`, returning the command that delivers its first tick.
    fn arm(&mut self, registration: Registration) -> Option<Cmd>;

    /// Schedules the next tick of a registration that just ticked.
    fn repeat(&mut self, registration: Registration) -> Option<Cmd>;

    /// Releases `registration`. No further ticks for it may reach the timer.
    fn disarm(&mut self, registration: Registration);
}

/// Scheduler backed by `bubbletea_rs::tick`.
///
/// Each tick is a one-shot command; disarming needs no bookkeeping because a
/// late tick carries the old tag and is ignored by the timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickScheduler;

impl TickScheduler {
    fn schedule(registration: Registration) -> Cmd {
        let msg = registration.tick();
        bubbletea_tick(registration.interval, move |_| Box::new(msg.clone()) as Msg)
    }
}

impl Scheduler for TickScheduler {
    fn arm(&mut self, registration: Registration) -> Option<Cmd> {
        Some(Self::schedule(registration))
    }

    fn repeat(&mut self, registration: Registration) -> Option<Cmd> {
        Some(Self::schedule(registration))
    }

    fn disarm(&mut self, _registration: Registration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            id: 7,
            tag: 3,
            interval: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_registration_owns_its_ticks() {
        let reg = registration();
        assert!(reg.owns(&reg.tick()));

        let newer = Registration { tag: 4, ..reg };
        assert!(!newer.owns(&reg.tick()));

        let other = Registration { id: 8, ..reg };
        assert!(!other.owns(&reg.tick()));
    }

    #[tokio::test]
    async fn test_tick_scheduler_delivers_tick() {
        let mut scheduler = TickScheduler;
        let reg = registration();
        let cmd = scheduler.arm(reg).expect("tick command");

        let msg = cmd.await.expect("tick message");
        let tick = msg.downcast_ref::<TickMsg>().expect("TickMsg");
        assert!(reg.owns(tick));
    }
}
