//! Quiet-period batching of saves.
//!
//! Every [`Debouncer::push`] restarts the quiet period by bumping a tag and
//! scheduling a [`FlushMsg`] for the new tag. Only the message carrying the
//! latest tag releases the batch; earlier ones arrive stale and are dropped.
//! Values are keyed, so the batch holds the latest value per key.

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Sent when a quiet period ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushMsg {
    /// Id of the debouncer.
    pub id: i64,
    tag: i64,
}

/// Keyed debouncer.
#[derive(Debug)]
pub struct Debouncer<T> {
    /// Length of the quiet period.
    pub delay: Duration,
    id: i64,
    tag: i64,
    pending: BTreeMap<String, T>,
}

impl<T> Debouncer<T> {
    /// A debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            id: next_id(),
            tag: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Unique id used to route flush messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Number of keys waiting for a flush.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Whether `key` is waiting for a flush.
    pub fn is_pending(&self, key: &str) -> bool {
        self.pending.contains_key(key)
    }

    fn flush_msg(&self) -> FlushMsg {
        FlushMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Queues `value` under `key`, replacing any earlier value, and restarts
    /// the quiet period.
    pub fn push(&mut self, key: impl Into<String>, value: T) -> Cmd {
        self.pending.insert(key.into(), value);
        self.tag += 1;
        let msg = self.flush_msg();
        bubbletea_tick(self.delay, move |_| Box::new(msg.clone()) as Msg)
    }

    /// Drops the value queued under `key`.
    pub fn cancel(&mut self, key: &str) -> Option<T> {
        self.pending.remove(key)
    }

    /// The queued values if `msg` ends the current quiet period.
    pub fn accept(&mut self, msg: &FlushMsg) -> Option<Vec<T>> {
        if *msg != self.flush_msg() {
            return None;
        }
        Some(self.drain())
    }

    /// Takes every queued value now. Flush messages already scheduled become
    /// stale.
    pub fn drain(&mut self) -> Vec<T> {
        self.tag += 1;
        std::mem::take(&mut self.pending).into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_flush_releases() {
        let mut d = Debouncer::new(Duration::from_millis(300));
        let _ = d.push("a", 1);
        let first = d.flush_msg();
        let _ = d.push("b", 2);
        let second = d.flush_msg();

        assert_eq!(d.accept(&first), None);
        assert_eq!(d.accept(&second), Some(vec![1, 2]));
        assert_eq!(d.pending(), 0);
        assert_eq!(d.accept(&second), None);
    }

    #[test]
    fn test_latest_value_per_key() {
        let mut d = Debouncer::new(Duration::from_millis(300));
        let _ = d.push("a", "old");
        let _ = d.push("a", "new");
        let msg = d.flush_msg();
        assert_eq!(d.accept(&msg), Some(vec!["new"]));
    }

    #[test]
    fn test_cancel_and_drain() {
        let mut d = Debouncer::new(Duration::from_millis(300));
        let _ = d.push("a", 1);
        let _ = d.push("b", 2);
        let msg = d.flush_msg();

        assert_eq!(d.cancel("a"), Some(1));
        assert!(!d.is_pending("a"));
        assert_eq!(d.drain(), vec![2]);
        assert_eq!(d.accept(&msg), None);
    }

    #[test]
    fn test_foreign_flush_ignored() {
        let mut a: Debouncer<i32> = Debouncer::new(Duration::from_millis(300));
        let mut b: Debouncer<i32> = Debouncer::new(Duration::from_millis(300));
        let _ = a.push("k", 1);
        let _ = b.push("k", 2);
        assert_eq!(a.accept(&b.flush_msg()), None);
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn test_push_schedules_flush() {
        let mut d = Debouncer::new(Duration::from_millis(2));
        let cmd = d.push("a", 7);
        let msg = cmd.await.expect("flush message");
        let flush = msg.downcast_ref::<FlushMsg>().expect("FlushMsg");
        assert_eq!(d.accept(flush), Some(vec![7]));
    }
}
