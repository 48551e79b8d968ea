use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use egui::mutex::Mutex;

/// A looping animation driven once per frame.
///
/// `frame` runs while the scheduler is locked, so it must not start or stop loops.
pub trait AnimationLoop: Send {
    /// Advances the loop to `elapsed` seconds since its first frame.
    fn frame(&mut self, elapsed: f64);
}

impl<F> AnimationLoop for F
where
    F: FnMut(f64) + Send,
{
    fn frame(&mut self, elapsed: f64) {
        self(elapsed);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoopId(u64);

struct Entry {
    anim: Box<dyn AnimationLoop>,
    started_at: Option<f64>,
}

#[derive(Default)]
struct Queue {
    next_id: u64,
    entries: BTreeMap<LoopId, Entry>,
    ticks: u64,
}

/// Owns running loops and advances them with host time.
#[derive(Clone)]
pub struct FrameScheduler {
    queue: Arc<Mutex<Queue>>,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self {
            queue: Arc::new(Mutex::new(Queue::default())),
        }
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let queue = self.queue.lock();
        f.debug_struct("FrameScheduler")
            .field("active", &queue.entries.len())
            .field("ticks", &queue.ticks)
            .finish()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `anim`. Its clock starts at the next [`FrameScheduler::tick`].
    ///
    /// The loop runs until the returned handle is stopped or dropped.
    #[must_use = "dropping the handle stops the loop immediately"]
    pub fn start(&self, anim: impl AnimationLoop + 'static) -> LoopHandle {
        let mut queue = self.queue.lock();
        let id = LoopId(queue.next_id);
        queue.next_id += 1;
        queue.entries.insert(
            id,
            Entry {
                anim: Box::new(anim),
                started_at: None,
            },
        );
        LoopHandle {
            id,
            queue: Arc::downgrade(&self.queue),
        }
    }

    /// Runs one frame of every live loop at host time `now` (seconds).
    ///
    /// Returns how many loops were advanced.
    pub fn tick(&self, now: f64) -> usize {
        let mut queue = self.queue.lock();
        queue.ticks += 1;
        for entry in queue.entries.values_mut() {
            let started_at = *entry.started_at.get_or_insert(now);
            entry.anim.frame((now - started_at).max(0.0));
        }
        queue.entries.len()
    }

    /// Number of loops still running.
    pub fn active(&self) -> usize {
        self.queue.lock().entries.len()
    }

    pub fn is_active(&self, id: LoopId) -> bool {
        self.queue.lock().entries.contains_key(&id)
    }

    /// Number of ticks so far.
    pub fn ticks(&self) -> u64 {
        self.queue.lock().ticks
    }
}

/// Scoped ownership of a running loop. Dropping it cancels the loop.
#[derive(Debug)]
pub struct LoopHandle {
    id: LoopId,
    queue: Weak<Mutex<Queue>>,
}

impl LoopHandle {
    pub fn id(&self) -> LoopId {
        self.id
    }

    pub fn is_running(&self) -> bool {
        self.queue
            .upgrade()
            .is_some_and(|q| q.lock().entries.contains_key(&self.id))
    }

    /// Cancels the loop. Returns `false` if it was already gone.
    pub fn stop(&mut self) -> bool {
        let Some(queue) = self.queue.upgrade() else {
            return false;
        };
        let removed = queue.lock().entries.remove(&self.id).is_some();
        self.queue = Weak::new();
        removed
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
