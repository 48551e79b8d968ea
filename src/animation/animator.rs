use std::collections::HashMap;
use std::sync::Arc;

use egui::{mutex::Mutex, Context, Id};

use super::instance::{AnimationProbe, ButtonAnimations};
use super::scheduler::FrameScheduler;

const KEY: &str = "egui_cyberpunk_animator";

struct Mounted {
    anims: ButtonAnimations,
    last_pass: u64,
}

/// Mount registry plus frame scheduler for every button drawn in one egui context.
///
/// egui has no unmount callback, so a button counts as unmounted once a pass
/// begins without it having been drawn in the pass before. Its
/// [`ButtonAnimations`] are dropped at that point, which stops its loops.
pub struct Animator {
    scheduler: FrameScheduler,
    mounts: HashMap<Id, Mounted>,
    pass: Option<u64>,
    now: f64,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            scheduler: FrameScheduler::new(),
            mounts: HashMap::new(),
            pass: None,
            now: 0.0,
        }
    }

    /// Sweeps stale mounts and ticks all loops. Runs at most once per pass.
    ///
    /// Returns `false` if `pass` was already processed.
    pub fn begin_pass(&mut self, pass: u64, now: f64) -> bool {
        if self.pass == Some(pass) {
            return false;
        }
        self.pass = Some(pass);
        self.now = now;

        let before = self.mounts.len();
        self.mounts.retain(|id, m| {
            let alive = m.last_pass + 1 >= pass;
            if !alive {
                log::debug!("button {id:?} unmounted, stopping its animations");
            }
            alive
        });
        let ticked = self.scheduler.tick(now);
        log::trace!(
            "pass {pass}: swept {} mounts, ticked {ticked} loops",
            before - self.mounts.len()
        );
        true
    }

    /// Returns the animations of `id`, starting them if this is its first draw.
    pub fn mount(&mut self, id: Id, seed: u64) -> &mut ButtonAnimations {
        let pass = self.pass.unwrap_or_default();
        let scheduler = &self.scheduler;
        let mounted = self.mounts.entry(id).or_insert_with(|| {
            log::debug!("button {id:?} mounted");
            Mounted {
                anims: ButtonAnimations::start(scheduler, seed),
                last_pass: pass,
            }
        });
        mounted.last_pass = pass;
        &mut mounted.anims
    }

    /// Unmounts `id` right away. Returns `false` if it was not mounted.
    pub fn unmount(&mut self, id: Id) -> bool {
        let removed = self.mounts.remove(&id).is_some();
        if removed {
            log::debug!("button {id:?} unmounted explicitly");
        }
        removed
    }

    pub fn is_mounted(&self, id: Id) -> bool {
        self.mounts.contains_key(&id)
    }

    /// Number of mounted buttons.
    pub fn mounted(&self) -> usize {
        self.mounts.len()
    }

    /// Number of loops still scheduled.
    pub fn active_loops(&self) -> usize {
        self.scheduler.active()
    }

    pub fn probe(&self, id: Id) -> Option<AnimationProbe> {
        self.mounts.get(&id).map(|m| m.anims.probe())
    }

    /// Host time of the current pass, in seconds.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }
}

#[derive(Clone)]
struct SharedAnimator(Arc<Mutex<Animator>>);

impl Default for SharedAnimator {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Animator::new())))
    }
}

/// Runs `f` on the [`Animator`] stored in `ctx`, creating it on first use.
pub fn with_animator<R>(ctx: &Context, f: impl FnOnce(&mut Animator) -> R) -> R {
    let shared = ctx.data_mut(|data| {
        data.get_temp_mut_or_default::<SharedAnimator>(Id::new(KEY))
            .clone()
    });
    let mut animator = shared.0.lock();
    f(&mut animator)
}

/// Advances the animator of `ctx` for the current pass.
///
/// Buttons call this on their own. Hosts should also call it once per frame
/// so buttons that are no longer drawn get unmounted.
pub fn begin_frame(ctx: &Context) {
    let pass = ctx.cumulative_pass_nr();
    let now = ctx.input(|i| i.time);
    let active = with_animator(ctx, |a| {
        a.begin_pass(pass, now);
        a.active_loops()
    });
    if active > 0 {
        ctx.request_repaint();
    }
}
