//! Render-loop state machine.
//!
//! Earlier revisions of this effect kept lifecycle state in mutable locals
//! closed over by a pile of event listeners. Here the transitions live in
//! one pure object: every platform event is reported to `LoopState`, which
//! answers with the `Effects` the caller must execute (cancel or request a
//! frame, restart the settle timer, rebuild the pool). That keeps each
//! transition host-testable without a browser.
//!
//! Phases: Stopped → Running ⇄ Paused, and back to Stopped on dispose.
//! A disposed machine ignores all further events; re-entry requires a
//! fresh construction.

/// Handle returned by the platform's frame scheduler.
pub type FrameHandle = i32;
/// Handle returned by the platform's one-shot timer.
pub type TimerHandle = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Running,
    Paused,
}

/// What the caller must do after a transition. Defaults to "nothing".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Effects {
    pub cancel_frame: Option<FrameHandle>,
    pub cancel_settle: Option<TimerHandle>,
    pub request_frame: bool,
    pub schedule_settle: bool,
    pub reprovision: bool,
}

#[derive(Debug)]
pub struct LoopState {
    phase: Phase,
    hidden: bool,
    settling: bool,
    disposed: bool,
    frame: Option<FrameHandle>,
    settle: Option<TimerHandle>,
}

impl Default for LoopState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Stopped,
            hidden: false,
            settling: false,
            disposed: false,
            frame: None,
            settle: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame_handle(&self) -> Option<FrameHandle> {
        self.frame
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Leave Stopped. Requests the first frame unless the page is already
    /// hidden, in which case the machine starts Paused.
    pub fn start(&mut self) -> Effects {
        let mut fx = Effects::default();
        if self.disposed || self.phase != Phase::Stopped {
            return fx;
        }
        if self.hidden {
            self.phase = Phase::Paused;
        } else {
            self.phase = Phase::Running;
            fx.request_frame = self.frame.is_none();
        }
        fx
    }

    /// Record the handle of the frame the caller just scheduled. At most one
    /// frame is ever in flight.
    pub fn frame_scheduled(&mut self, handle: FrameHandle) {
        self.frame = Some(handle);
    }

    /// Record the handle of the settle timer the caller just armed.
    pub fn settle_scheduled(&mut self, handle: TimerHandle) {
        self.settle = Some(handle);
    }

    /// The scheduled frame callback fired. Consumes the in-flight handle and
    /// reports whether the caller should draw and schedule the next frame.
    pub fn frame_began(&mut self) -> bool {
        self.frame = None;
        !self.disposed && self.phase == Phase::Running
    }

    /// Page visibility flipped. Hiding cancels the pending frame and leaves
    /// the last drawn frame frozen; becoming visible resumes unless a resize
    /// is still settling.
    pub fn visibility_changed(&mut self, hidden: bool) -> Effects {
        let mut fx = Effects::default();
        if self.disposed {
            return fx;
        }
        self.hidden = hidden;
        match self.phase {
            Phase::Running if hidden => {
                self.phase = Phase::Paused;
                fx.cancel_frame = self.frame.take();
            }
            Phase::Paused if !hidden && !self.settling => {
                self.phase = Phase::Running;
                fx.request_frame = self.frame.is_none();
            }
            _ => {}
        }
        fx
    }

    /// A resize event arrived. Pauses mid-resize and restarts the settle
    /// timer; a storm of events keeps cancelling the previous timer so only
    /// the last one fires.
    pub fn resize_observed(&mut self) -> Effects {
        let mut fx = Effects::default();
        if self.disposed || self.phase == Phase::Stopped {
            return fx;
        }
        self.settling = true;
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
        fx.cancel_frame = self.frame.take();
        fx.cancel_settle = self.settle.take();
        fx.schedule_settle = true;
        fx
    }

    /// The settle timer elapsed: geometry is stable, so the pool must be
    /// rebuilt. Resumes only if the page is visible.
    pub fn settle_fired(&mut self) -> Effects {
        let mut fx = Effects::default();
        self.settle = None;
        if self.disposed || !self.settling {
            return fx;
        }
        self.settling = false;
        fx.reprovision = true;
        if self.phase == Phase::Paused && !self.hidden {
            self.phase = Phase::Running;
            fx.request_frame = self.frame.is_none();
        }
        fx
    }

    /// Tear down: cancel anything pending and refuse all further events.
    /// Idempotent; always leaves the machine Stopped.
    pub fn dispose(&mut self) -> Effects {
        let mut fx = Effects::default();
        if self.disposed {
            return fx;
        }
        self.disposed = true;
        self.settling = false;
        self.phase = Phase::Stopped;
        fx.cancel_frame = self.frame.take();
        fx.cancel_settle = self.settle.take();
        fx
    }
}
