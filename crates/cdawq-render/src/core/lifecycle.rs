use std::fmt;

/// Where a window is in its Init → (Update → Render)* → Shutdown sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// Constructed, no GPU resources yet.
    Created,
    /// Initialized and waiting for the next update.
    Ready,
    /// Updated this frame and waiting for render.
    Updated,
    /// Shut down; terminal.
    Closed,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    Init,
    Update,
    Render,
    Shutdown,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transition::Init => "init",
            Transition::Update => "update",
            Transition::Render => "render",
            Transition::Shutdown => "shutdown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("cannot {transition} a window in phase {from:?}")]
pub struct LifecycleError {
    pub from: Phase,
    pub transition: Transition,
}

/// Guards the order in which the runtime calls into an [`App`](super::App).
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            phase: Phase::Created,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Ready | Phase::Updated)
    }

    /// Moves to the phase `transition` leads to, or reports why it can't.
    pub fn advance(&mut self, transition: Transition) -> Result<Phase, LifecycleError> {
        let next = match (self.phase, transition) {
            (Phase::Created, Transition::Init) => Phase::Ready,
            (Phase::Ready, Transition::Update) => Phase::Updated,
            (Phase::Updated, Transition::Render) => Phase::Ready,
            (Phase::Closed, Transition::Shutdown) => {
                return Err(LifecycleError {
                    from: self.phase,
                    transition,
                });
            }
            (_, Transition::Shutdown) => Phase::Closed,
            (from, transition) => return Err(LifecycleError { from, transition }),
        };
        self.phase = next;
        Ok(next)
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_sequence() {
        let mut lc = Lifecycle::new();
        assert_eq!(lc.advance(Transition::Init), Ok(Phase::Ready));
        for _ in 0..3 {
            assert_eq!(lc.advance(Transition::Update), Ok(Phase::Updated));
            assert_eq!(lc.advance(Transition::Render), Ok(Phase::Ready));
        }
        assert_eq!(lc.advance(Transition::Shutdown), Ok(Phase::Closed));
        assert!(!lc.is_running());
    }

    #[test]
    fn update_before_init_is_rejected() {
        let mut lc = Lifecycle::new();
        let err = lc.advance(Transition::Update).unwrap_err();
        assert_eq!(err.from, Phase::Created);
        assert_eq!(err.transition, Transition::Update);
        assert_eq!(lc.phase(), Phase::Created);
    }

    #[test]
    fn render_requires_update_first() {
        let mut lc = Lifecycle::new();
        lc.advance(Transition::Init).unwrap();
        assert!(lc.advance(Transition::Render).is_err());
        lc.advance(Transition::Update).unwrap();
        assert!(lc.advance(Transition::Update).is_err());
    }

    #[test]
    fn exit_after_update_skips_render() {
        let mut lc = Lifecycle::new();
        lc.advance(Transition::Init).unwrap();
        lc.advance(Transition::Update).unwrap();
        assert_eq!(lc.advance(Transition::Shutdown), Ok(Phase::Closed));
    }

    #[test]
    fn shutdown_is_terminal() {
        let mut lc = Lifecycle::new();
        lc.advance(Transition::Shutdown).unwrap();
        assert!(lc.advance(Transition::Shutdown).is_err());
        assert!(lc.advance(Transition::Init).is_err());
    }

    #[test]
    fn init_only_once() {
        let mut lc = Lifecycle::new();
        lc.advance(Transition::Init).unwrap();
        let err = lc.advance(Transition::Init).unwrap_err();
        assert_eq!(err.to_string(), "cannot init a window in phase Ready");
    }
}
