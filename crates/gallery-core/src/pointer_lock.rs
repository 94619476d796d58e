//! Exclusive pointer capture state.
//!
//! Only this session flips between `Unlocked` and `Locked`. Requests are
//! asynchronous: the host is asked to capture the pointer and later reports
//! the outcome through [`PointerLockSession::on_host_change`] or
//! [`PointerLockSession::on_host_error`].

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerLockState {
    #[default]
    Unlocked,
    Locked,
}

/// What changed after a host notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockTransition {
    Acquired,
    Released,
    Unchanged,
    /// A grant arrived for a request cancelled while it was in flight. The
    /// state stays `Unlocked`; the host must release the capture it made.
    Revoked,
}

#[derive(Debug, Default)]
pub struct PointerLockSession {
    state: PointerLockState,
    pending: bool,
    /// Set when a pending request is cancelled; the next grant is refused.
    refuse_grant: bool,
}

impl PointerLockSession {
    #[inline]
    pub fn state(&self) -> PointerLockState {
        self.state
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.state == PointerLockState::Locked
    }

    /// Returns true when the host should be asked to capture the pointer.
    pub fn request(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.pending = true;
        self.refuse_grant = false;
        log::debug!("[lock] capture requested");
        true
    }

    pub fn on_host_change(&mut self, locked: bool) -> LockTransition {
        let was_pending = std::mem::take(&mut self.pending);
        let refuse = std::mem::take(&mut self.refuse_grant);
        match (self.state, locked) {
            (PointerLockState::Unlocked, true) if refuse => {
                log::info!("[lock] late grant after cancel, releasing");
                LockTransition::Revoked
            }
            (PointerLockState::Unlocked, true) => {
                self.state = PointerLockState::Locked;
                log::info!("[lock] granted");
                LockTransition::Acquired
            }
            (PointerLockState::Locked, false) => {
                self.state = PointerLockState::Unlocked;
                log::info!("[lock] released by host");
                LockTransition::Released
            }
            (PointerLockState::Unlocked, false) => {
                if was_pending {
                    log::debug!("[lock] request denied");
                }
                LockTransition::Unchanged
            }
            (PointerLockState::Locked, true) => LockTransition::Unchanged,
        }
    }

    /// The host refused or failed to capture. State stays `Unlocked`.
    pub fn on_host_error(&mut self) {
        self.refuse_grant = false;
        if std::mem::take(&mut self.pending) {
            log::debug!("[lock] request failed");
        }
    }

    /// Explicit cancel (escape key, reset). Returns true when the host should
    /// be told to release capture. A request still in flight is marked so its
    /// grant is answered with a release.
    pub fn cancel(&mut self) -> bool {
        if std::mem::take(&mut self.pending) {
            self.refuse_grant = true;
        }
        if self.is_locked() {
            self.state = PointerLockState::Unlocked;
            log::info!("[lock] cancelled");
            true
        } else {
            false
        }
    }
}
