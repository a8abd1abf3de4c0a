//! Shared, re-entrancy-guarded handle to a session.
//!
//! A UI holds a [`SharedSession`] and forwards clicks to it. While one click
//! is being processed the session is mutably borrowed, so a second click
//! that arrives from inside an observer callback finds it busy and is
//! dropped instead of being applied twice.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use parlor_core::Square;

use crate::error::SessionError;
use crate::observer::GameObserver;
use crate::record::MoveRecord;
use crate::session::{SelectOutcome, Session};

/// Reference-counted session with a single-operation-in-flight guard.
pub struct SharedSession<O = Box<dyn GameObserver>> {
    inner: Rc<RefCell<Session<O>>>,
}

/// Non-owning counterpart of [`SharedSession`], for observers that need to
/// call back into the session that notifies them.
pub struct WeakSession<O = Box<dyn GameObserver>> {
    inner: Weak<RefCell<Session<O>>>,
}

impl<O: GameObserver> SharedSession<O> {
    pub fn new(session: Session<O>) -> Self {
        SharedSession {
            inner: Rc::new(RefCell::new(session)),
        }
    }

    /// Forward a click. Returns [`SelectOutcome::Ignored`] if another
    /// operation is still running.
    pub fn click(&self, row: u8, col: u8) -> SelectOutcome {
        match self.inner.try_borrow_mut() {
            Ok(mut session) => session.select_square(row, col),
            Err(_) => {
                debug!(row, col, "click dropped, session busy");
                SelectOutcome::Ignored
            }
        }
    }

    /// Play a move directly.
    pub fn play(&self, from: Square, to: Square) -> Result<MoveRecord, SessionError> {
        let mut session = self.inner.try_borrow_mut().map_err(|_| SessionError::Busy)?;
        session.play(from, to)
    }

    /// Reset the game.
    pub fn reset(&self) -> Result<(), SessionError> {
        let mut session = self.inner.try_borrow_mut().map_err(|_| SessionError::Busy)?;
        session.reset();
        Ok(())
    }

    /// Run `f` with read access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&Session<O>) -> R) -> Result<R, SessionError> {
        let session = self.inner.try_borrow().map_err(|_| SessionError::Busy)?;
        Ok(f(&session))
    }

    pub fn downgrade(&self) -> WeakSession<O> {
        WeakSession {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<O> Clone for SharedSession<O> {
    fn clone(&self) -> Self {
        SharedSession {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<O: GameObserver> WeakSession<O> {
    /// Return the session if it is still alive.
    pub fn upgrade(&self) -> Option<SharedSession<O>> {
        self.inner.upgrade().map(|inner| SharedSession { inner })
    }
}

impl<O> Clone for WeakSession<O> {
    fn clone(&self) -> Self {
        WeakSession {
            inner: Weak::clone(&self.inner),
        }
    }
}
