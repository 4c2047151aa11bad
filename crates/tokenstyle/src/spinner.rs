//! Global loading-spinner state.
//!
//! A [`GlobalSpinner`] owns one boolean and hands out two capabilities over
//! it: [`SpinnerState`] to read and observe the flag, and [`SpinnerActions`]
//! to change it. Readers and writers never see each other, only the shared
//! flag.
//!
//! Both capabilities also have a detached default for code running without
//! a provider: a detached [`SpinnerState`] always reads `false` and a
//! detached [`SpinnerActions`] ignores every update.
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use tokenstyle::GlobalSpinner;
//!
//! let spinner = GlobalSpinner::new();
//! let state = spinner.state();
//! let actions = spinner.actions();
//!
//! let changes = Arc::new(AtomicUsize::new(0));
//! let seen = Arc::clone(&changes);
//! let _subscription = state.subscribe(move |_| {
//!     seen.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! {
//!     let _busy = actions.show();
//!     assert!(state.get());
//! }
//! assert!(!state.get());
//! assert_eq!(changes.load(Ordering::SeqCst), 2);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

struct CellState {
    visible: bool,
    guards: usize,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

struct SpinnerCell {
    inner: Mutex<CellState>,
    // Held across delivery so listeners see changes in the order they happened.
    delivery: Mutex<()>,
}

impl SpinnerCell {
    fn new() -> Self {
        Self {
            inner: Mutex::new(CellState {
                visible: false,
                guards: 0,
                next_id: 0,
                listeners: Vec::new(),
            }),
            delivery: Mutex::new(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CellState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn get(&self) -> bool {
        self.lock().visible
    }

    fn apply(&self, update: impl FnOnce(&mut CellState) -> bool) {
        let _delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        let (visible, listeners): (bool, Vec<Listener>) = {
            let mut state = self.lock();
            let next = update(&mut *state);
            if next == state.visible {
                return;
            }
            state.visible = next;
            tracing::trace!(visible = next, guards = state.guards, "global spinner changed");
            let listeners = state.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (next, listeners)
        };

        // Listeners run without the state lock so they can read the flag.
        for listener in listeners {
            listener(visible);
        }
    }

    fn acquire(&self) {
        self.apply(|state| {
            state.guards += 1;
            true
        });
    }

    fn release(&self) {
        self.apply(|state| {
            state.guards = state.guards.saturating_sub(1);
            state.visible && state.guards > 0
        });
    }

    fn subscribe(&self, listener: Listener) -> u64 {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, id: u64) {
        self.lock().listeners.retain(|(existing, _)| *existing != id);
    }
}

/// Owner of the global spinner flag. The flag starts hidden.
#[derive(Clone)]
pub struct GlobalSpinner {
    cell: Arc<SpinnerCell>,
}

impl GlobalSpinner {
    pub fn new() -> Self {
        Self {
            cell: Arc::new(SpinnerCell::new()),
        }
    }

    /// The read capability.
    pub fn state(&self) -> SpinnerState {
        SpinnerState {
            cell: Some(Arc::clone(&self.cell)),
        }
    }

    /// The write capability.
    pub fn actions(&self) -> SpinnerActions {
        SpinnerActions {
            cell: Some(Arc::clone(&self.cell)),
        }
    }
}

impl Default for GlobalSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GlobalSpinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalSpinner")
            .field("visible", &self.cell.get())
            .finish()
    }
}

/// Read access to the spinner flag.
#[derive(Clone, Default)]
pub struct SpinnerState {
    cell: Option<Arc<SpinnerCell>>,
}

impl SpinnerState {
    /// Returns whether the spinner is showing. Detached state reads `false`.
    pub fn get(&self) -> bool {
        self.cell.as_ref().is_some_and(|cell| cell.get())
    }

    /// Calls `listener` with the new value each time the flag changes.
    ///
    /// Listeners run on the thread that changed the flag, one change at a
    /// time and in the order the changes were made, so the last value a
    /// listener saw always matches [`SpinnerState::get`]. A listener may read
    /// the flag but must not change it. The listener stays registered until
    /// the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        match &self.cell {
            Some(cell) => Subscription {
                id: Some(cell.subscribe(Arc::new(listener))),
                cell: Arc::downgrade(cell),
            },
            None => Subscription {
                id: None,
                cell: Weak::new(),
            },
        }
    }

    /// Returns true if this state reads from a [`GlobalSpinner`].
    pub fn is_attached(&self) -> bool {
        self.cell.is_some()
    }
}

impl fmt::Debug for SpinnerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinnerState")
            .field("attached", &self.is_attached())
            .field("visible", &self.get())
            .finish()
    }
}

/// Write access to the spinner flag.
#[derive(Clone, Default)]
pub struct SpinnerActions {
    cell: Option<Arc<SpinnerCell>>,
}

impl SpinnerActions {
    /// Shows or hides the spinner.
    pub fn set(&self, visible: bool) {
        self.update(|_| visible);
    }

    /// Replaces the flag with `f(current)`.
    ///
    /// `f` runs while the flag is locked and must not call back into the
    /// spinner.
    pub fn update(&self, f: impl FnOnce(bool) -> bool) {
        if let Some(cell) = &self.cell {
            cell.apply(|state| f(state.visible));
        }
    }

    /// Shows the spinner until the returned guard is dropped.
    ///
    /// Guards nest: with several guards alive the spinner stays visible
    /// until the last one is dropped.
    ///
    /// ```rust
    /// use tokenstyle::GlobalSpinner;
    ///
    /// let spinner = GlobalSpinner::new();
    /// let guard = spinner.actions().show();
    /// assert!(spinner.state().get());
    /// drop(guard);
    /// assert!(!spinner.state().get());
    /// ```
    pub fn show(&self) -> SpinnerGuard {
        if let Some(cell) = &self.cell {
            cell.acquire();
        }
        SpinnerGuard {
            cell: self.cell.clone(),
        }
    }

    /// Returns true if this handle writes to a [`GlobalSpinner`].
    pub fn is_attached(&self) -> bool {
        self.cell.is_some()
    }
}

impl fmt::Debug for SpinnerActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinnerActions")
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Unregisters a spinner listener when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: Option<u64>,
    cell: Weak<SpinnerCell>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let (Some(id), Some(cell)) = (self.id, self.cell.upgrade()) {
            cell.unsubscribe(id);
        }
    }
}

/// Keeps the spinner visible while alive. Returned by [`SpinnerActions::show`].
///
/// Dropping the last live guard hides the spinner.
#[must_use = "dropping a SpinnerGuard releases the spinner immediately"]
pub struct SpinnerGuard {
    cell: Option<Arc<SpinnerCell>>,
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        if let Some(cell) = &self.cell {
            cell.release();
        }
    }
}

impl fmt::Debug for SpinnerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinnerGuard")
            .field("attached", &self.cell.is_some())
            .finish()
    }
}
