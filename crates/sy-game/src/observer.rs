//! Change notification for display code.

use core::fmt;
use std::rc::Rc;

use tracing::info;

/// Receives the value before and after each change of a subject.
pub trait Observer<T> {
    fn update(&self, old_value: &T, new_value: &T);
}

/// Holds registered observers and notifies them of value changes.
pub struct Subject<T> {
    observers: Vec<Rc<dyn Observer<T>>>,
}

impl<T> Subject<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Register an observer. Registering the same observer twice does nothing.
    pub fn add_observer(&mut self, observer: Rc<dyn Observer<T>>) {
        if !self.is_registered(&observer) {
            self.observers.push(observer);
        }
    }

    /// Unregister an observer. Does nothing if it was never registered.
    pub fn remove_observer(&mut self, observer: &Rc<dyn Observer<T>>) {
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
    }

    pub fn is_registered(&self, observer: &Rc<dyn Observer<T>>) -> bool {
        self.observers.iter().any(|o| Rc::ptr_eq(o, observer))
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn notify_observers(&self, old_value: &T, new_value: &T) {
        for observer in &self.observers {
            observer.update(old_value, new_value);
        }
    }

    /// Report a change from `old_value` to `new_value`.
    pub fn change_value(&self, old_value: &T, new_value: &T) {
        self.notify_observers(old_value, new_value);
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Observer that reports changes through `tracing`.
#[derive(Debug, Clone)]
pub struct LogObserver {
    subject: &'static str,
}

impl LogObserver {
    pub fn new(subject: &'static str) -> Self {
        Self { subject }
    }
}

impl<T: fmt::Display> Observer<T> for LogObserver {
    fn update(&self, old_value: &T, new_value: &T) {
        info!(subject = self.subject, %old_value, %new_value, "value changed");
    }
}
