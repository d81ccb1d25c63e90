// Pointer-down subscriptions
//
// Views that care about clicks anywhere on screen (click-outside detection)
// hold a PointerSubscription while they are active. Dropping the guard
// deregisters the view, whichever way it is deactivated.

use ratatui::layout::{Position, Rect};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::app::Route;

/// Registry of views currently listening for pointer-down events
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    listeners: Rc<RefCell<Vec<Route>>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner`; the registration lives as long as the returned guard
    pub fn subscribe(&self, owner: Route) -> PointerSubscription {
        self.listeners.borrow_mut().push(owner);
        tracing::trace!(owner = owner.path(), "Pointer listener registered");
        PointerSubscription {
            owner,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn is_subscribed(&self, owner: Route) -> bool {
        self.listeners.borrow().contains(&owner)
    }

    /// Snapshot of current listeners, in registration order
    pub fn listeners(&self) -> Vec<Route> {
        self.listeners.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Scoped registration handed out by [`PointerHub::subscribe`]
#[derive(Debug)]
pub struct PointerSubscription {
    owner: Route,
    listeners: Weak<RefCell<Vec<Route>>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            let mut listeners = listeners.borrow_mut();
            if let Some(index) = listeners.iter().position(|r| *r == self.owner) {
                listeners.remove(index);
            }
            tracing::trace!(owner = self.owner.path(), "Pointer listener released");
        }
    }
}

/// Whether a terminal cell lies inside an optional region
pub fn hit(region: Option<Rect>, column: u16, row: u16) -> bool {
    region.is_some_and(|rect| rect.contains(Position::new(column, row)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_released_on_drop() {
        let hub = PointerHub::new();
        {
            let _sub = hub.subscribe(Route::Compose);
            assert!(hub.is_subscribed(Route::Compose));
            assert_eq!(hub.listener_count(), 1);
        }
        assert!(!hub.is_subscribed(Route::Compose));
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_drop_removes_only_own_registration() {
        let hub = PointerHub::new();
        let compose = hub.subscribe(Route::Compose);
        let outreach = hub.subscribe(Route::Outreach);
        drop(compose);
        assert_eq!(hub.listeners(), vec![Route::Outreach]);
        drop(outreach);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_guard_outliving_hub_is_harmless() {
        let hub = PointerHub::new();
        let sub = hub.subscribe(Route::Compose);
        let listeners = Rc::downgrade(&hub.listeners);
        drop(hub);
        assert!(listeners.upgrade().is_none());
        drop(sub);
    }

    #[test]
    fn test_hit() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(hit(Some(rect), 10, 5));
        assert!(hit(Some(rect), 13, 6));
        assert!(!hit(Some(rect), 14, 6));
        assert!(!hit(None, 10, 5));
    }
}
