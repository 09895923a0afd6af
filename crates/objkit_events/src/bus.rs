use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use core::convert::Infallible;
use core::fmt;

use objkit_utils::hash::HashMap;

use crate::EventError;

// -----------------------------------------------------------------------------
// RegistrationId

/// Identifies one handler registration of an [`EventBus`].
///
/// Unique within the bus that issued it for the lifetime of that bus.
/// Displayed as `cb-` followed by 16 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationId(u64);

impl RegistrationId {
    /// Returns the raw id.
    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cb-{:016x}", self.0)
    }
}

// -----------------------------------------------------------------------------
// Handler

/// A boxed event handler taking the bus arguments by reference.
pub type Handler<A, E = Infallible> = Box<dyn FnMut(&A) -> Result<(), E> + Send + Sync>;

struct Registration<A, E> {
    id: RegistrationId,
    handler: Handler<A, E>,
}

// -----------------------------------------------------------------------------
// EventBus

/// Handlers grouped by event name, each group in subscription order.
///
/// Every handler of an event receives the same `&A` on
/// [`trigger`](EventBus::trigger). A handler error stops the dispatch and is
/// returned to the caller; use `E = Infallible` (the default) for handlers
/// that cannot fail.
///
/// # Examples
///
/// ```
/// use objkit_events::EventBus;
///
/// let mut bus: EventBus<String, String> = EventBus::new();
/// bus.subscribe("rename", |name: &String| {
///     if name.is_empty() { Err("empty name".to_string()) } else { Ok(()) }
/// });
///
/// assert!(bus.trigger("rename", &"Ann".to_string()).is_ok());
/// assert_eq!(bus.trigger("rename", &String::new()), Err("empty name".to_string()));
/// assert!(bus.trigger("unknown", &String::new()).is_ok());
/// ```
pub struct EventBus<A, E = Infallible> {
    events: HashMap<Cow<'static, str>, Vec<Registration<A, E>>>,
    next_id: u64,
}

impl<A, E> Default for EventBus<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, E> fmt::Debug for EventBus<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event, registrations) in &self.events {
            map.entry(event, &registrations.iter().map(|r| r.id).collect::<Vec<_>>());
        }
        map.finish()
    }
}

impl<A, E> EventBus<A, E> {
    /// Creates a bus with no handlers.
    #[inline]
    pub fn new() -> Self {
        Self {
            events: HashMap::default(),
            next_id: 0,
        }
    }

    fn issue_id(&mut self) -> RegistrationId {
        self.next_id += 1;
        RegistrationId(self.next_id)
    }

    /// Appends `handler` to the handlers of `event`.
    pub fn subscribe(
        &mut self,
        event: impl Into<Cow<'static, str>>,
        handler: impl FnMut(&A) -> Result<(), E> + Send + Sync + 'static,
    ) -> RegistrationId {
        self.subscribe_boxed(event, Box::new(handler))
    }

    /// Appends an already boxed `handler` to the handlers of `event`.
    pub fn subscribe_boxed(
        &mut self,
        event: impl Into<Cow<'static, str>>,
        handler: Handler<A, E>,
    ) -> RegistrationId {
        let event = event.into();
        let id = self.issue_id();
        log::trace!("subscribed `{id}` to event `{event}`");
        self.events
            .entry(event)
            .or_default()
            .push(Registration { id, handler });
        id
    }

    /// Appends a handler of unknown type to the handlers of `event`.
    ///
    /// `handler` must hold a [`Handler<A, E>`], otherwise it is rejected with
    /// [`EventError::InvalidHandler`] and the bus is unchanged.
    ///
    /// ```
    /// use objkit_events::{EventBus, EventError, Handler};
    ///
    /// let mut bus: EventBus<i32> = EventBus::new();
    ///
    /// let handler: Handler<i32> = Box::new(|_| Ok(()));
    /// assert!(bus.subscribe_any("tick", Box::new(handler)).is_ok());
    ///
    /// let err = bus.subscribe_any("tick", Box::new("not a handler")).unwrap_err();
    /// assert!(matches!(err, EventError::InvalidHandler { .. }));
    /// assert_eq!(bus.len("tick"), 1);
    /// ```
    pub fn subscribe_any(
        &mut self,
        event: impl Into<Cow<'static, str>>,
        handler: Box<dyn Any + Send>,
    ) -> Result<RegistrationId, EventError>
    where
        A: 'static,
        E: 'static,
    {
        let event = event.into();
        match handler.downcast::<Handler<A, E>>() {
            Ok(handler) => Ok(self.subscribe_boxed(event, *handler)),
            Err(_) => {
                log::debug!("rejected a non-callable handler for event `{event}`");
                Err(EventError::InvalidHandler { event })
            }
        }
    }

    /// Removes the registration `id` from the handlers of `event`.
    ///
    /// Returns `false` if `event` has no such registration.
    pub fn unsubscribe(&mut self, event: &str, id: RegistrationId) -> bool {
        let Some(registrations) = self.events.get_mut(event) else {
            return false;
        };
        let before = registrations.len();
        registrations.retain(|registration| registration.id != id);
        let removed = registrations.len() != before;
        if registrations.is_empty() {
            self.events.remove(event);
        }
        if removed {
            log::trace!("unsubscribed `{id}` from event `{event}`");
        }
        removed
    }

    /// Calls every handler of `event` with `args`, in subscription order.
    ///
    /// Does nothing if `event` has no handlers. Stops at the first handler
    /// error and returns it.
    pub fn trigger(&mut self, event: &str, args: &A) -> Result<(), E> {
        let Some(registrations) = self.events.get_mut(event) else {
            return Ok(());
        };
        for registration in registrations {
            (registration.handler)(args)?;
        }
        Ok(())
    }

    /// Removes every handler of `event`.
    pub fn clear(&mut self, event: &str) -> &mut Self {
        if self.events.remove(event).is_some() {
            log::trace!("cleared event `{event}`");
        }
        self
    }

    /// Returns the number of handlers of `event`.
    #[inline]
    pub fn len(&self, event: &str) -> usize {
        self.events.get(event).map_or(0, Vec::len)
    }

    /// Returns `true` if no event has a handler.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the events that have handlers, in no particular order.
    pub fn event_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.keys().map(|event| &**event)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::{EventBus, RegistrationId};

    fn recorder(
        log: &Arc<Mutex<Vec<String>>>,
        tag: &'static str,
    ) -> impl FnMut(&i32) -> Result<(), ()> + Send + Sync + 'static {
        let log = Arc::clone(log);
        move |value: &i32| {
            log.lock().unwrap().push(alloc::format!("{tag}:{value}"));
            Ok(())
        }
    }

    #[test]
    fn trigger_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus: EventBus<i32, ()> = EventBus::new();
        bus.subscribe("save", recorder(&log, "h1"));
        bus.subscribe("save", recorder(&log, "h2"));
        bus.subscribe("save", recorder(&log, "h3"));

        bus.trigger("save", &5).unwrap();
        assert_eq!(*log.lock().unwrap(), ["h1:5", "h2:5", "h3:5"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_handler() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus: EventBus<i32, ()> = EventBus::new();
        let _h1 = bus.subscribe("save", recorder(&log, "h1"));
        let h2 = bus.subscribe("save", recorder(&log, "h2"));

        assert!(bus.unsubscribe("save", h2));
        assert!(!bus.unsubscribe("save", h2));
        assert!(!bus.unsubscribe("load", h2));

        bus.trigger("save", &1).unwrap();
        assert_eq!(*log.lock().unwrap(), ["h1:1"]);
        assert_eq!(bus.len("save"), 1);
    }

    #[test]
    fn ids_are_unique() {
        let mut bus: EventBus<()> = EventBus::new();
        let ids: Vec<RegistrationId> = (0..16)
            .map(|i| bus.subscribe(if i % 2 == 0 { "a" } else { "b" }, |_| Ok(())))
            .collect();
        for (i, a) in ids.iter().enumerate() {
            assert!(ids[i + 1..].iter().all(|b| a != b));
        }
        assert_eq!(ids[0].to_string(), "cb-0000000000000001");
    }

    #[test]
    fn first_error_stops_dispatch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut bus: EventBus<i32, String> = EventBus::new();
        bus.subscribe("check", |v: &i32| if *v < 0 { Err("negative".to_string()) } else { Ok(()) });
        let counter = Arc::clone(&calls);
        bus.subscribe("check", move |_: &i32| {
            counter.fetch_add(1, Ordering::Relaxed);
            Ok(())
        });

        assert_eq!(bus.trigger("check", &-1), Err("negative".to_string()));
        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert!(bus.trigger("check", &1).is_ok());
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn clear_and_event_types() {
        let mut bus: EventBus<()> = EventBus::new();
        bus.subscribe("a", |_| Ok(()));
        bus.subscribe("b", |_| Ok(()));

        let mut events: Vec<&str> = bus.event_types().collect();
        events.sort_unstable();
        assert_eq!(events, vec!["a", "b"]);

        bus.clear("a").clear("missing");
        assert_eq!(bus.len("a"), 0);
        assert_eq!(bus.event_types().collect::<Vec<_>>(), ["b"]);

        bus.clear("b");
        assert!(bus.is_empty());
        assert!(bus.trigger("b", &()).is_ok());
    }

    #[test]
    fn bus_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}

        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus: EventBus<i32, ()> = EventBus::new();
        bus.subscribe("save", recorder(&log, "h1"));
        assert_send_sync(&bus);

        let handle = std::thread::spawn(move || bus.trigger("save", &2));
        assert_eq!(handle.join().unwrap(), Ok(()));
        assert_eq!(*log.lock().unwrap(), ["h1:2"]);
    }
}
