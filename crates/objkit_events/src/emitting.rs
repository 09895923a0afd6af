use alloc::borrow::Cow;

use crate::{EventBus, RegistrationId};

/// Event subscription for a type that owns an [`EventBus`].
///
/// Implementors only point at their bus; the operations forward to it.
///
/// # Examples
///
/// ```
/// use objkit_events::{EventBus, EventEmitting};
///
/// #[derive(Default)]
/// struct Document {
///     text: String,
///     events: EventBus<String>,
/// }
///
/// impl EventEmitting for Document {
///     type Args = String;
///     type Error = core::convert::Infallible;
///
///     fn events(&self) -> &EventBus<String> {
///         &self.events
///     }
///
///     fn events_mut(&mut self) -> &mut EventBus<String> {
///         &mut self.events
///     }
/// }
///
/// impl Document {
///     fn edit(&mut self, text: &str) {
///         self.text = text.to_string();
///         let text = self.text.clone();
///         let _ = self.trigger("edited", &text);
///     }
/// }
///
/// let mut doc = Document::default();
/// let id = doc.subscribe("edited", |text: &String| {
///     assert_eq!(text, "hello");
///     Ok(())
/// });
///
/// doc.edit("hello");
/// assert!(doc.unsubscribe("edited", id));
/// assert!(doc.events().is_empty());
/// ```
pub trait EventEmitting {
    /// Argument passed to every handler.
    type Args: 'static;
    /// Error a handler may return.
    type Error: 'static;

    /// Returns the owned bus.
    fn events(&self) -> &EventBus<Self::Args, Self::Error>;

    /// Returns the owned bus mutably.
    fn events_mut(&mut self) -> &mut EventBus<Self::Args, Self::Error>;

    /// See [`EventBus::subscribe`].
    #[inline]
    fn subscribe(
        &mut self,
        event: impl Into<Cow<'static, str>>,
        handler: impl FnMut(&Self::Args) -> Result<(), Self::Error> + Send + Sync + 'static,
    ) -> RegistrationId {
        self.events_mut().subscribe(event, handler)
    }

    /// See [`EventBus::unsubscribe`].
    #[inline]
    fn unsubscribe(&mut self, event: &str, id: RegistrationId) -> bool {
        self.events_mut().unsubscribe(event, id)
    }

    /// See [`EventBus::trigger`].
    #[inline]
    fn trigger(&mut self, event: &str, args: &Self::Args) -> Result<(), Self::Error> {
        self.events_mut().trigger(event, args)
    }

    /// See [`EventBus::clear`].
    #[inline]
    fn clear(&mut self, event: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.events_mut().clear(event);
        self
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{EventBus, EventEmitting};

    #[derive(Default)]
    struct Counter {
        value: i64,
        events: EventBus<i64, &'static str>,
    }

    impl EventEmitting for Counter {
        type Args = i64;
        type Error = &'static str;

        fn events(&self) -> &EventBus<i64, &'static str> {
            &self.events
        }

        fn events_mut(&mut self) -> &mut EventBus<i64, &'static str> {
            &mut self.events
        }
    }

    impl Counter {
        fn add(&mut self, delta: i64) -> Result<(), &'static str> {
            self.trigger("change", &delta)?;
            self.value += delta;
            Ok(())
        }
    }

    #[test]
    fn handlers_can_veto() {
        let mut counter = Counter::default();
        counter.subscribe("change", |delta: &i64| {
            if *delta > 10 { Err("too large") } else { Ok(()) }
        });

        assert!(counter.add(4).is_ok());
        assert_eq!(counter.add(11), Err("too large"));
        assert_eq!(counter.value, 4);

        counter.clear("change").clear("other");
        assert!(counter.add(11).is_ok());
        assert_eq!(counter.value, 15);
    }

    #[test]
    fn bus_is_per_instance() {
        let mut a = Counter::default();
        let b = Counter::default();
        a.subscribe("change", |_: &i64| Ok(()));

        assert_eq!(a.events().len("change"), 1);
        assert!(b.events().is_empty());
        assert_eq!(a.events().event_types().collect::<Vec<_>>(), ["change"]);
    }
}
