//! Receivers of driver notifications.

use std::sync::mpsc::Sender;

use crate::event::SortingEvent;

/// Something that wants to see a sort as it happens: a console printer, a
/// canvas, a statistics panel.
///
/// The driver calls `on_step` after every step, in step order, and
/// `on_complete` exactly once per run, after the last `on_step`. If the
/// run had nothing to do (an empty array, say) `on_complete` is the only
/// call.
pub trait Observer {
    fn on_step(&mut self, event: &SortingEvent);

    fn on_complete(&mut self, event: &SortingEvent);
}

/// Handle returned by `Driver::register_observer`, used to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// A driver notification as a value, for sending across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Step(SortingEvent),
    Complete(SortingEvent),
}

impl Notification {
    pub fn event(&self) -> &SortingEvent {
        return match self {
            Notification::Step(event) => event,
            Notification::Complete(event) => event,
        };
    }

    pub fn is_complete(&self) -> bool {
        return matches!(self, Notification::Complete(_));
    }
}

/// Forward notifications over a channel, typically to a UI thread.
///
/// A closed channel is ignored: the driver keeps stepping.
impl Observer for Sender<Notification> {
    fn on_step(&mut self, event: &SortingEvent) {
        let _ = self.send(Notification::Step(event.clone()));
    }

    fn on_complete(&mut self, event: &SortingEvent) {
        let _ = self.send(Notification::Complete(event.clone()));
    }
}
