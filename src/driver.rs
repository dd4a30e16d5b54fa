//! The driver: one stepper, a cadence, and the observers watching it.
//!
//! The driver owns everything a run touches. Stepping it from a background
//! thread means moving it there with `spawn`, which makes the thread the
//! only writer for the duration; `DriverHandle::join` hands it back.
//! Stopping is cooperative: the worker checks for a stop request between
//! ticks and while waiting out the delay, and every step leaves the stepper
//! in a resumable state, so nothing needs unwinding.

use std::panic;
use std::panic::AssertUnwindSafe;
use std::sync::mpsc;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::mpsc::Sender;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;
use tracing::info;
use tracing::trace;
use tracing::warn;

use crate::error::DriverError;
use crate::event::SortingEvent;
use crate::observer::Observer;
use crate::observer::ObserverId;
use crate::stepper::Algorithm;
use crate::stepper::Stepper;

/// Default pause between ticks of a timed run.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Driver settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverConfig {
    /// Pause between ticks in `run` and on the background thread.
    pub delay: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        return DriverConfig { delay: DEFAULT_DELAY };
    }
}

impl DriverConfig {
    pub fn with_delay(mut self, delay: Duration) -> DriverConfig {
        self.delay = delay;
        return self;
    }
}

/// What a single `tick` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// A step was taken and published with `on_step`.
    Step(SortingEvent),
    /// The run finished during this tick and `on_complete` was published.
    Complete(SortingEvent),
    /// The run had already finished; nothing was published.
    Idle,
}

/// Steps a sorter and fans each event out to its observers.
pub struct Driver {
    config: DriverConfig,
    array: Vec<i64>,
    stepper: Option<Box<dyn Stepper + Send>>,
    observers: Vec<(ObserverId, Box<dyn Observer + Send>)>,
    next_observer: u64,
    steps: u64,
    finished: bool,
    last: Option<SortingEvent>,
}

impl Default for Driver {
    fn default() -> Self {
        return Self::new(DriverConfig::default());
    }
}

impl Driver {
    pub fn new(config: DriverConfig) -> Driver {
        return Driver {
            config,
            array: Vec::new(),
            stepper: None,
            observers: Vec::new(),
            next_observer: 0,
            steps: 0,
            finished: false,
            last: None,
        };
    }

    pub fn config(&self) -> &DriverConfig {
        return &self.config;
    }

    pub fn delay(&self) -> Duration {
        return self.config.delay;
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.config.delay = delay;
    }

    /// The array each run starts from.
    pub fn array(&self) -> &[i64] {
        return &self.array;
    }

    /// Store a copy of `array` and, if a stepper is installed, restart it
    /// on the new input. If the stepper rejects the input, the previous
    /// array and run are kept.
    pub fn set_array(&mut self, array: &[i64]) -> Result<(), DriverError> {
        if let Some(stepper) = self.stepper.as_mut() {
            stepper.init(array)?;
            debug!(algorithm = stepper.name(), len = array.len(), "run restarted");
            self.reset_run();
        }
        self.array = array.to_vec();
        return Ok(());
    }

    /// Initialise `stepper` with the current array and make it the active
    /// one. On error the previous stepper stays installed.
    pub fn set_stepper(&mut self, mut stepper: Box<dyn Stepper + Send>) -> Result<(), DriverError> {
        stepper.init(&self.array)?;
        debug!(algorithm = stepper.name(), len = self.array.len(), "stepper installed");
        self.stepper = Some(stepper);
        self.reset_run();
        return Ok(());
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), DriverError> {
        return self.set_stepper(algorithm.stepper());
    }

    /// The active stepper, if any.
    pub fn stepper(&self) -> Option<&(dyn Stepper + Send)> {
        return self.stepper.as_deref();
    }

    /// Re-initialise the active stepper from the stored array.
    pub fn restart(&mut self) -> Result<(), DriverError> {
        let Some(stepper) = self.stepper.as_mut() else {
            return Err(DriverError::NoStepper);
        };
        stepper.init(&self.array)?;
        debug!(algorithm = stepper.name(), len = self.array.len(), "run restarted");
        self.reset_run();
        return Ok(());
    }

    fn reset_run(&mut self) {
        self.steps = 0;
        self.finished = false;
        self.last = None;
    }

    pub fn register_observer<O: Observer + Send + 'static>(&mut self, observer: O) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        return id;
    }

    /// Returns false if `id` was not registered.
    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(other, _)| *other != id);
        return self.observers.len() != before;
    }

    pub fn observer_count(&self) -> usize {
        return self.observers.len();
    }

    /// Steps taken in the current run.
    pub fn steps(&self) -> u64 {
        return self.steps;
    }

    /// True once `on_complete` has been published for the current run.
    pub fn is_finished(&self) -> bool {
        return self.finished;
    }

    /// The most recent event published in the current run.
    pub fn last_event(&self) -> Option<&SortingEvent> {
        return self.last.as_ref();
    }

    /// Take one step and publish it.
    ///
    /// If this step completes the sort, observers see `on_step` followed by
    /// `on_complete` with the same event. If the stepper was already
    /// complete before the tick (e.g. an empty array), only `on_complete`
    /// is published. Once the run is finished, ticks are idle.
    pub fn tick(&mut self) -> Result<Tick, DriverError> {
        if self.finished {
            if self.stepper.is_none() {
                return Err(DriverError::NoStepper);
            }
            return Ok(Tick::Idle);
        }
        let Some(stepper) = self.stepper.as_mut() else {
            return Err(DriverError::NoStepper);
        };

        if stepper.is_complete() {
            let event = stepper.step();
            self.finish(&event);
            return Ok(Tick::Complete(event));
        }

        let event = stepper.step();
        let done = stepper.is_complete();
        self.steps += 1;
        trace!(
            step = self.steps,
            comparisons = event.comparisons(),
            swaps = event.swaps(),
            "tick"
        );
        self.publish(&event, false);

        if done {
            self.finish(&event);
            return Ok(Tick::Complete(event));
        }
        self.last = Some(event.clone());
        return Ok(Tick::Step(event));
    }

    fn finish(&mut self, event: &SortingEvent) {
        self.finished = true;
        self.last = Some(event.clone());
        let name = self.stepper.as_ref().map_or("?", |s| s.name());
        info!(
            algorithm = name,
            steps = self.steps,
            comparisons = event.comparisons(),
            swaps = event.swaps(),
            elapsed_ms = event.elapsed().as_millis() as u64,
            "sort complete"
        );
        self.publish(event, true);
    }

    /// Deliver to every observer. A panicking observer is logged and
    /// skipped; it does not stop delivery to the others.
    fn publish(&mut self, event: &SortingEvent, complete: bool) {
        for (id, observer) in self.observers.iter_mut() {
            let delivered = panic::catch_unwind(AssertUnwindSafe(|| {
                if complete {
                    observer.on_complete(event);
                } else {
                    observer.on_step(event);
                }
            }));
            if delivered.is_err() {
                warn!(observer = id.0, complete, "observer panicked");
            }
        }
    }

    /// Tick until the run finishes, pausing `delay` between ticks on the
    /// calling thread. Returns the final event.
    pub fn run(&mut self) -> Result<SortingEvent, DriverError> {
        let (_keep_open, stop) = mpsc::channel();
        let finished = self.drive(&stop)?;
        return finished.ok_or(DriverError::NoStepper);
    }

    /// Tick until the run finishes or a stop request arrives. Returns the
    /// final event, or `None` if stopped first.
    fn drive(&mut self, stop: &Receiver<()>) -> Result<Option<SortingEvent>, DriverError> {
        debug!(delay_ms = self.config.delay.as_millis() as u64, "run started");
        loop {
            if stop.try_recv().is_ok() {
                debug!(steps = self.steps, "run stopped");
                return Ok(None);
            }
            match self.tick()? {
                Tick::Step(_) => {}
                Tick::Complete(event) => return Ok(Some(event)),
                Tick::Idle => return Ok(self.last.clone()),
            }
            match stop.recv_timeout(self.config.delay) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    debug!(steps = self.steps, "run stopped");
                    return Ok(None);
                }
                Err(RecvTimeoutError::Timeout) => {}
            }
        }
    }

    /// Move the driver onto a dedicated thread and tick it there until the
    /// run finishes or `DriverHandle::stop` is called.
    pub fn spawn(mut self) -> DriverHandle {
        let (stop_tx, stop_rx) = mpsc::channel();
        let thread = thread::spawn(move || {
            if let Err(err) = self.drive(&stop_rx) {
                warn!(%err, "background run ended with an error");
            }
            return self;
        });
        return DriverHandle { stop: stop_tx, thread };
    }
}

/// A driver running on its own thread.
///
/// Dropping the handle without joining also stops the run.
pub struct DriverHandle {
    stop: Sender<()>,
    thread: JoinHandle<Driver>,
}

impl DriverHandle {
    /// Ask the worker to stop after its current tick.
    pub fn stop(&self) {
        let _ = self.stop.send(());
    }

    /// True once the worker has returned, either finished or stopped.
    pub fn is_finished(&self) -> bool {
        return self.thread.is_finished();
    }

    /// Wait for the worker and take the driver back. A stopped run can be
    /// resumed with `tick`, `run` or another `spawn`.
    pub fn join(self) -> Result<Driver, DriverError> {
        let DriverHandle { stop, thread } = self;
        let driver = thread.join().map_err(|_| DriverError::WorkerPanicked);
        drop(stop);
        return driver;
    }

    /// Stop the worker and wait for it.
    pub fn cancel(self) -> Result<Driver, DriverError> {
        self.stop();
        return self.join();
    }
}
