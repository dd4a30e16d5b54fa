//! Recorded runs and their fingerprints.
//!
//! A trace is every event of one run, in order. Because steppers are
//! deterministic, recording the same algorithm on the same input twice
//! gives the same trace up to timing, and `TraceDigest` makes that cheap
//! to check: it hashes arrays, highlights and counters, but not elapsed
//! time.

use std::fmt;

use crate::error::StepError;
use crate::event::SortingEvent;
use crate::observer::Observer;
use crate::stepper::Algorithm;
use crate::stepper::Stepper;

/// Type constant for a step event in the digest.
const TYPE_STEP: u8 = 0x00;

/// Type constant for the completion event in the digest.
const TYPE_COMPLETE: u8 = 0x01;

/// A blake3 fingerprint of a trace, 32 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceDigest(pub [u8; 32]);

impl fmt::Debug for TraceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "TraceDigest({self})");
    }
}

impl fmt::Display for TraceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        return Ok(());
    }
}

/// Every event of one run, in the order it happened.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    steps: Vec<SortingEvent>,
    complete: Option<SortingEvent>,
}

impl Trace {
    pub fn new() -> Trace {
        return Trace::default();
    }

    /// Step a fresh `algorithm` stepper through `input`, keeping every
    /// event.
    pub fn record(algorithm: Algorithm, input: &[i64]) -> Result<Trace, StepError> {
        let mut stepper = algorithm.stepper();
        stepper.init(input)?;
        return Ok(Trace::record_stepper(&mut *stepper));
    }

    /// Step an initialised stepper to completion, keeping every event.
    pub fn record_stepper(stepper: &mut dyn Stepper) -> Trace {
        let mut trace = Trace::new();
        while !stepper.is_complete() {
            let event = stepper.step();
            trace.on_step(&event);
        }
        trace.on_complete(&stepper.snapshot());
        return trace;
    }

    /// Step events, in order.
    pub fn steps(&self) -> &[SortingEvent] {
        return &self.steps;
    }

    pub fn len(&self) -> usize {
        return self.steps.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.steps.is_empty();
    }

    /// The completion event, once the run has finished.
    pub fn final_event(&self) -> Option<&SortingEvent> {
        return self.complete.as_ref();
    }

    /// Hash every recorded event with domain separation between step and
    /// completion events.
    pub fn digest(&self) -> TraceDigest {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.steps.len() as u64).to_le_bytes());
        for event in &self.steps {
            hash_event(&mut hasher, TYPE_STEP, event);
        }
        if let Some(event) = &self.complete {
            hash_event(&mut hasher, TYPE_COMPLETE, event);
        }
        return TraceDigest(*hasher.finalize().as_bytes());
    }
}

fn hash_event(hasher: &mut blake3::Hasher, kind: u8, event: &SortingEvent) {
    hasher.update(&[kind]);
    hasher.update(&(event.array().len() as u64).to_le_bytes());
    for value in event.array() {
        hasher.update(&value.to_le_bytes());
    }
    hasher.update(&(event.highlights().len() as u64).to_le_bytes());
    for &index in event.highlights() {
        hasher.update(&(index as u64).to_le_bytes());
    }
    hasher.update(&event.comparisons().to_le_bytes());
    hasher.update(&event.swaps().to_le_bytes());
}

impl Observer for Trace {
    fn on_step(&mut self, event: &SortingEvent) {
        self.steps.push(event.clone());
    }

    fn on_complete(&mut self, event: &SortingEvent) {
        self.complete = Some(event.clone());
    }
}
