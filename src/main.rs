//! Console demo: sort an array with one algorithm and print every step.
//!
//! ```text
//! stepsort [ALGORITHM] [VALUE...]
//! ```
//!
//! `ALGORITHM` defaults to quick. Without values a fixed sample array is
//! used. Set `STEPSORT_DELAY_MS` to change the pause between steps and
//! `RUST_LOG` to change log verbosity.

use std::env;
use std::process::ExitCode;
use std::time::Duration;

use stepsort::Algorithm;
use stepsort::Driver;
use stepsort::DriverConfig;
use stepsort::Observer;
use stepsort::SortingEvent;
use tracing::error;

const SAMPLE: [i64; 10] = [38, 27, 43, 3, 9, 82, 10, 3, 56, 21];

/// Prints each event as a row of values with the highlighted ones
/// bracketed.
struct ConsoleObserver {
    steps: u64,
}

impl ConsoleObserver {
    fn render(event: &SortingEvent) -> String {
        let mut line = String::new();
        for (index, value) in event.array().iter().enumerate() {
            if index > 0 {
                line.push(' ');
            }
            if event.is_highlighted(index) {
                line.push_str(&format!("[{value}]"));
            } else {
                line.push_str(&format!(" {value} "));
            }
        }
        return line;
    }
}

impl Observer for ConsoleObserver {
    fn on_step(&mut self, event: &SortingEvent) {
        self.steps += 1;
        println!(
            "{:>5}  {}  (cmp {}, swp {})",
            self.steps,
            ConsoleObserver::render(event),
            event.comparisons(),
            event.swaps()
        );
    }

    fn on_complete(&mut self, event: &SortingEvent) {
        println!();
        println!("sorted:      {:?}", event.array());
        println!("steps:       {}", self.steps);
        println!("comparisons: {}", event.comparisons());
        println!("swaps:       {}", event.swaps());
        println!("elapsed:     {:?}", event.elapsed());
    }
}

fn delay_from_env() -> Duration {
    return env::var("STEPSORT_DELAY_MS")
        .ok()
        .and_then(|ms| ms.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_millis(50));
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let algorithm = match args.next() {
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) => algorithm,
            Err(err) => {
                error!(%err, "choose one of: bubble, selection, insertion, quick, merge, counting");
                return ExitCode::FAILURE;
            }
        },
        None => Algorithm::Quick,
    };

    let mut values = Vec::new();
    for arg in args {
        match arg.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                error!(value = %arg, "not an integer");
                return ExitCode::FAILURE;
            }
        }
    }
    if values.is_empty() {
        values = SAMPLE.to_vec();
    }

    let info = algorithm.info();
    println!("{}", info.name);
    println!("{}", info.description);
    println!(
        "worst {} | average {} | best {} | space {}",
        info.worst_case, info.average_case, info.best_case, info.space
    );
    println!();

    let mut driver = Driver::new(DriverConfig::default().with_delay(delay_from_env()));
    driver.register_observer(ConsoleObserver { steps: 0 });
    if let Err(err) = driver.set_array(&values) {
        error!(%err, "could not load array");
        return ExitCode::FAILURE;
    }
    if let Err(err) = driver.set_algorithm(algorithm) {
        error!(%err, "could not start sort");
        return ExitCode::FAILURE;
    }
    if let Err(err) = driver.run() {
        error!(%err, "sort failed");
        return ExitCode::FAILURE;
    }
    return ExitCode::SUCCESS;
}
