mod config;

use clap::Parser;
use config::Scenario;
use log::{error, info};
use wrapq::CircularQueue;

/// Walks a circular array queue through wrap-around, a doubling resize,
/// and the empty-queue error, logging the raw backing store after every
/// operation.
#[derive(Parser, Debug)]
#[command(name = "wrapq-demo")]
struct Args {
    /// Path to a TOML scenario file (capacity, items)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the scenario's initial capacity
    #[arg(long)]
    capacity: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut scenario = match &args.config {
        Some(path) => config::load_scenario(path)?,
        None => Scenario::built_in(),
    };
    if let Some(capacity) = args.capacity {
        scenario.capacity = capacity;
    }

    let mut queue = CircularQueue::with_capacity(scenario.capacity)?;
    info!(
        "Starting with capacity {}: {:?}",
        queue.capacity(),
        queue
    );

    run_walk(&mut queue, scenario.items);

    Ok(())
}

fn run_walk(queue: &mut CircularQueue<String>, items: Vec<String>) {
    let mut pending = items.into_iter();

    // Fill the initial store.
    while !queue.is_full() {
        match pending.next() {
            Some(item) => enqueue_step(queue, item),
            None => break,
        }
    }

    // Vacate one slot so later enqueues wrap into it.
    dequeue_step(queue);

    // Feed the rest: the first enqueue wraps into the vacated slot, the
    // one after that doubles the store.
    for item in pending {
        enqueue_step(queue, item);
    }

    // Drain in FIFO order.
    while !queue.is_empty() {
        dequeue_step(queue);
    }

    // One more dequeue to show the empty-queue error.
    dequeue_step(queue);
}

fn enqueue_step(queue: &mut CircularQueue<String>, item: String) {
    info!("enqueue {:?}", item);
    queue.enqueue(item);
    log_state(queue);
}

fn dequeue_step(queue: &mut CircularQueue<String>) {
    match queue.dequeue() {
        Ok(item) => info!("dequeue -> {:?}", item),
        Err(e) => error!("dequeue failed: {}", e),
    }
    log_state(queue);
}

fn log_state(queue: &CircularQueue<String>) {
    info!("  {}/{} {:?}", queue.len(), queue.capacity(), queue);
}
