pub mod workers;

pub use workers::WorkerService;
