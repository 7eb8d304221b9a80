// common helpers
pub mod errors;
pub mod report;
pub mod config;
pub mod signs;
pub mod tolerances;
pub mod extrema;

// solver contract and orchestration
pub mod solver;
pub mod orchestrator;

// backends
pub mod aberth;
