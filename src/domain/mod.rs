// Market data model
pub mod market;

// Sparkline geometry
pub mod trend;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
