// News and sentiment domain
pub mod news;

// Static sector/company reference data
pub mod industry;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
