pub mod record;
pub mod standardize;
pub mod region;
pub mod filter;
pub mod flow;
pub mod temporal;
pub mod pareto;
pub mod hierarchy;
pub mod crosstab;
pub mod profile;
pub mod reconcile;
pub mod dataset;
pub mod dashboard;
pub mod config;
