pub mod common;

mod cross_tier;
mod single_flight;
