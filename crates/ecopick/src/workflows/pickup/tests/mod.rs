mod common;
mod pricing;
mod region;
