// Integration tests for pgddl

pub mod cli;
