//! Integration tests for dbo-orderbook.

mod orderbook_tests;
mod scenario_tests;
