//! Scenario-based tests for the scaffolding pipeline


mod end_to_end;
mod fail_fast;
