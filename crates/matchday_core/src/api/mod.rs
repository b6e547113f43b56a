//! JSON surface over the match engine.

pub mod report_json;

pub use report_json::{match_report_json, parse_match_report, MatchReport, REPORT_SCHEMA_VERSION};
