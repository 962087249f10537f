//! CSV to JSON conversion for quiz/dialogue data.

pub mod lines;
pub mod problems;

pub use lines::split_lines;
pub use problems::{convert_file, parse_problems, render_problems_json, ConvertError};

pub const DEFAULT_INPUT: &str = "problems.csv";
pub const DEFAULT_OUTPUT: &str = "problems.json";
