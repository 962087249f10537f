//! Quiz problem record produced by the CSV converter.

use serde::Serialize;

/// One dialogue/quiz entry. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub dialogs: String,
    pub options: Vec<String>,
    pub ans: String,
}
