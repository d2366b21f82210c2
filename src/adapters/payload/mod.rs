//! Payload adapter - JSON/YAML request and response documents.
//!
//! Converts the external `{ method, parameters }` request envelope into a
//! validated `DecisionProblem` and renders `TopsisAnalysis` results back
//! into the `{ results }` response envelope.

mod dto;
mod processor;
mod request_file;

pub use dto::{
    round_to, DistanceDto, ErrorResponse, FuzzyTopsisParameters, FuzzyTopsisRequest,
    FuzzyTopsisResponse, FuzzyTopsisResults, Method,
};
pub use processor::RequestProcessor;
pub use request_file::{load_request, parse_request, RequestFileError, RequestFormat};
