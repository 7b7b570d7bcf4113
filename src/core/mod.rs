pub mod extractor;
pub mod fetcher;
pub mod picker;
pub mod query;
pub mod search;

pub use crate::domain::model::{CandidateList, PortmanteauRecord, SearchOutcome, SearchQuery};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
