mod client;
mod errors;
mod fetch;
mod query;
pub mod types;
pub mod user_agent;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::fetch::{PageFetcher, DEFAULT_FETCH_TIMEOUT};
pub use self::query::{SuggestQuery, MAX_SUGGESTIONS};
