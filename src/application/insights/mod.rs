pub mod dispatcher;
pub mod prompts;

pub use dispatcher::InsightDispatcher;
pub use prompts::{ANALYST_SYSTEM_PROMPT, InsightRequest};
