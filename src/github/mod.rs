pub mod context;
pub mod event;
pub mod github_client;
mod macros;
pub mod response;

pub use context::{GithubContext, Repo};
pub use event::{EventPayload, PullRequest};
pub use github_client::GithubClient;
