mod commit_response;

pub use commit_response::CommitResponse;
