pub mod event_loop;
pub mod pull_requests;
pub mod repo_list;
pub mod scroll;
pub mod toast;
