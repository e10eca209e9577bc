pub mod priorities_response;
pub mod stories;
pub mod story_list_response;
pub mod story_response;
pub mod update_priorities_request;
pub mod update_priority_request;
