pub mod create_exclude_day_request;
pub mod exclude_day_response;
pub mod exclude_days;
