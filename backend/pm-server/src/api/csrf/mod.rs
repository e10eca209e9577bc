pub mod csrf;
pub mod csrf_response;
