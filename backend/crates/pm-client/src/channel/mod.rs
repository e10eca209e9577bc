pub mod channel;
pub mod http_channel;
