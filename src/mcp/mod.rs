// Protocol envelope, method routing and the stdio transport
pub mod handler;
pub mod protocol;
pub mod stdio;
