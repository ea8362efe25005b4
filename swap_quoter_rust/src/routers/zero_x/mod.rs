pub mod endpoints;
pub mod requests;
pub mod responses;
pub mod transport;
pub mod zero_x;
