pub mod client_info;

pub use client_info::ClientInfo;
