/// Raw string cache backend contract.
pub mod cache_backend;
