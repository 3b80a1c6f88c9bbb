pub mod storage;
pub mod thumbnail;
