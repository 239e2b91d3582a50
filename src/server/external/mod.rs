//! Outbound collaborators: object storage and the mail relay.
//!
//! Both sit behind traits so services can be exercised with in-memory doubles.

pub mod mail;
pub mod storage;
