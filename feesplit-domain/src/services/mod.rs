pub mod fee_allocator;
pub mod host_policy;

pub use fee_allocator::FeeAllocator;
pub use host_policy::HostPolicy;
