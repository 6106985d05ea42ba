// Fri Oct 16 2026 - Alex

pub mod address;
pub mod routine;
pub mod cache;
pub mod prober;

pub use address::Address;
pub use routine::ProbeRoutine;
pub use cache::RoutineCache;
pub use prober::AddressProbe;
