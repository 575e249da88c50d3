//! Value objects shared by every layer

pub mod binding;
pub mod capability;
pub mod instance;

pub use binding::{Binding, Lifetime, SingletonScope};
pub use capability::CapabilityId;
pub use instance::Instance;
