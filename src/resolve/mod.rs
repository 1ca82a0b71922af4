pub mod plural;
pub mod resolver;

pub use plural::PluralRule;
pub use resolver::{Resolver, TrustPolicy};
