pub mod group;
pub mod release;

pub use group::Entity as Group;
pub use release::Entity as Release;
