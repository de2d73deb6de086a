pub mod catalogue;
pub mod eligibility;
pub mod docs;

pub use catalogue::*;
pub use eligibility::*;
pub use docs::*;
