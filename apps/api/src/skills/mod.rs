// Skill/Requirement comparison: the only computational core of the service.
// Everything here is pure and synchronous; callers share inputs freely.

pub mod comparator;
pub mod models;
pub mod validation;
