pub mod candidate;
pub mod culture;
pub mod employee;
pub mod evaluation;
pub mod intern;
pub mod leave;
pub mod portfolio;
pub mod position;
pub mod salary;
