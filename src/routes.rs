pub mod division;
pub mod multiplication;
pub mod parameters;
