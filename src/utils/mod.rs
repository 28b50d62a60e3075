// Utils compartidos

pub mod validation;

pub use validation::validate_password;
