pub mod form;

pub use form::FormInput;
