pub mod inspect;
pub mod resolve;
