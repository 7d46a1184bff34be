pub mod convert;
pub mod decoder;
pub mod filters;
pub mod preprocessor;
pub mod reader;
pub mod rxing_decoder;
