mod env;
mod overrides;
mod settings;

pub use env::*;
pub use overrides::filter_employees;
pub use settings::*;
