pub mod io;
pub mod template;
pub mod validation;
