pub mod tests_aliasing;
pub mod tests_defaults;
