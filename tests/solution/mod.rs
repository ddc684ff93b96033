pub mod tests_solution;
