mod mutation_field_tests;
mod mutation_fragment_tests;
