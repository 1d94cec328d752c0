mod input_kind_table_tests;
mod test_utils;
