mod form_submission_tests;
mod mutation_request_tests;
