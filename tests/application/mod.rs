mod prompt_builder_test;
mod response_parser_test;
mod session_store_test;
