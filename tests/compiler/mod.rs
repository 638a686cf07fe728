mod desugar_tests;
mod reader_tests;
