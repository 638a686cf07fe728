mod closure_tests;
mod dict_tests;
mod primitive_tests;
mod smoke_tests;
