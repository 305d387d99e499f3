mod utils;

mod collector_tests;
