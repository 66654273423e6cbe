mod report_tests;
mod utils;
