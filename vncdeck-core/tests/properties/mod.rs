mod connection_tests;
mod launcher_tests;
mod store_tests;
