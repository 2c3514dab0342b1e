mod launcher_process_tests;
mod store_file_tests;
