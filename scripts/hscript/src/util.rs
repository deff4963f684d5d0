pub mod file_src;
