// src/cli/mod.rs
pub mod cli;
pub mod run;
pub mod run_export_csv;
pub mod run_load_file;
pub mod run_paste_text;
pub mod show_parsed_contacts;
