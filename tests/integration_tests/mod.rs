pub mod remote_reader;
