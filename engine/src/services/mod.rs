pub mod csv_service;

pub use csv_service::{read_price_file, read_price_series, write_indicator_csv, write_indicator_file};
