// Service exports
pub mod input;
pub mod text;

pub use input::{InputError, load_addresses, load_drivers, parse_addresses, parse_drivers};
pub use text::{count_consonants, count_vowels, extract_street_name, name_length};
