pub mod db_utils;
pub mod wage;
pub mod worker_codes;
