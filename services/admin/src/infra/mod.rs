pub mod db;
pub mod identity;
