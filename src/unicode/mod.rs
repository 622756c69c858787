pub mod percent_encode;
pub mod utf8;
