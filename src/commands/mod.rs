pub mod init;
pub mod password_gen;
pub mod strength;
pub mod testpass;
