pub mod oracle;
pub mod restart;
pub mod schoening;
