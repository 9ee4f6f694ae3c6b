pub mod checksum;
pub mod clock;
pub mod content;
pub mod format;
pub mod generate;
pub mod prepare;
pub mod report;
pub mod request;
