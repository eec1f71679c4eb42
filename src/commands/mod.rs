pub mod check;
pub mod export;
pub mod init;
pub mod month;
pub mod now;
pub mod pitches;
pub mod posts;
pub mod upcoming;
