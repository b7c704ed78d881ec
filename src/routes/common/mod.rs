pub mod filters;
mod notice;

pub use notice::{Notice, NoticeQuery, redirect_with_notice};
