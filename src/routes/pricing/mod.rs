mod get;
mod post;

pub use get::show_price_form;
pub use post::calculate_price;
