pub mod client;
pub mod order;
pub mod payment;
pub mod product;
pub mod promo_code;
