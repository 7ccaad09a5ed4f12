pub mod clients;
pub mod orders;
pub mod payments;
pub mod products;
pub mod promo_codes;
