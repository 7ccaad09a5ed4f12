pub mod form_field;
pub mod modal;
pub mod notifications;
pub mod pagination_controls;
pub mod promo_code_input;
pub mod stat_card;
pub mod status_badge;
