pub mod quote_card;
pub mod sparkline;
