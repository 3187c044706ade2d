pub mod card_source;
pub mod storage;
