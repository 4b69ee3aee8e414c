pub mod card_stack;
pub mod case_carousel;
pub mod clients;
pub mod contact;
pub mod detail;
pub mod faq;
pub mod listeners;
pub mod navbar;
pub mod navigation;
pub mod sections;
