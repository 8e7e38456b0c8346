//! SeaORM entity definitions
//!
//! Classmine tables hang off a course, Bordermine tables off a company.

pub mod activity;
pub mod client;
pub mod company;
pub mod course;
pub mod manifest;
pub mod objective;
pub mod shipping_item;
pub mod vocabulary_word;

pub use activity::Entity as Activity;
pub use client::Entity as Client;
pub use company::Entity as Company;
pub use course::Entity as Course;
pub use manifest::Entity as Manifest;
pub use objective::Entity as Objective;
pub use shipping_item::Entity as ShippingItem;
pub use vocabulary_word::Entity as VocabularyWord;
