pub mod date_card;
pub mod profile_card;
pub mod todos;

pub use date_card::DateCard;
pub use profile_card::ProfileCard;
pub use todos::TodosCard;
